pub mod goods;
