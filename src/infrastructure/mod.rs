pub mod logger;
pub mod storage;
