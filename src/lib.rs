//! # 商品 CMS 后端
//!
//! 一个以单个 JSON 文件作为持久层的 HTTP CRUD 服务，提供：
//! - 商品的增删改查
//! - 分类列表与按分类筛选
//! - 折扣商品筛选与标题/描述搜索
//! - 登录凭证查询

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
