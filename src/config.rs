//! 服务配置

use std::env;
use std::path::PathBuf;

/// 商品 CMS 服务配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 商品库文件路径
    pub db_path: PathBuf,
}

impl Config {
    /// 从环境变量读取配置，缺省时使用默认值
    ///
    /// - `PORT` 覆盖端口，默认 3000
    /// - `DB_GOODS` 覆盖商品库文件路径，默认 `./db_goods.json`
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3000);
        let db_path = env::var("DB_GOODS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./db_goods.json"));

        Self {
            bind_address: "0.0.0.0".to_string(),
            port,
            db_path,
        }
    }
}
