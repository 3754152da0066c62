//! 商品数据模型

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 商品记录
///
/// `name`/`login`/`password` 入库前经过字符串整理，`amount` 原样透传。
/// 其余商业字段都是可选的自由字段，缺省时不参与序列化。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Goods {
    pub id: String,
    pub name: String,
    pub login: String,
    pub password: String,
    #[serde(default)]
    pub amount: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rub: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Value>,
    #[serde(
        rename = "creationDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<String>,
}

/// 创建商品的请求体
///
/// 必填字段按任意 JSON 值接收，由 [`as_string`] 统一整理。
#[derive(Debug, Default, Deserialize)]
pub struct GoodsDraft {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub login: Value,
    #[serde(default)]
    pub password: Value,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub discount: Option<Value>,
    #[serde(default)]
    pub rub: Option<Value>,
    #[serde(default)]
    pub bit: Option<Value>,
    #[serde(default)]
    pub transactions: Option<Value>,
    #[serde(rename = "creationDate", default)]
    pub creation_date: Option<String>,
}

/// 部分更新的请求体，只有给出的字段会合并到已有记录上
#[derive(Debug, Default, Deserialize)]
pub struct GoodsPatch {
    pub name: Option<Value>,
    pub login: Option<Value>,
    pub password: Option<Value>,
    pub amount: Option<Value>,
}

/// 把任意 JSON 值整理成字符串：字符串去首尾空白，
/// 数字和布尔值取其文本形式，其余一律为空串
pub fn as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// 自由字段的"真值"判定，`null`/`false`/`0`/空串都算假
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 生成商品 id：六位随机数字片段拼上毫秒时间戳的末四位。
/// 与原始数据兼容，不保证唯一。
pub fn generate_id() -> String {
    let random_part: u32 = rand::thread_rng().gen_range(0..1_000_000);
    let stamp = Utc::now().timestamp_millis() % 10_000;
    format!("{:06}{:04}", random_part, stamp)
}
