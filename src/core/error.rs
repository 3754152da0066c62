//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::error;

/// 应用错误：携带 HTTP 状态码和 JSON 负载
#[derive(Debug)]
pub enum ApiError {
    /// 404，负载为 `{"message": ...}`
    NotFound(String),
    /// 422，负载为 `{"errors": [...]}`
    Unprocessable(Vec<String>),
    /// 500，对客户端只暴露统一的 `Server Error`，原因进日志
    Internal(String),
}

impl ApiError {
    pub fn goods_not_found() -> Self {
        ApiError::NotFound("Goods Not Found".to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::Unprocessable(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Internal(cause) => {
                error!("内部错误: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
