use crate::api::error::ApiError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具：错误映射、请求解析配置
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// 前端使用的错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidDrawRequest { .. } => "INVALID_DRAW_REQUEST",
            ApiError::IngestionError(_) => "INGESTION_ERROR",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidDrawRequest { .. }
            | ApiError::IngestionError(_)
            | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) | ApiError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("请求处理失败: {:?}", self);
        }

        let details = match self {
            ApiError::InvalidDrawRequest {
                requested,
                available,
            } => Some(serde_json::json!({
                "requested": requested,
                "available": available,
            })),
            _ => None,
        };

        HttpResponse::build(status).json(ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            details,
        })
    }
}

/// 查询参数解析失败统一返回 INVALID_INPUT
pub(super) fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into())
}

/// JSON 请求体解析失败统一返回 INVALID_INPUT
pub(super) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into())
}

/// 路径参数解析失败统一返回 INVALID_INPUT
pub(super) fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into())
}
