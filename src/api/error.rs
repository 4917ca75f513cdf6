// ==========================================
// 比赛评分与抽奖系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将引擎/导入/仓储错误转换为用户可读的错误消息
// ==========================================

use crate::engine::lottery::LotteryError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
/// 所有错误均为请求级别，同步返回调用方
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 抽奖错误
    // ==========================================
    #[error("抽奖请求无效: 请求抽取 {requested} 人, 当前候选人仅 {available} 人")]
    InvalidDrawRequest { requested: usize, available: usize },

    #[error("名单导入失败: {0}")]
    IngestionError(String),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<LotteryError> for ApiError {
    fn from(err: LotteryError) -> Self {
        match err {
            LotteryError::InvalidDrawRequest {
                requested,
                available,
            } => ApiError::InvalidDrawRequest {
                requested,
                available,
            },
            LotteryError::WeightError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::IngestionError(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::LockError(msg) => ApiError::InternalError(msg),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lottery_error_conversion() {
        let api_err: ApiError = LotteryError::InvalidDrawRequest {
            requested: 5,
            available: 2,
        }
        .into();

        match api_err {
            ApiError::InvalidDrawRequest {
                requested,
                available,
            } => {
                assert_eq!(requested, 5);
                assert_eq!(available, 2);
            }
            _ => panic!("Expected InvalidDrawRequest"),
        }
    }

    #[test]
    fn test_import_error_keeps_parse_text() {
        let api_err: ApiError = ImportError::ExcelParseError("Cannot detect file format".to_string()).into();
        match api_err {
            ApiError::IngestionError(msg) => assert!(msg.contains("Cannot detect file format")),
            _ => panic!("Expected IngestionError"),
        }
    }

    #[test]
    fn test_repository_error_conversion() {
        let api_err: ApiError = RepositoryError::NotFound {
            entity: "Participant".to_string(),
            id: "P001".to_string(),
        }
        .into();

        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("Participant"));
                assert!(msg.contains("P001"));
            }
            _ => panic!("Expected NotFound"),
        }
    }
}
