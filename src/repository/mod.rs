// ==========================================
// 比赛评分与抽奖系统 - 仓储层
// ==========================================
// 职责: 评分数据的内存存储
// 红线: 不含业务规则（分数范围校验在 API 层）
// ==========================================

pub mod contest_repo;
pub mod error;

pub use contest_repo::{ContestRepository, ContestSnapshot};
pub use error::{RepositoryError, RepositoryResult};
