// ==========================================
// 比赛评分与抽奖系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与固定业务常量
// 红线: 不含状态管理,不含引擎逻辑
// ==========================================

pub mod candidate;
pub mod contest;

// 重导出核心类型
pub use candidate::{Candidate, DEFAULT_WEIGHT, PRIORITY_DEPT_ID, PRIORITY_DEPT_WEIGHT};
pub use contest::{
    Participant, ParticipantCreate, RankingItem, VoteDetail, VoteSubmission,
};
