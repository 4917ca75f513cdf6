// ==========================================
// 比赛评分与抽奖系统 - 引擎层
// ==========================================
// 职责: 抽奖算法、抽奖会话、排行榜计算
// 红线: 引擎不做 I/O,不持有锁
// ==========================================

pub mod leaderboard;
pub mod lottery;
pub mod lottery_session;

// 重导出核心类型
pub use leaderboard::LeaderboardEngine;
pub use lottery::{DrawOutcome, LotteryEngine, LotteryError, LotteryResult};
pub use lottery_session::LotterySession;
