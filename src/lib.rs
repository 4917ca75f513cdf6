// ==========================================
// 比赛评分与抽奖系统 - 核心库
// ==========================================
// 技术栈: actix-web + Rust（纯内存状态）
// 系统定位: 评委打分排行 + 加权抽奖
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与常量
pub mod domain;

// 数据仓储层 - 内存存储
pub mod repository;

// 引擎层 - 抽奖与排行算法
pub mod engine;

// 导入层 - 名单文件解析
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{Candidate, Participant, RankingItem, VoteDetail, VoteSubmission};

// 引擎
pub use engine::{LeaderboardEngine, LotteryEngine, LotteryError, LotterySession};

// 导入
pub use importer::{RosterImporter, RosterImporterImpl};

// API
pub use api::{ApiError, ContestApi, LotteryApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "比赛评分与抽奖系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
