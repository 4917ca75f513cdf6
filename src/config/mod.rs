// ==========================================
// 比赛评分与抽奖系统 - 配置层
// ==========================================
// 职责: 系统配置管理,支持环境变量与配置文件覆写
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, AppConfig, ConfigError, ConfigManager};
