// ==========================================
// 比赛评分与抽奖系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 生命周期: main 中创建一次,经 web::Data 注入各路由,无全局单例
// ==========================================

use std::sync::Arc;

use crate::api::{ContestApi, LotteryApi};
use crate::config::AppConfig;
use crate::repository::ContestRepository;

/// 应用状态
///
/// 包含所有API实例和运行时配置
pub struct AppState {
    /// 运行时配置
    pub config: AppConfig,

    /// 抽奖API（持有唯一的抽奖会话）
    pub lottery_api: Arc<LotteryApi>,

    /// 评分API
    pub contest_api: Arc<ContestApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// 该方法会：
    /// 1. 初始化评分仓储
    /// 2. 创建评分API与抽奖API
    pub fn new(config: AppConfig) -> Self {
        tracing::info!("初始化AppState，静态目录: {}", config.static_dir.display());

        let contest_repo = Arc::new(ContestRepository::new());
        let contest_api = Arc::new(ContestApi::new(
            contest_repo,
            config.score_min,
            config.score_max,
        ));
        let lottery_api = Arc::new(LotteryApi::new());

        tracing::info!("AppState初始化完成");

        Self {
            config,
            lottery_api,
            contest_api,
        }
    }
}
