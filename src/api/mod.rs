// ==========================================
// 比赛评分与抽奖系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 HTTP 路由调用
// ==========================================

pub mod contest_api;
pub mod dto;
pub mod error;
pub mod lottery_api;

// 重导出核心类型
pub use contest_api::ContestApi;
pub use dto::{
    CandidateListResponse, DrawResponse, MessageResponse, UploadResponse, WinnerListResponse,
};
pub use error::{ApiError, ApiResult};
pub use lottery_api::LotteryApi;
