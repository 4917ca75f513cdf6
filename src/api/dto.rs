// ==========================================
// 比赛评分与抽奖系统 - API 响应对象
// ==========================================

use crate::domain::candidate::Candidate;
use serde::{Deserialize, Serialize};

/// 仅含提示消息的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 名单上传响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub count: usize,
    pub candidates: Vec<Candidate>,
}

/// 当前候选人列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<Candidate>,
    pub count: usize,
}

/// 累计中奖名单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnerListResponse {
    pub winners: Vec<Candidate>,
    pub count: usize,
}

/// 单轮抽奖结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResponse {
    /// 本轮中奖者（按抽中顺序）
    pub winners: Vec<Candidate>,
    /// 本轮中奖人数
    pub count: usize,
    /// 剩余候选人数
    pub remaining: usize,
    /// 累计中奖人数
    pub total_winners: usize,
}
