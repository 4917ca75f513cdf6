// ==========================================
// 比赛评分与抽奖系统 - 评分领域模型
// ==========================================
// 职责: 参赛者、评委打分、排行榜条目
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Participant - 参赛者
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime, // 登记时间（本地时间）
}

/// 新建参赛者请求
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantCreate {
    pub name: String,
}

// ==========================================
// VoteSubmission - 评委打分请求
// ==========================================
// 同一评委对同一参赛者重复打分时覆盖旧分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteSubmission {
    pub participant_id: String,
    pub judge_name: String,
    pub score: f64,
}

/// 单个评委的打分记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteDetail {
    pub judge_name: String,
    pub score: f64,
}

// ==========================================
// RankingItem - 排行榜条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingItem {
    pub participant_id: String,
    pub participant_name: String,
    pub average_score: f64, // 平均分（保留 2 位小数）
    pub vote_count: usize,  // 打分评委数
}
