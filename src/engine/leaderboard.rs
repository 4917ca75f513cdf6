// ==========================================
// 比赛评分与抽奖系统 - 排行榜引擎
// ==========================================
// 职责: 计算参赛者平均分并排序
// 输入: 参赛者列表（插入顺序）+ 各参赛者评委打分
// 输出: RankingItem 列表（平均分降序）
// ==========================================

use crate::domain::contest::{Participant, RankingItem, VoteDetail};
use std::collections::HashMap;

pub struct LeaderboardEngine {
    // 无状态引擎,不需要注入依赖
}

impl LeaderboardEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 生成排行榜
    ///
    /// 规则:
    /// 1) 无打分的参赛者平均分为 0.0，评委数为 0
    /// 2) 平均分保留 2 位小数
    /// 3) 按平均分降序；同分保持参赛者插入顺序（稳定排序）
    pub fn rank(
        &self,
        participants: &[Participant],
        scores: &HashMap<String, Vec<VoteDetail>>,
    ) -> Vec<RankingItem> {
        let mut ranking: Vec<RankingItem> = participants
            .iter()
            .map(|p| {
                let votes = scores.get(&p.id).map(Vec::as_slice).unwrap_or(&[]);
                let average = if votes.is_empty() {
                    0.0
                } else {
                    votes.iter().map(|v| v.score).sum::<f64>() / votes.len() as f64
                };

                RankingItem {
                    participant_id: p.id.clone(),
                    participant_name: p.name.clone(),
                    average_score: round2(average),
                    vote_count: votes.len(),
                }
            })
            .collect();

        ranking.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));
        ranking
    }
}

impl Default for LeaderboardEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 保留 2 位小数，-0.0 归一为 0.0
fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
