// ==========================================
// 比赛评分与抽奖系统 - 评分API
// ==========================================
// 职责: 参赛者管理、评委打分、排行榜、打分明细
// ==========================================

use crate::api::dto::MessageResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::contest::{
    Participant, ParticipantCreate, RankingItem, VoteDetail, VoteSubmission,
};
use crate::engine::LeaderboardEngine;
use crate::i18n;
use crate::repository::ContestRepository;
use std::sync::Arc;

/// 评分API
pub struct ContestApi {
    repo: Arc<ContestRepository>,
    leaderboard: LeaderboardEngine,
    score_min: f64,
    score_max: f64,
}

impl ContestApi {
    /// 创建新的ContestApi实例
    ///
    /// # 参数
    /// - repo: 评分仓储
    /// - score_min / score_max: 合法分数区间（闭区间）
    pub fn new(repo: Arc<ContestRepository>, score_min: f64, score_max: f64) -> Self {
        Self {
            repo,
            leaderboard: LeaderboardEngine::new(),
            score_min,
            score_max,
        }
    }

    /// 查询全部参赛者
    pub fn list_participants(&self) -> ApiResult<Vec<Participant>> {
        Ok(self.repo.list_participants()?)
    }

    /// 新增参赛者
    pub fn add_participant(&self, request: ParticipantCreate) -> ApiResult<Participant> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("参赛者姓名不能为空".to_string()));
        }

        let participant = self.repo.insert_participant(name)?;
        tracing::info!("[add_participant] id={}, name={}", participant.id, participant.name);
        Ok(participant)
    }

    /// 删除参赛者（同时删除其打分）
    pub fn delete_participant(&self, participant_id: &str) -> ApiResult<MessageResponse> {
        let removed = self.repo.delete_participant(participant_id)?;
        tracing::info!("[delete_participant] id={}, name={}", removed.id, removed.name);

        Ok(MessageResponse {
            message: i18n::t("contest.participant_deleted"),
        })
    }

    /// 评委打分
    ///
    /// 参赛者不存在时返回 NotFound；分数越界时返回 InvalidInput；
    /// 同一评委重复打分覆盖旧分
    pub fn submit_vote(&self, vote: VoteSubmission) -> ApiResult<MessageResponse> {
        // 先确认参赛者存在，再校验分数
        self.repo.find_participant(&vote.participant_id)?;

        if !(self.score_min <= vote.score && vote.score <= self.score_max) {
            return Err(ApiError::InvalidInput(format!(
                "分数必须在 {} 到 {} 之间，实际 {}",
                self.score_min, self.score_max, vote.score
            )));
        }

        let participant =
            self.repo
                .upsert_score(&vote.participant_id, &vote.judge_name, vote.score)?;

        tracing::info!(
            "[submit_vote] participant={}, judge={}, score={}",
            participant.id,
            vote.judge_name,
            vote.score
        );

        Ok(MessageResponse {
            message: i18n::t_with_args(
                "contest.vote_recorded",
                &[
                    ("score", &vote.score.to_string()),
                    ("judge", &vote.judge_name),
                    ("participant", &participant.name),
                ],
            ),
        })
    }

    /// 排行榜（平均分降序）
    pub fn leaderboard(&self) -> ApiResult<Vec<RankingItem>> {
        let (participants, scores) = self.repo.snapshot()?;
        Ok(self.leaderboard.rank(&participants, &scores))
    }

    /// 参赛者打分明细
    pub fn participant_details(&self, participant_id: &str) -> ApiResult<Vec<VoteDetail>> {
        Ok(self.repo.list_scores(participant_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ContestApi {
        ContestApi::new(Arc::new(ContestRepository::new()), 0.0, 100.0)
    }

    fn vote(participant_id: &str, judge: &str, score: f64) -> VoteSubmission {
        VoteSubmission {
            participant_id: participant_id.to_string(),
            judge_name: judge.to_string(),
            score,
        }
    }

    #[test]
    fn test_add_participant_rejects_blank_name() {
        let api = api();
        let result = api.add_participant(ParticipantCreate {
            name: "   ".to_string(),
        });
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_vote_flow_and_leaderboard() {
        let api = api();
        let lan = api
            .add_participant(ParticipantCreate {
                name: "Lan".to_string(),
            })
            .unwrap();
        let hung = api
            .add_participant(ParticipantCreate {
                name: "Hung".to_string(),
            })
            .unwrap();

        api.submit_vote(vote(&lan.id, "Tai", 80.0)).unwrap();
        api.submit_vote(vote(&lan.id, "Minh", 90.0)).unwrap();
        api.submit_vote(vote(&hung.id, "Tai", 95.0)).unwrap();

        let board = api.leaderboard().unwrap();
        assert_eq!(board[0].participant_name, "Hung");
        assert_eq!(board[1].average_score, 85.0);
        assert_eq!(board[1].vote_count, 2);

        let details = api.participant_details(&lan.id).unwrap();
        assert_eq!(details.len(), 2);
    }

    #[test]
    fn test_vote_score_out_of_range() {
        let api = api();
        let p = api
            .add_participant(ParticipantCreate {
                name: "Lan".to_string(),
            })
            .unwrap();

        assert!(matches!(
            api.submit_vote(vote(&p.id, "Tai", 100.5)),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(
            api.submit_vote(vote(&p.id, "Tai", -1.0)),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(
            api.submit_vote(vote(&p.id, "Tai", f64::NAN)),
            Err(ApiError::InvalidInput(_))
        ));
        // 边界值有效
        assert!(api.submit_vote(vote(&p.id, "Tai", 0.0)).is_ok());
        assert!(api.submit_vote(vote(&p.id, "Tai", 100.0)).is_ok());
    }

    #[test]
    fn test_vote_unknown_participant_is_not_found() {
        let api = api();
        // 参赛者不存在时优先报 NotFound，即使分数越界
        assert!(matches!(
            api.submit_vote(vote("missing", "Tai", 500.0)),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_participant() {
        let api = api();
        let p = api
            .add_participant(ParticipantCreate {
                name: "Lan".to_string(),
            })
            .unwrap();

        api.delete_participant(&p.id).unwrap();
        assert!(api.list_participants().unwrap().is_empty());
        assert!(matches!(
            api.delete_participant(&p.id),
            Err(ApiError::NotFound(_))
        ));
    }
}
