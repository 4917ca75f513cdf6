// ==========================================
// 比赛评分与抽奖系统 - 评分仓储（内存）
// ==========================================
// 职责: 参赛者与评委打分的内存存储
// 存储: participants（插入顺序）+ scores（参赛者 id → 评委打分）
// 红线: 两张表在同一把锁下修改,删除参赛者时同时删除其打分
// ==========================================

use crate::domain::contest::{Participant, VoteDetail};
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
struct ContestData {
    participants: Vec<Participant>,
    scores: HashMap<String, Vec<VoteDetail>>,
}

impl ContestData {
    fn position(&self, participant_id: &str) -> RepositoryResult<usize> {
        self.participants
            .iter()
            .position(|p| p.id == participant_id)
            .ok_or_else(|| not_found(participant_id))
    }
}

fn not_found(participant_id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity: "Participant".to_string(),
        id: participant_id.to_string(),
    }
}

/// 排行榜计算所需的数据快照
pub type ContestSnapshot = (Vec<Participant>, HashMap<String, Vec<VoteDetail>>);

// ==========================================
// ContestRepository
// ==========================================
#[derive(Debug, Default)]
pub struct ContestRepository {
    data: Mutex<ContestData>,
}

impl ContestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, ContestData>> {
        self.data
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询全部参赛者（插入顺序）
    pub fn list_participants(&self) -> RepositoryResult<Vec<Participant>> {
        Ok(self.lock()?.participants.clone())
    }

    /// 按 id 查询参赛者
    pub fn find_participant(&self, participant_id: &str) -> RepositoryResult<Participant> {
        let data = self.lock()?;
        let idx = data.position(participant_id)?;
        Ok(data.participants[idx].clone())
    }

    /// 新增参赛者并初始化空打分表
    pub fn insert_participant(&self, name: &str) -> RepositoryResult<Participant> {
        let participant = Participant {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: chrono::Local::now().naive_local(),
        };

        let mut data = self.lock()?;
        data.scores.insert(participant.id.clone(), Vec::new());
        data.participants.push(participant.clone());

        Ok(participant)
    }

    /// 删除参赛者及其全部打分
    pub fn delete_participant(&self, participant_id: &str) -> RepositoryResult<Participant> {
        let mut data = self.lock()?;
        let idx = data.position(participant_id)?;

        data.scores.remove(participant_id);
        Ok(data.participants.remove(idx))
    }

    /// 写入评委打分
    ///
    /// 同一评委重复打分时覆盖原值，保留首次打分的位置
    pub fn upsert_score(
        &self,
        participant_id: &str,
        judge_name: &str,
        score: f64,
    ) -> RepositoryResult<Participant> {
        let mut data = self.lock()?;
        let idx = data.position(participant_id)?;
        let participant = data.participants[idx].clone();

        let votes = data.scores.entry(participant_id.to_string()).or_default();
        match votes.iter_mut().find(|v| v.judge_name == judge_name) {
            Some(existing) => existing.score = score,
            None => votes.push(VoteDetail {
                judge_name: judge_name.to_string(),
                score,
            }),
        }

        Ok(participant)
    }

    /// 查询参赛者的评委打分明细
    pub fn list_scores(&self, participant_id: &str) -> RepositoryResult<Vec<VoteDetail>> {
        let data = self.lock()?;
        data.position(participant_id)?;
        Ok(data.scores.get(participant_id).cloned().unwrap_or_default())
    }

    /// 在同一把锁下读取参赛者与打分
    pub fn snapshot(&self) -> RepositoryResult<ContestSnapshot> {
        let data = self.lock()?;
        Ok((data.participants.clone(), data.scores.clone()))
    }
}
