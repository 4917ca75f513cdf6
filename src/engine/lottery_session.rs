// ==========================================
// 比赛评分与抽奖系统 - 抽奖会话
// ==========================================
// 职责: 持有候选池与中奖名单,提交每轮抽奖结果
// 红线: 候选池 ∩ 中奖名单 = ∅
// 说明: 本结构不加锁,由 LotteryApi 以 Mutex 串行化访问
// ==========================================

use crate::domain::candidate::Candidate;
use crate::engine::lottery::{LotteryEngine, LotteryResult};
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct LotterySession {
    roster: Vec<Candidate>,
    winners: Vec<Candidate>,
    engine: LotteryEngine,
}

impl LotterySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整体替换候选池并清空中奖名单（上传名单时调用）
    pub fn load_roster(&mut self, roster: Vec<Candidate>) {
        self.roster = roster;
        self.winners.clear();
    }

    pub fn roster(&self) -> &[Candidate] {
        &self.roster
    }

    pub fn winners(&self) -> &[Candidate] {
        &self.winners
    }

    /// 使用线程随机源抽取 k 人
    pub fn draw(&mut self, k: usize) -> LotteryResult<Vec<Candidate>> {
        self.draw_with_rng(k, &mut rand::thread_rng())
    }

    /// 抽取 k 人并提交结果
    ///
    /// 引擎失败时会话保持不变；成功时剩余池成为新的候选池，
    /// 本轮中奖者按抽中顺序追加到中奖名单
    pub fn draw_with_rng<R: Rng + ?Sized>(
        &mut self,
        k: usize,
        rng: &mut R,
    ) -> LotteryResult<Vec<Candidate>> {
        let outcome = self.engine.draw(&self.roster, k, rng)?;

        self.roster = outcome.remaining;
        self.winners.extend(outcome.winners.iter().cloned());

        Ok(outcome.winners)
    }

    /// 清空候选池与中奖名单
    pub fn reset(&mut self) {
        self.roster.clear();
        self.winners.clear();
    }
}
