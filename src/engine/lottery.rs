// ==========================================
// 比赛评分与抽奖系统 - 加权抽奖引擎
// ==========================================
// 职责: 按权重逐次无放回抽取候选人
// 输入: 当前候选池 + 抽取人数 k
// 输出: 中奖者（按抽中顺序）+ 剩余候选池
// 红线: 每一步都在剩余池上重新计算权重,不是一次性抽 k 个
// ==========================================

use crate::domain::candidate::Candidate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use thiserror::Error;

/// 抽奖引擎错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LotteryError {
    #[error("抽奖请求无效: 请求抽取 {requested} 人, 当前候选人仅 {available} 人")]
    InvalidDrawRequest { requested: usize, available: usize },

    #[error("抽奖权重无效: {0}")]
    WeightError(String),
}

/// Result 类型别名
pub type LotteryResult<T> = Result<T, LotteryError>;

// ==========================================
// DrawOutcome - 单轮抽奖结果
// ==========================================
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    /// 中奖者，下标 0 为第一个抽中的人
    pub winners: Vec<Candidate>,
    /// 剩余候选人，保持原有相对顺序
    pub remaining: Vec<Candidate>,
}

// ==========================================
// LotteryEngine - 加权抽奖引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct LotteryEngine {
    // 无状态引擎,不需要注入依赖
}

impl LotteryEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 校验抽奖请求
    ///
    /// 候选池为空、k 为 0 或 k 超过候选人数时拒绝，不返回部分结果
    pub fn validate_request(&self, available: usize, requested: usize) -> LotteryResult<()> {
        if available == 0 || requested == 0 || requested > available {
            return Err(LotteryError::InvalidDrawRequest {
                requested,
                available,
            });
        }
        Ok(())
    }

    /// 加权无放回抽取 k 人
    ///
    /// # 参数
    /// - `pool`: 当前候选池（不会被修改）
    /// - `k`: 抽取人数
    /// - `rng`: 随机源（线上使用 thread_rng，测试可注入固定种子）
    ///
    /// # 算法
    /// 循环 k 次:
    /// 1) 在剩余池上按 `Candidate::weight` 计算权重
    /// 2) 按 P(i) = w_i / Σw 抽取一人
    /// 3) 追加到结果，并按位置从剩余池移除该候选人
    pub fn draw<R: Rng + ?Sized>(
        &self,
        pool: &[Candidate],
        k: usize,
        rng: &mut R,
    ) -> LotteryResult<DrawOutcome> {
        self.validate_request(pool.len(), k)?;

        let mut remaining = pool.to_vec();
        let mut winners = Vec::with_capacity(k);

        for _ in 0..k {
            let weights: Vec<f64> = remaining.iter().map(Candidate::weight).collect();
            let dist = WeightedIndex::new(&weights)
                .map_err(|e| LotteryError::WeightError(e.to_string()))?;

            let picked = dist.sample(rng);
            winners.push(remaining.remove(picked));
        }

        Ok(DrawOutcome { winners, remaining })
    }
}
