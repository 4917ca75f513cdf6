// ==========================================
// 加权抽奖引擎统计测试
// ==========================================
// 测试目标: 用频率验证抽样分布，而不只是结构
// 说明: 每组 10000 次试验，容差远大于标准差（约 0.5%）
// ==========================================

mod test_helpers;

use contest_lottery::domain::Candidate;
use contest_lottery::engine::{LotteryEngine, LotteryError, LotterySession};
use std::collections::HashSet;

const TRIALS: usize = 10_000;
const TOLERANCE: f64 = 0.03;

fn assert_ratio(observed: usize, expected: f64, label: &str) {
    let ratio = observed as f64 / TRIALS as f64;
    assert!(
        (ratio - expected).abs() <= TOLERANCE,
        "{}: 实际频率 {:.4}，期望 {:.4} ± {}",
        label,
        ratio,
        expected,
        TOLERANCE
    );
}

#[test]
fn test_priority_department_wins_two_thirds() {
    let engine = LotteryEngine::new();
    let pool = vec![Candidate::new("7820", "A"), Candidate::new("1000", "B")];
    let mut rng = rand::thread_rng();

    let mut priority_wins = 0;
    for _ in 0..TRIALS {
        let outcome = engine.draw(&pool, 1, &mut rng).unwrap();
        if outcome.winners[0].dept_id == "7820" {
            priority_wins += 1;
        }
    }

    assert_ratio(priority_wins, 2.0 / 3.0, "7820 单人中奖频率");
}

#[test]
fn test_weights_recomputed_on_shrinking_pool() {
    // pool = [7820/A, 1000/B, 1000/C], k = 2
    // P(A 第一个) = 2/4 = 0.5
    // P(A 中奖) = 0.5 + 2 × (1/4 × 2/3) = 5/6
    let engine = LotteryEngine::new();
    let pool = test_helpers::example_roster();
    let a_id = pool[0].id.clone();
    let mut rng = rand::thread_rng();

    let mut a_first = 0;
    let mut a_won = 0;
    for _ in 0..TRIALS {
        let outcome = engine.draw(&pool, 2, &mut rng).unwrap();
        if outcome.winners[0].id == a_id {
            a_first += 1;
        }
        if outcome.winners.iter().any(|c| c.id == a_id) {
            a_won += 1;
        }
    }

    assert_ratio(a_first, 0.5, "A 首个抽中频率");
    assert_ratio(a_won, 5.0 / 6.0, "A 两人中奖频率");
}

#[test]
fn test_equal_weights_are_uniform() {
    let engine = LotteryEngine::new();
    let pool: Vec<Candidate> = ["A", "B", "C", "D"]
        .iter()
        .map(|n| Candidate::new("1000", *n))
        .collect();
    let mut rng = rand::thread_rng();

    let mut counts = [0usize; 4];
    for _ in 0..TRIALS {
        let outcome = engine.draw(&pool, 1, &mut rng).unwrap();
        let idx = pool.iter().position(|c| c.id == outcome.winners[0].id).unwrap();
        counts[idx] += 1;
    }

    for (idx, count) in counts.iter().enumerate() {
        assert_ratio(*count, 0.25, &format!("候选人 {}", idx));
    }
}

#[test]
fn test_draw_structure_across_sizes() {
    let engine = LotteryEngine::new();
    let mut rng = rand::thread_rng();

    for size in 1..=12 {
        let pool: Vec<Candidate> = (0..size)
            .map(|i| Candidate::new(if i % 2 == 0 { "7820" } else { "1000" }, format!("N{}", i)))
            .collect();

        for k in 1..=size {
            let outcome = engine.draw(&pool, k, &mut rng).unwrap();
            assert_eq!(outcome.winners.len(), k);
            assert_eq!(outcome.remaining.len(), size - k);

            let winner_ids: HashSet<&str> = outcome.winners.iter().map(|c| c.id.as_str()).collect();
            let remaining_ids: HashSet<&str> =
                outcome.remaining.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(winner_ids.len(), k);
            assert!(winner_ids.is_disjoint(&remaining_ids));

            let all: HashSet<&str> = pool.iter().map(|c| c.id.as_str()).collect();
            let merged: HashSet<&str> = winner_ids.union(&remaining_ids).copied().collect();
            assert_eq!(merged, all);
        }

        assert!(matches!(
            engine.draw(&pool, size + 1, &mut rng),
            Err(LotteryError::InvalidDrawRequest { .. })
        ));
    }
}

#[test]
fn test_sequential_draws_partition_roster() {
    let mut session = LotterySession::new();
    let roster: Vec<Candidate> = (0..10)
        .map(|i| Candidate::new("1000", format!("N{}", i)))
        .collect();
    session.load_roster(roster.clone());

    let round1 = session.draw(3).unwrap();
    let round2 = session.draw(4).unwrap();

    let ids1: HashSet<String> = round1.iter().map(|c| c.id.clone()).collect();
    let ids2: HashSet<String> = round2.iter().map(|c| c.id.clone()).collect();
    assert!(ids1.is_disjoint(&ids2));
    assert_eq!(session.roster().len(), 10 - 3 - 4);
    assert_eq!(session.winners().len(), 7);

    for c in session.roster() {
        assert!(!ids1.contains(&c.id) && !ids2.contains(&c.id));
    }
}

#[test]
fn test_example_roster_until_exhausted() {
    let mut session = LotterySession::new();
    session.load_roster(test_helpers::example_roster());

    assert_eq!(session.draw(2).unwrap().len(), 2);
    assert_eq!(session.roster().len(), 1);

    assert_eq!(session.draw(1).unwrap().len(), 1);
    assert!(session.roster().is_empty());

    assert_eq!(
        session.draw(1).unwrap_err(),
        LotteryError::InvalidDrawRequest {
            requested: 1,
            available: 0
        }
    );
}
