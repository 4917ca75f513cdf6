// ==========================================
// 比赛评分与抽奖系统 - 抽奖候选人领域模型
// ==========================================
// 职责: 候选人实体、加权规则常量
// 红线: full_name 仅在导入时派生一次
// ==========================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 双倍权重部门代码
pub const PRIORITY_DEPT_ID: &str = "7820";

/// 双倍权重部门的抽奖权重
pub const PRIORITY_DEPT_WEIGHT: f64 = 2.0;

/// 普通候选人的抽奖权重
pub const DEFAULT_WEIGHT: f64 = 1.0;

// ==========================================
// Candidate - 抽奖候选人
// ==========================================
// id 为导入时分配的合成标识，
// 同名同部门的两行记录仍可区分
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,        // 合成标识（UUID v4）
    pub dept_id: String,   // 部门代码
    pub name: String,      // 姓名
    pub full_name: String, // 展示名: "{dept_id} - {name}"
}

impl Candidate {
    /// 创建候选人并派生 full_name
    ///
    /// # 参数
    /// - dept_id: 已清洗的部门代码
    /// - name: 已清洗的姓名
    pub fn new(dept_id: impl Into<String>, name: impl Into<String>) -> Self {
        let dept_id = dept_id.into();
        let name = name.into();
        let full_name = format!("{} - {}", dept_id, name);

        Self {
            id: Uuid::new_v4().to_string(),
            dept_id,
            name,
            full_name,
        }
    }

    /// 抽奖权重（固定规则，不可配置）
    pub fn weight(&self) -> f64 {
        if self.dept_id == PRIORITY_DEPT_ID {
            PRIORITY_DEPT_WEIGHT
        } else {
            DEFAULT_WEIGHT
        }
    }
}
