// ==========================================
// 货运代理评估引擎 - 货代实体定义
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 3. 数据模型
// 职责: 定义货代信号、评分结果、异常告警实体
// 红线: 全部为每次调用的瞬态对象, 不持久化
// ==========================================

use crate::domain::types::{NeutrosophicTriple, Severity};
use serde::{Deserialize, Serialize};

// ==========================================
// ForwarderSignal - 货代运营信号
// ==========================================
// 异常检测的输入, 约定上与决策矩阵行一一对应,
// 但引擎不强制对齐
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwarderSignal {
    /// 货代名称
    pub name: String,

    /// 可靠性 [0,1]
    pub reliability: f64,

    /// 延误率 [0,1]
    pub delay_rate: f64,
}

// ==========================================
// PerCriterionScores - 单货代三准则归一化表现
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerCriterionScores {
    /// 成本表现 (归一化, 越高越好)
    pub cost: f64,

    /// 时效表现 (归一化, 越高越好)
    pub time: f64,

    /// 可靠性表现 (归一化, 越高越好)
    pub reliability: f64,
}

// ==========================================
// AlternativeScore - 备选方案评分结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    /// 货代名称
    pub name: String,

    /// 最终混合得分 [0,1] (0.7*贴近度 + 0.3*灰色关联度)
    pub score: f64,

    /// TOPSIS 贴近度系数 [0,1]
    pub closeness: f64,

    /// 灰色关联度 [0,1]
    pub grey_grade: f64,

    /// 各准则归一化表现
    pub per_criterion: Vec<f64>,

    /// 中智分解 (仅三准则 成本/时效/可靠性 场景下给出)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutrosophic: Option<NeutrosophicTriple>,
}

// ==========================================
// AnomalyInsight - 异常告警
// ==========================================
// 规则必须输出 reason, 由调用方负责面向用户的呈现
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyInsight {
    /// 货代名称
    pub name: String,

    /// 告警说明
    pub message: String,

    /// 严重程度
    pub severity: Severity,
}
