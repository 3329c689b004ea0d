// ==========================================
// 货运代理评估引擎 - RankingApi DTO 定义
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 6. 外部接口契约
// 职责: 定义排序调用的请求和响应结构
// ==========================================

use crate::domain::forwarder::{AlternativeScore, AnomalyInsight, ForwarderSignal};
use crate::domain::types::{CargoSpec, CriterionDirection, RouteSpec};
use crate::engine::ahp::AhpConsistency;
use crate::engine::error::Diagnostic;
use serde::{Deserialize, Serialize};

// ==========================================
// 请求: 执行排序
// ==========================================

/// 排序请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRequest {
    /// 决策矩阵 (备选 × 准则, 必填)
    pub decision_matrix: Vec<Vec<f64>>,

    /// 准则权重 (必填, 引擎按总和归一化)
    pub weights: Vec<f64>,

    /// 准则方向 (必填, "benefit" | "cost")
    pub directions: Vec<CriterionDirection>,

    /// 备选名称 (必填, 与矩阵行对齐)
    pub alternative_names: Vec<String>,

    /// 货代运营信号 (可选)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarder_signals: Option<Vec<ForwarderSignal>>,

    /// 货物规格 (可选)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo: Option<CargoSpec>,

    /// 航线 (可选)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteSpec>,

    /// 是否附带非致命诊断 (可选, 默认 false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose_diagnostics: Option<bool>,
}

// ==========================================
// 响应: 排序结果
// ==========================================

/// 排序响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    /// 按最终得分降序的备选评分
    pub ranked: Vec<AlternativeScore>,

    /// AHP 一致性校验结果 (咨询性)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<AhpConsistency>,

    /// 推荐箱型 (展示标签, 如 "20ft Standard")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_class: Option<String>,

    /// 航线距离 (km, 保留 1 位小数)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_distance_km: Option<f64>,

    /// 异常告警
    pub anomalies: Vec<AnomalyInsight>,

    /// 非致命诊断
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}
