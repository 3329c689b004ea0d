// ==========================================
// 货运代理评估引擎 - 领域类型定义
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 3. 数据模型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 准则方向 (Criterion Direction)
// ==========================================
// benefit: 数值越大越好 (如可靠性)
// cost: 数值越小越好 (如运费、时效)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionDirection {
    Benefit,
    Cost,
}

impl fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionDirection::Benefit => write!(f, "benefit"),
            CriterionDirection::Cost => write!(f, "cost"),
        }
    }
}

// ==========================================
// 告警严重程度 (Insight Severity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Medium, // 关注
    High,   // 紧急
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 集装箱类型 (Container Class)
// ==========================================
// 按 (weight_kg, volume_cbm) 阈值表查定, 无状态不落库
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerClass {
    TwentyFtStandard,
    FortyFtStandard,
    FortyFtHighCube,
    BreakBulk,
}

impl fmt::Display for ContainerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerClass::TwentyFtStandard => write!(f, "20ft Standard"),
            ContainerClass::FortyFtStandard => write!(f, "40ft Standard"),
            ContainerClass::FortyFtHighCube => write!(f, "40ft High Cube"),
            ContainerClass::BreakBulk => write!(f, "Break Bulk/Multi-Unit"),
        }
    }
}

// ==========================================
// 地理坐标 (Geo Point)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// 纬度 (十进制度)
    pub lat: f64,
    /// 经度 (十进制度)
    pub lng: f64,
}

// ==========================================
// 货物规格 (Cargo Spec)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CargoSpec {
    /// 货重 (kg)
    pub weight_kg: f64,
    /// 体积 (m³)
    pub volume_cbm: f64,
}

// ==========================================
// 航线 (Route Spec)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// 起运地坐标
    pub origin: GeoPoint,
    /// 目的地坐标
    pub destination: GeoPoint,
}

// ==========================================
// 中智三元组 (Neutrosophic Triple)
// ==========================================
// 三个分量各自截断到 [0,1] 并保留 2 位小数
// 注意: 经典中智集合要求 T+I+F <= 1, 此处有意放宽,
// 三个分量相互独立, 不做联合校验
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeutrosophicTriple {
    /// 真值度 (Truth)
    pub t: f64,
    /// 不确定度 (Indeterminacy)
    pub i: f64,
    /// 假值度 (Falsity)
    pub f: f64,
}
