// ==========================================
// 货运代理评估引擎 - 领域模型层
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 3. 数据模型
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod forwarder;
pub mod shipment;
pub mod types;

// 重导出核心类型
pub use forwarder::{AlternativeScore, AnomalyInsight, ForwarderSignal, PerCriterionScores};
pub use shipment::{DeliveryStatus, ForwarderPerformance, ShipmentRecord};
pub use types::{
    CargoSpec, ContainerClass, CriterionDirection, GeoPoint, NeutrosophicTriple, RouteSpec,
    Severity,
};
