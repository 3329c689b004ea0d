// ==========================================
// 货运代理评估引擎 - 核心库
// ==========================================
// 依据: Forwarder_DSS_Spec.md
// 系统定位: 多准则决策支持引擎 (AHP + TOPSIS + 灰色关联 + 中智分解)
// 红线: 引擎为纯函数, 相同输入产生逐位一致的输出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 数值算法与编排
pub mod engine;

// API 层 - 进程内调用门面
pub mod api;

// 配置层 - 调用选项
pub mod config;

// 缓存 - 调用方持有的显式快照
pub mod cache;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AlternativeScore, AnomalyInsight, CargoSpec, ContainerClass, CriterionDirection,
    DeliveryStatus, ForwarderPerformance, ForwarderSignal, GeoPoint, NeutrosophicTriple,
    RouteSpec, Severity, ShipmentRecord,
};

// 引擎
pub use engine::{
    AhpConsistency, AhpValidator, AnomalyDetector, ContainerSelector, Diagnostic, EngineError,
    EngineResult, GreyScorer, MatrixNormalizer, NeutrosophicDecomposer, PerformanceAggregator,
    PerformanceSnapshot, RankingInput, RankingOrchestrator, RankingResult, RouteDistance,
    ScoreBlender, TopsisRanker,
};

// API
pub use api::{RankingApi, RankingRequest, RankingResponse};

// 配置与缓存
pub use cache::DecisionCache;
pub use config::RankingOptions;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "货运代理评估引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
