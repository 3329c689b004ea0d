// ==========================================
// 货运代理评估引擎 - 引擎层
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4. 组件设计
// ==========================================
// 职责: 多准则决策的数值算法与编排
// 红线: 全层纯函数, 无 I/O, 无跨调用状态,
//       相同输入必须产生逐位一致的输出
// ==========================================

pub mod ahp;
pub mod blend;
pub mod container;
pub mod error;
pub mod grey;
pub mod insight;
pub mod neutrosophic;
pub mod normalizer;
pub mod orchestrator;
pub mod performance;
pub mod route;
pub mod topsis;

// 重导出核心引擎
pub use ahp::{AhpConsistency, AhpValidator};
pub use blend::{ScoreBlender, GREY_BLEND_WEIGHT, TOPSIS_BLEND_WEIGHT};
pub use container::ContainerSelector;
pub use error::{Diagnostic, EngineError, EngineResult};
pub use grey::GreyScorer;
pub use insight::AnomalyDetector;
pub use neutrosophic::NeutrosophicDecomposer;
pub use normalizer::{MatrixNormalizer, NormalizedMatrix};
pub use orchestrator::{RankingInput, RankingOrchestrator, RankingResult};
pub use performance::{PerformanceAggregator, PerformanceSnapshot};
pub use route::RouteDistance;
pub use topsis::{Separation, TopsisOutcome, TopsisRanker};
