// ==========================================
// 货运代理评估引擎 - 中智分解
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.6 Neutrosophic Decomposer
// 职责: 将三准则归一化子得分映射为 T/I/F 三元组
// ==========================================

use crate::domain::forwarder::PerCriterionScores;
use crate::domain::types::NeutrosophicTriple;

// ==========================================
// NeutrosophicDecomposer - 中智分解纯函数工具类
// ==========================================
pub struct NeutrosophicDecomposer;

impl NeutrosophicDecomposer {
    /// 分解三准则子得分
    ///
    /// # 规则
    /// - T = reliabilityScore (真值度以可靠性为主)
    /// - I = 1 - timeScore * 0.8 (时效波动映射为不确定度)
    /// - F = 1 - costScore * 0.9 (成本低效映射为假值度)
    /// - 各分量截断到 [0,1] 并保留 2 位小数
    ///
    /// 经典中智集合的 T+I+F <= 1 约束在此有意不做校验
    pub fn decompose(scores: &PerCriterionScores) -> NeutrosophicTriple {
        NeutrosophicTriple {
            t: Self::clamp_round(scores.reliability),
            i: Self::clamp_round(1.0 - scores.time * 0.8),
            f: Self::clamp_round(1.0 - scores.cost * 0.9),
        }
    }

    /// 截断到 [0,1] 后四舍五入保留 2 位小数
    fn clamp_round(value: f64) -> f64 {
        (value.clamp(0.0, 1.0) * 100.0).round() / 100.0
    }
}
