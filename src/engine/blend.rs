// ==========================================
// 货运代理评估引擎 - 混合打分
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.5 Score Blender
// 职责: 将 TOPSIS 贴近度与灰色关联度合成最终得分
// ==========================================

/// TOPSIS 贴近度混合权重 (设计固定值, 不提供配置入口)
pub const TOPSIS_BLEND_WEIGHT: f64 = 0.7;

/// 灰色关联度混合权重 (设计固定值, 不提供配置入口)
pub const GREY_BLEND_WEIGHT: f64 = 0.3;

// ==========================================
// ScoreBlender - 混合打分纯函数工具类
// ==========================================
pub struct ScoreBlender;

impl ScoreBlender {
    /// finalScore_i = 0.7 * C_i + 0.3 * greyGrade_i
    ///
    /// 两个输入向量必须与备选行序对齐且长度一致
    pub fn blend(closeness: &[f64], grey_grades: &[f64]) -> Vec<f64> {
        closeness
            .iter()
            .zip(grey_grades.iter())
            .map(|(c, g)| TOPSIS_BLEND_WEIGHT * c + GREY_BLEND_WEIGHT * g)
            .collect()
    }
}
