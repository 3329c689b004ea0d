// ==========================================
// 货运代理评估引擎 - 灰色关联分析
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.4 Grey Relational Scorer
// 职责: 以全 1 参考序列计算灰色关联度 (次级排序信号)
// 输入: 归一化矩阵 (未加权)
// ==========================================

/// 分辨系数 ζ (固定取值)
const ZETA: f64 = 0.5;

// ==========================================
// GreyScorer - 灰色关联纯函数工具类
// ==========================================
pub struct GreyScorer;

impl GreyScorer {
    /// 计算各备选的灰色关联度
    ///
    /// # 规则
    /// - 参考序列为全 1 向量 (归一化后优势值趋向 1)
    /// - Δ_ij = |r_ij - 1|, 全局 Δmin/Δmax
    /// - ξ_ij = (Δmin + ζ·Δmax) / (Δ_ij + ζ·Δmax)
    /// - 关联度 = 行内 ξ 均值
    pub fn relational_grades(normalized: &[Vec<f64>]) -> Vec<f64> {
        let n = normalized[0].len();

        let deviations: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| row.iter().map(|r| (r - 1.0).abs()).collect())
            .collect();

        let mut min_dev = f64::INFINITY;
        let mut max_dev = f64::NEG_INFINITY;
        for row in &deviations {
            for d in row {
                min_dev = min_dev.min(*d);
                max_dev = max_dev.max(*d);
            }
        }

        // Δmax == 0 意味着所有行与参考序列完全一致,
        // 系数公式退化为 0/0, 约定为完全关联 (1.0)
        if max_dev == 0.0 {
            return vec![1.0; normalized.len()];
        }

        deviations
            .iter()
            .map(|row| {
                let sum: f64 = row
                    .iter()
                    .map(|d| (min_dev + ZETA * max_dev) / (d + ZETA * max_dev))
                    .sum();
                sum / n as f64
            })
            .collect()
    }
}
