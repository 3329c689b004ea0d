// ==========================================
// 货运代理评估引擎 - 决策矩阵归一化
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.1 Matrix Normalizer
// 职责: 结构校验 + 列向量归一化 (区分准则方向)
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::types::CriterionDirection;
use crate::engine::error::{Diagnostic, EngineError, EngineResult};

// ==========================================
// NormalizedMatrix - 归一化结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMatrix {
    /// 归一化后的矩阵 (m 备选 × n 准则)
    pub values: Vec<Vec<f64>>,

    /// 非致命诊断 (退化列)
    pub diagnostics: Vec<Diagnostic>,
}

// ==========================================
// MatrixNormalizer - 归一化纯函数工具类
// ==========================================
pub struct MatrixNormalizer;

impl MatrixNormalizer {
    /// 校验原始决策矩阵与权重向量的结构
    ///
    /// # 校验项
    /// - 矩阵非空且各行长度一致
    /// - 矩阵与权重不含 NaN/Infinity
    /// - 权重非负且不全为 0
    /// - 权重长度与准则数一致, 方向向量长度一致
    /// - 备选名称数量与行数一致
    ///
    /// # 错误
    /// - `InvalidMatrixShape` / `InvalidWeights` / `NonFiniteValue`
    pub fn validate(
        matrix: &[Vec<f64>],
        weights: &[f64],
        directions: &[CriterionDirection],
        names: &[String],
    ) -> EngineResult<()> {
        if matrix.is_empty() {
            return Err(EngineError::InvalidMatrixShape {
                message: "矩阵为空, 至少需要 1 个备选方案".to_string(),
            });
        }

        let n = matrix[0].len();
        if n == 0 {
            return Err(EngineError::InvalidMatrixShape {
                message: "矩阵至少需要 1 个准则列".to_string(),
            });
        }

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(EngineError::InvalidMatrixShape {
                    message: format!("第 {} 行长度 {} 与准则数 {} 不一致", i, row.len(), n),
                });
            }
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(EngineError::NonFiniteValue {
                        location: format!("matrix[{}][{}]", i, j),
                        value: *value,
                    });
                }
            }
        }

        if weights.len() != n {
            return Err(EngineError::InvalidWeights {
                message: format!("权重长度 {} 与准则数 {} 不一致", weights.len(), n),
            });
        }
        for (j, w) in weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(EngineError::NonFiniteValue {
                    location: format!("weights[{}]", j),
                    value: *w,
                });
            }
            if *w < 0.0 {
                return Err(EngineError::InvalidWeights {
                    message: format!("权重不允许为负, weights[{}] = {}", j, w),
                });
            }
        }
        if weights.iter().all(|w| *w == 0.0) {
            return Err(EngineError::InvalidWeights {
                message: "权重全为 0".to_string(),
            });
        }

        if directions.len() != n {
            return Err(EngineError::InvalidMatrixShape {
                message: format!("方向向量长度 {} 与准则数 {} 不一致", directions.len(), n),
            });
        }
        if names.len() != matrix.len() {
            return Err(EngineError::InvalidMatrixShape {
                message: format!(
                    "备选名称数量 {} 与矩阵行数 {} 不一致",
                    names.len(),
                    matrix.len()
                ),
            });
        }

        Ok(())
    }

    /// 权重归一化: 按总和缩放使 Σw = 1
    ///
    /// # 错误
    /// - `InvalidWeights`: 存在负分量, 或总和非正
    pub fn normalize_weights(weights: &[f64]) -> EngineResult<Vec<f64>> {
        if let Some((j, w)) = weights.iter().enumerate().find(|(_, w)| **w < 0.0) {
            return Err(EngineError::InvalidWeights {
                message: format!("权重不允许为负, weights[{}] = {}", j, w),
            });
        }
        let total: f64 = weights.iter().sum();
        if !(total > 0.0) {
            return Err(EngineError::InvalidWeights {
                message: format!("权重总和必须为正, 实际为 {}", total),
            });
        }
        Ok(weights.iter().map(|w| w / total).collect())
    }

    /// 列向量归一化
    ///
    /// # 规则
    /// - normFactor_j = sqrt(Σ_i x_ij²)
    /// - normFactor_j == 0 时整列填 0 (退化列策略, 记入诊断)
    /// - benefit 列: r_ij = x_ij / normFactor_j
    /// - cost 列:    r_ij = 1 - x_ij / normFactor_j
    ///
    /// 调用前必须已通过 `validate`
    pub fn normalize(matrix: &[Vec<f64>], directions: &[CriterionDirection]) -> NormalizedMatrix {
        let m = matrix.len();
        let n = matrix[0].len();

        let mut norm_factors = vec![0.0_f64; n];
        for (j, factor) in norm_factors.iter_mut().enumerate() {
            let sum_of_squares: f64 = matrix.iter().map(|row| row[j] * row[j]).sum();
            *factor = sum_of_squares.sqrt();
        }

        let mut diagnostics = Vec::new();
        let mut values = vec![vec![0.0_f64; n]; m];
        for j in 0..n {
            if norm_factors[j] == 0.0 {
                // 退化列: 全零填充, 避免除零
                diagnostics.push(Diagnostic::DegenerateColumn { col: j });
                continue;
            }
            for i in 0..m {
                values[i][j] = match directions[j] {
                    CriterionDirection::Benefit => matrix[i][j] / norm_factors[j],
                    CriterionDirection::Cost => Self::normalize_cost_component(
                        matrix[i][j],
                        norm_factors[j],
                    ),
                };
            }
        }

        NormalizedMatrix { values, diagnostics }
    }

    /// cost 列归一化分量
    ///
    /// 与教科书式 TOPSIS 的差异: 这里在归一化阶段取 1 - x/norm,
    /// 而不是在理想解阶段反转方向。为保持输出一致性而保留,
    /// 如需切换到规范变体, 只替换本函数即可
    fn normalize_cost_component(value: f64, norm_factor: f64) -> f64 {
        1.0 - value / norm_factor
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CriterionDirection::{Benefit, Cost};

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("F{}", i)).collect()
    }

    #[test]
    fn test_validate_empty_matrix() {
        let err = MatrixNormalizer::validate(&[], &[0.5], &[Benefit], &[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidMatrixShape { .. }));
    }

    #[test]
    fn test_validate_ragged_rows() {
        let matrix = vec![vec![1.0, 2.0], vec![1.0]];
        let err =
            MatrixNormalizer::validate(&matrix, &[0.5, 0.5], &[Benefit, Benefit], &names(2))
                .unwrap_err();
        assert!(matches!(err, EngineError::InvalidMatrixShape { .. }));
    }

    #[test]
    fn test_validate_non_finite() {
        let matrix = vec![vec![1.0, f64::NAN]];
        let err =
            MatrixNormalizer::validate(&matrix, &[0.5, 0.5], &[Benefit, Benefit], &names(1))
                .unwrap_err();
        assert!(matches!(err, EngineError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_validate_all_zero_weights() {
        let matrix = vec![vec![1.0, 2.0]];
        let err = MatrixNormalizer::validate(&matrix, &[0.0, 0.0], &[Benefit, Benefit], &names(1))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidWeights { .. }));
    }

    /// 负权重即使总和为正也拒绝 (取值域为 [0,1])
    #[test]
    fn test_validate_negative_weight_rejected() {
        let matrix = vec![vec![1.0, 2.0, 3.0]];
        let err = MatrixNormalizer::validate(
            &matrix,
            &[1.0, -0.1, 0.05],
            &[Benefit, Benefit, Benefit],
            &names(1),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidWeights { .. }));
    }

    #[test]
    fn test_normalize_weights_negative_rejected() {
        let err = MatrixNormalizer::normalize_weights(&[1.0, -0.1, 0.05]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidWeights { .. }));
    }

    #[test]
    fn test_normalize_weights_rescale() {
        let normalized = MatrixNormalizer::normalize_weights(&[4.0, 3.0, 3.0]).unwrap();
        assert!((normalized.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((normalized[0] - 0.4).abs() < 1e-12);
    }

    /// benefit 列归一化后平方和为 1
    #[test]
    fn test_benefit_column_unit_norm() {
        let matrix = vec![vec![3.0], vec![4.0]];
        let result = MatrixNormalizer::normalize(&matrix, &[Benefit]);
        let sum_sq: f64 = result.values.iter().map(|r| r[0] * r[0]).sum();
        assert!((sum_sq - 1.0).abs() < 1e-12);
        assert!(result.diagnostics.is_empty());
    }

    /// cost 列取值落在 [0,1]
    #[test]
    fn test_cost_column_range() {
        let matrix = vec![vec![3.0], vec![4.0]];
        let result = MatrixNormalizer::normalize(&matrix, &[Cost]);
        for row in &result.values {
            assert!(row[0] >= 0.0 && row[0] <= 1.0);
        }
    }

    /// 退化列整列填 0 并产生诊断
    #[test]
    fn test_degenerate_column_zero_fill() {
        let matrix = vec![vec![0.0, 1.0], vec![0.0, 2.0]];
        let result = MatrixNormalizer::normalize(&matrix, &[Benefit, Benefit]);
        assert_eq!(result.values[0][0], 0.0);
        assert_eq!(result.values[1][0], 0.0);
        assert_eq!(result.diagnostics, vec![Diagnostic::DegenerateColumn { col: 0 }]);
    }
}
