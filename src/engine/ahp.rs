// ==========================================
// 货运代理评估引擎 - AHP 权重一致性校验
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.2 AHP Weight Validator
// 职责: 由权重向量构造成对比较矩阵并计算一致性比率
// 定位: 咨询性校验, 结果附加到输出, 不阻断排序
// ==========================================

use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Saaty 随机一致性指标表 (n = 1..10)
const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// n > 10 时的随机一致性指标
const RANDOM_INDEX_LARGE: f64 = 1.5;

/// 一致性判定阈值: CR < 0.1 视为一致
const CONSISTENCY_THRESHOLD: f64 = 0.1;

// ==========================================
// AhpConsistency - 一致性校验结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AhpConsistency {
    /// 最大特征值估计
    pub lambda_max: f64,

    /// 一致性指标 CI = (λmax - n) / (n - 1)
    pub consistency_index: f64,

    /// 一致性比率 CR = CI / RI[n]
    pub consistency_ratio: f64,

    /// CR < 0.1 判定
    pub is_consistent: bool,
}

// ==========================================
// AhpValidator - 一致性校验纯函数工具类
// ==========================================
pub struct AhpValidator;

impl AhpValidator {
    /// 由权重向量构造成对比较矩阵 A[i][j] = w_i / w_j
    ///
    /// # 错误
    /// - `DivisionByZero`: 任一权重为 0
    pub fn pairwise_matrix(weights: &[f64]) -> EngineResult<Vec<Vec<f64>>> {
        if let Some(index) = weights.iter().position(|w| *w == 0.0) {
            return Err(EngineError::DivisionByZero { index });
        }

        let n = weights.len();
        let mut matrix = vec![vec![0.0_f64; n]; n];
        for i in 0..n {
            for j in 0..n {
                matrix[i][j] = weights[i] / weights[j];
            }
        }
        Ok(matrix)
    }

    /// 校验权重向量的一致性
    ///
    /// # 规则
    /// - 行和归一化得到优先级向量
    /// - λmax = Σ_i ((A·p)_i / p_i) / n
    /// - CI = (λmax - n) / (n - 1), CR = CI / RI[n]
    /// - n <= 2 恒为一致 (CR 定义为 0, 避免 0/0)
    pub fn check_consistency(weights: &[f64]) -> EngineResult<AhpConsistency> {
        let n = weights.len();
        let matrix = Self::pairwise_matrix(weights)?;

        if n <= 2 {
            return Ok(AhpConsistency {
                lambda_max: n as f64,
                consistency_index: 0.0,
                consistency_ratio: 0.0,
                is_consistent: true,
            });
        }

        // 行和归一化 → 优先级向量
        let row_sums: Vec<f64> = matrix.iter().map(|row| row.iter().sum()).collect();
        let total: f64 = row_sums.iter().sum();
        let priorities: Vec<f64> = row_sums.iter().map(|s| s / total).collect();

        // λmax 估计
        let mut lambda_max = 0.0;
        for i in 0..n {
            let weighted_sum: f64 = matrix[i]
                .iter()
                .zip(priorities.iter())
                .map(|(a, p)| a * p)
                .sum();
            lambda_max += weighted_sum / priorities[i];
        }
        lambda_max /= n as f64;

        let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
        let random_index = if n <= RANDOM_INDEX.len() {
            RANDOM_INDEX[n - 1]
        } else {
            RANDOM_INDEX_LARGE
        };
        let consistency_ratio = consistency_index / random_index;

        Ok(AhpConsistency {
            lambda_max,
            consistency_index,
            consistency_ratio,
            is_consistent: consistency_ratio < CONSISTENCY_THRESHOLD,
        })
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_matrix_ratios() {
        let matrix = AhpValidator::pairwise_matrix(&[0.4, 0.2]).unwrap();
        assert!((matrix[0][1] - 2.0).abs() < 1e-12);
        assert!((matrix[1][0] - 0.5).abs() < 1e-12);
        assert!((matrix[0][0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_division() {
        let err = AhpValidator::pairwise_matrix(&[0.4, 0.0, 0.6]).unwrap_err();
        assert!(matches!(err, EngineError::DivisionByZero { index: 1 }));
    }

    /// 场景: 三准则权重 [0.4, 0.3, 0.3] 必须判定为一致 (CR < 0.1)
    #[test]
    fn test_reference_weights_consistent() {
        let result = AhpValidator::check_consistency(&[0.4, 0.3, 0.3]).unwrap();
        assert!(result.is_consistent);
        assert!(result.consistency_ratio < 0.1);
        assert!((result.lambda_max - 3.0).abs() < 1e-6);
    }

    /// n <= 2 恒为一致
    #[test]
    fn test_two_criteria_always_consistent() {
        let result = AhpValidator::check_consistency(&[0.9, 0.1]).unwrap();
        assert!(result.is_consistent);
        assert_eq!(result.consistency_ratio, 0.0);
    }
}
