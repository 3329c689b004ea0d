// ==========================================
// 货运代理评估引擎 - TOPSIS 排序
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.3 TOPSIS Ranker
// 职责: 加权矩阵 → 理想/负理想解 → 分离度 → 贴近度
// 红线: 本阶段不排序, 排序在编排器混合打分后统一进行
// ==========================================

use crate::domain::types::CriterionDirection;

// ==========================================
// Separation - 分离度量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// 到理想解的欧氏距离 S+
    pub to_ideal: f64,

    /// 到负理想解的欧氏距离 S-
    pub to_anti_ideal: f64,
}

// ==========================================
// TopsisOutcome - TOPSIS 计算结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct TopsisOutcome {
    /// 加权归一化矩阵
    pub weighted: Vec<Vec<f64>>,

    /// 各备选的分离度量
    pub separations: Vec<Separation>,

    /// 贴近度系数 C_i = S-_i / (S+_i + S-_i), 两者皆 0 时取 0
    pub closeness: Vec<f64>,
}

// ==========================================
// TopsisRanker - TOPSIS 纯函数工具类
// ==========================================
pub struct TopsisRanker;

impl TopsisRanker {
    /// 对归一化矩阵执行 TOPSIS 计算
    ///
    /// # 参数
    /// - `normalized`: 归一化矩阵 (m × n)
    /// - `weights`: 归一化权重向量 (Σw = 1)
    /// - `directions`: 各准则方向
    ///
    /// # 返回
    /// 加权矩阵、分离度与贴近度系数 (与输入行序对齐)
    pub fn evaluate(
        normalized: &[Vec<f64>],
        weights: &[f64],
        directions: &[CriterionDirection],
    ) -> TopsisOutcome {
        let m = normalized.len();
        let n = weights.len();

        // 加权矩阵 v_ij = r_ij * w_j
        let weighted: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| row.iter().zip(weights.iter()).map(|(r, w)| r * w).collect())
            .collect();

        // 理想解/负理想解: benefit 取列最大/最小, cost 反之
        let mut ideal = vec![0.0_f64; n];
        let mut anti_ideal = vec![0.0_f64; n];
        for j in 0..n {
            let column: Vec<f64> = weighted.iter().map(|row| row[j]).collect();
            let max = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let min = column.iter().cloned().fold(f64::INFINITY, f64::min);
            match directions[j] {
                CriterionDirection::Benefit => {
                    ideal[j] = max;
                    anti_ideal[j] = min;
                }
                CriterionDirection::Cost => {
                    ideal[j] = min;
                    anti_ideal[j] = max;
                }
            }
        }

        // 欧氏分离度
        let separations: Vec<Separation> = (0..m)
            .map(|i| {
                let mut sum_ideal = 0.0;
                let mut sum_anti = 0.0;
                for j in 0..n {
                    sum_ideal += (weighted[i][j] - ideal[j]).powi(2);
                    sum_anti += (weighted[i][j] - anti_ideal[j]).powi(2);
                }
                Separation {
                    to_ideal: sum_ideal.sqrt(),
                    to_anti_ideal: sum_anti.sqrt(),
                }
            })
            .collect();

        // 贴近度系数
        // 单备选场景: S+ 与 S- 均为 0, 按约定回退为 0
        let closeness: Vec<f64> = separations
            .iter()
            .map(|s| {
                let denominator = s.to_ideal + s.to_anti_ideal;
                if denominator == 0.0 {
                    0.0
                } else {
                    s.to_anti_ideal / denominator
                }
            })
            .collect();

        TopsisOutcome {
            weighted,
            separations,
            closeness,
        }
    }
}
