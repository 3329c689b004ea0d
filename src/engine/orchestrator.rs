// ==========================================
// 货运代理评估引擎 - 排序编排器
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.9 Ranking Orchestrator
// 用途: 协调归一化/AHP/TOPSIS/灰色/混合/装饰各阶段
// ==========================================
// 流程: 接收输入 → 归一化 → 加权 → TOPSIS → 灰色+混合
//       → 装饰(中智/异常/箱型/距离) → 排序输出
// 红线: 单趟执行, 无重试, 无跨调用状态;
//       结构性输入错误快速失败, 不返回部分结果
// ==========================================

use crate::config::RankingOptions;
use crate::domain::forwarder::{
    AlternativeScore, AnomalyInsight, ForwarderSignal, PerCriterionScores,
};
use crate::domain::types::{CargoSpec, ContainerClass, CriterionDirection, RouteSpec};
use crate::engine::ahp::{AhpConsistency, AhpValidator};
use crate::engine::blend::ScoreBlender;
use crate::engine::container::ContainerSelector;
use crate::engine::error::{Diagnostic, EngineResult};
use crate::engine::grey::GreyScorer;
use crate::engine::insight::AnomalyDetector;
use crate::engine::neutrosophic::NeutrosophicDecomposer;
use crate::engine::normalizer::MatrixNormalizer;
use crate::engine::route::RouteDistance;
use crate::engine::topsis::TopsisRanker;
use tracing::{debug, info, warn};

/// 中智分解约定的三准则列序: [成本, 时效, 可靠性]
const NEUTROSOPHIC_CRITERIA_COUNT: usize = 3;

// ==========================================
// RankingInput - 排序输入
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RankingInput {
    /// 决策矩阵 (m 备选 × n 准则)
    pub matrix: Vec<Vec<f64>>,

    /// 准则权重 (总和偏离 1 时引擎按总和归一化)
    pub weights: Vec<f64>,

    /// 准则方向
    pub directions: Vec<CriterionDirection>,

    /// 备选名称 (与矩阵行对齐)
    pub names: Vec<String>,

    /// 货代运营信号 (可选, 异常检测输入)
    pub signals: Option<Vec<ForwarderSignal>>,

    /// 货物规格 (可选, 提供则推荐箱型)
    pub cargo: Option<CargoSpec>,

    /// 航线 (可选, 提供则计算大圆距离)
    pub route: Option<RouteSpec>,
}

// ==========================================
// RankingResult - 排序结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RankingResult {
    /// 按最终得分降序的备选评分
    pub ranked: Vec<AlternativeScore>,

    /// AHP 一致性校验 (咨询性; 任一权重为 0 时无法构造
    /// 成对比较矩阵, 置 None 并记录告警)
    pub consistency: Option<AhpConsistency>,

    /// 推荐箱型
    pub container_class: Option<ContainerClass>,

    /// 航线距离 (km)
    pub route_distance_km: Option<f64>,

    /// 异常告警
    pub anomalies: Vec<AnomalyInsight>,

    /// 非致命诊断 (仅 verbose_diagnostics 开启时填充)
    pub diagnostics: Vec<Diagnostic>,
}

// ==========================================
// RankingOrchestrator - 排序编排器
// ==========================================
pub struct RankingOrchestrator {
    options: RankingOptions,
}

impl RankingOrchestrator {
    /// 创建编排器实例
    pub fn new(options: RankingOptions) -> Self {
        Self { options }
    }

    /// 执行完整排序流程
    ///
    /// # 参数
    /// - `input`: 决策矩阵、权重、方向、名称及可选装饰输入
    ///
    /// # 返回
    /// 按最终得分降序的完整排序结果
    ///
    /// # 错误
    /// 结构性错误 (`InvalidMatrixShape` / `InvalidWeights` /
    /// `NonFiniteValue`) 在任何计算发生前返回
    pub fn rank(&self, input: &RankingInput) -> EngineResult<RankingResult> {
        info!(
            alternatives = input.matrix.len(),
            criteria = input.weights.len(),
            "开始执行排序流程"
        );

        // ==========================================
        // 步骤1: 结构校验 (快速失败)
        // ==========================================
        MatrixNormalizer::validate(
            &input.matrix,
            &input.weights,
            &input.directions,
            &input.names,
        )?;

        // ==========================================
        // 步骤2: 权重归一化 + AHP 一致性 (咨询性)
        // ==========================================
        let weights = MatrixNormalizer::normalize_weights(&input.weights)?;
        let consistency = match AhpValidator::check_consistency(&weights) {
            Ok(result) => {
                if !result.is_consistent {
                    warn!(
                        consistency_ratio = result.consistency_ratio,
                        "权重一致性比率超过阈值, 结果仅作提示"
                    );
                }
                Some(result)
            }
            Err(err) => {
                warn!(error = %err, "无法计算权重一致性, 跳过咨询性校验");
                None
            }
        };

        // ==========================================
        // 步骤3: 矩阵归一化
        // ==========================================
        debug!("步骤3: 列向量归一化");
        let normalized = MatrixNormalizer::normalize(&input.matrix, &input.directions);

        // ==========================================
        // 步骤4: TOPSIS 贴近度
        // ==========================================
        debug!("步骤4: TOPSIS 加权与分离度");
        let topsis = TopsisRanker::evaluate(&normalized.values, &weights, &input.directions);

        // ==========================================
        // 步骤5: 灰色关联 + 混合打分
        // ==========================================
        debug!("步骤5: 灰色关联与混合打分");
        let grey_grades = GreyScorer::relational_grades(&normalized.values);
        let final_scores = ScoreBlender::blend(&topsis.closeness, &grey_grades);

        // ==========================================
        // 步骤6: 装饰 (中智/异常/箱型/距离)
        // ==========================================
        debug!("步骤6: 结果装饰");
        let mut ranked: Vec<AlternativeScore> = input
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let per_criterion = normalized.values[i].clone();
                let neutrosophic = if per_criterion.len() == NEUTROSOPHIC_CRITERIA_COUNT {
                    Some(NeutrosophicDecomposer::decompose(&PerCriterionScores {
                        cost: per_criterion[0],
                        time: per_criterion[1],
                        reliability: per_criterion[2],
                    }))
                } else {
                    None
                };
                AlternativeScore {
                    name: name.clone(),
                    score: final_scores[i],
                    closeness: topsis.closeness[i],
                    grey_grade: grey_grades[i],
                    per_criterion,
                    neutrosophic,
                }
            })
            .collect();

        let anomalies = input
            .signals
            .as_deref()
            .map(AnomalyDetector::detect)
            .unwrap_or_default();
        let container_class = input.cargo.as_ref().map(ContainerSelector::select);
        let route_distance_km = input.route.as_ref().map(RouteDistance::for_route);

        // ==========================================
        // 步骤7: 按最终得分降序排序 (稳定排序, 同分保持输入行序)
        // ==========================================
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let diagnostics = if self.options.verbose_diagnostics {
            normalized.diagnostics
        } else {
            Vec::new()
        };

        info!(
            top_choice = %ranked[0].name,
            top_score = ranked[0].score,
            anomaly_count = anomalies.len(),
            "排序流程完成"
        );

        Ok(RankingResult {
            ranked,
            consistency,
            container_class,
            route_distance_km,
            anomalies,
            diagnostics,
        })
    }
}

impl Default for RankingOrchestrator {
    fn default() -> Self {
        Self::new(RankingOptions::default())
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CriterionDirection::Benefit;
    use crate::engine::error::EngineError;

    fn reference_input() -> RankingInput {
        RankingInput {
            matrix: vec![
                vec![0.85, 0.70, 0.90],
                vec![0.75, 0.85, 0.80],
                vec![0.90, 0.60, 0.75],
                vec![0.80, 0.75, 0.70],
            ],
            weights: vec![0.4, 0.3, 0.3],
            directions: vec![Benefit; 3],
            names: vec![
                "DHL".to_string(),
                "FedEx".to_string(),
                "Kuehne+Nagel".to_string(),
                "DSV".to_string(),
            ],
            signals: None,
            cargo: None,
            route: None,
        }
    }

    #[test]
    fn test_rank_sorted_descending() {
        let result = RankingOrchestrator::default().rank(&reference_input()).unwrap();
        assert_eq!(result.ranked.len(), 4);
        for pair in result.ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for score in &result.ranked {
            assert!(score.score >= 0.0 && score.score <= 1.0);
        }
    }

    #[test]
    fn test_consistency_attached_not_blocking() {
        let result = RankingOrchestrator::default().rank(&reference_input()).unwrap();
        let consistency = result.consistency.unwrap();
        assert!(consistency.is_consistent);
        assert!(consistency.consistency_ratio < 0.1);
    }

    /// 三准则场景附带中智三元组
    #[test]
    fn test_neutrosophic_present_for_three_criteria() {
        let result = RankingOrchestrator::default().rank(&reference_input()).unwrap();
        assert!(result.ranked.iter().all(|s| s.neutrosophic.is_some()));
    }

    #[test]
    fn test_structural_failure_fast() {
        let mut input = reference_input();
        input.matrix[2].pop();
        let err = RankingOrchestrator::default().rank(&input).unwrap_err();
        assert!(matches!(err, EngineError::InvalidMatrixShape { .. }));
    }

    /// 诊断默认不附带, verbose 开启后附带
    #[test]
    fn test_verbose_diagnostics_switch() {
        let mut input = reference_input();
        for row in input.matrix.iter_mut() {
            row[1] = 0.0; // 制造退化列
        }

        let silent = RankingOrchestrator::default().rank(&input).unwrap();
        assert!(silent.diagnostics.is_empty());

        let verbose = RankingOrchestrator::new(RankingOptions {
            verbose_diagnostics: true,
        })
        .rank(&input)
        .unwrap();
        assert_eq!(verbose.diagnostics, vec![Diagnostic::DegenerateColumn { col: 1 }]);
    }
}
