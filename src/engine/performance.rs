// ==========================================
// 货运代理评估引擎 - 货代绩效聚合
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 2. 补充特性 (绩效聚合)
// 职责: 将调用方提供的运单记录聚合为决策矩阵输入
// 红线: 缺失指标使用文档化的中性回退值 1.0,
//       禁止以随机数充当占位指标
// ==========================================

use crate::domain::forwarder::ForwarderSignal;
use crate::domain::shipment::{DeliveryStatus, ForwarderPerformance, ShipmentRecord};
use crate::domain::types::CriterionDirection;
use std::collections::BTreeMap;

/// 无可用成本/时效观测时的中性基准分
const NEUTRAL_METRIC_SCORE: f64 = 1.0;

// ==========================================
// PerformanceSnapshot - 聚合输出
// ==========================================
// 行序与 names 对齐, 可直接喂入排序编排器
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSnapshot {
    /// 货代绩效明细 (按名称字典序)
    pub performances: Vec<ForwarderPerformance>,

    /// 备选名称 (与矩阵行对齐)
    pub names: Vec<String>,

    /// 决策矩阵: [成本分, 时效分, 可靠性分] (全部已转为 benefit 取向)
    pub matrix: Vec<Vec<f64>>,

    /// 准则方向 (成本与时效经倒数转换后均为 benefit)
    pub directions: Vec<CriterionDirection>,

    /// 异常检测用信号
    pub signals: Vec<ForwarderSignal>,
}

// ==========================================
// PerformanceAggregator - 绩效聚合器
// ==========================================
pub struct PerformanceAggregator;

impl PerformanceAggregator {
    /// 从运单记录聚合货代绩效并构建决策矩阵
    ///
    /// # 规则
    /// - 按货代名称分组 (空名称跳过), 名称字典序保证确定性
    /// - 平均运输天数: 已交付且揽收/到达日期齐全的运单
    /// - 准时率: 已交付数 / 运单总数
    /// - 平均每公斤成本: Σ报价 / Σ货重 (要求两者齐全且货重为正)
    /// - 成本/时效取倒数转为 benefit 取向, 无观测时取中性值 1.0
    pub fn aggregate(records: &[ShipmentRecord]) -> PerformanceSnapshot {
        // BTreeMap 保证分组遍历顺序确定
        let mut groups: BTreeMap<&str, Vec<&ShipmentRecord>> = BTreeMap::new();
        for record in records {
            if record.forwarder.is_empty() {
                continue;
            }
            groups.entry(record.forwarder.as_str()).or_default().push(record);
        }

        let mut performances = Vec::with_capacity(groups.len());
        for (name, shipments) in &groups {
            performances.push(Self::summarize(name, shipments));
        }

        let names: Vec<String> = performances.iter().map(|p| p.name.clone()).collect();
        let matrix: Vec<Vec<f64>> = performances
            .iter()
            .map(|p| {
                vec![
                    Self::reciprocal_score(p.avg_cost_per_kg),
                    Self::reciprocal_score(p.avg_transit_days),
                    p.reliability_score,
                ]
            })
            .collect();
        let signals: Vec<ForwarderSignal> = performances
            .iter()
            .map(|p| ForwarderSignal {
                name: p.name.clone(),
                reliability: p.reliability_score,
                delay_rate: 1.0 - p.on_time_rate,
            })
            .collect();

        PerformanceSnapshot {
            performances,
            names,
            matrix,
            directions: vec![CriterionDirection::Benefit; 3],
            signals,
        }
    }

    /// 单货代绩效汇总
    fn summarize(name: &str, shipments: &[&ShipmentRecord]) -> ForwarderPerformance {
        let total = shipments.len();

        let completed: Vec<&&ShipmentRecord> = shipments
            .iter()
            .filter(|s| {
                s.delivery_status == DeliveryStatus::Delivered
                    && s.collection_date.is_some()
                    && s.arrival_date.is_some()
            })
            .collect();

        let transit_days: Vec<f64> = completed
            .iter()
            .filter_map(|s| match (s.collection_date, s.arrival_date) {
                (Some(collected), Some(arrived)) => {
                    let days = (arrived - collected).num_days();
                    if days >= 0 {
                        Some(days as f64)
                    } else {
                        None
                    }
                }
                _ => None,
            })
            .collect();
        let avg_transit_days = if transit_days.is_empty() {
            0.0
        } else {
            transit_days.iter().sum::<f64>() / transit_days.len() as f64
        };

        let on_time_rate = completed.len() as f64 / total.max(1) as f64;
        let completion_rate = completed.len() as f64 / total.max(1) as f64;
        let reliability_score = (on_time_rate + completion_rate) / 2.0;

        let mut total_cost = 0.0;
        let mut total_weight = 0.0;
        for s in shipments {
            if let (Some(cost), Some(weight)) = (s.quoted_cost, s.weight_kg) {
                if weight > 0.0 {
                    total_cost += cost;
                    total_weight += weight;
                }
            }
        }
        let avg_cost_per_kg = if total_weight > 0.0 {
            total_cost / total_weight
        } else {
            0.0
        };

        ForwarderPerformance {
            name: name.to_string(),
            total_shipments: total,
            avg_cost_per_kg,
            avg_transit_days,
            on_time_rate,
            reliability_score,
        }
    }

    /// 成本型原始值转 benefit 分: 正值取倒数, 无观测取中性值
    fn reciprocal_score(raw: f64) -> f64 {
        if raw > 0.0 {
            1.0 / raw
        } else {
            NEUTRAL_METRIC_SCORE
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn delivered(
        forwarder: &str,
        collected: NaiveDate,
        arrived: NaiveDate,
        cost: f64,
        weight: f64,
    ) -> ShipmentRecord {
        ShipmentRecord {
            forwarder: forwarder.to_string(),
            delivery_status: DeliveryStatus::Delivered,
            collection_date: Some(collected),
            arrival_date: Some(arrived),
            quoted_cost: Some(cost),
            weight_kg: Some(weight),
        }
    }

    #[test]
    fn test_aggregate_metrics() {
        let records = vec![
            delivered("DHL", date(2025, 1, 1), date(2025, 1, 6), 5000.0, 1000.0),
            delivered("DHL", date(2025, 1, 10), date(2025, 1, 17), 6000.0, 1000.0),
            ShipmentRecord {
                forwarder: "DHL".to_string(),
                delivery_status: DeliveryStatus::Pending,
                collection_date: Some(date(2025, 1, 20)),
                arrival_date: None,
                quoted_cost: None,
                weight_kg: None,
            },
        ];
        let snapshot = PerformanceAggregator::aggregate(&records);
        assert_eq!(snapshot.performances.len(), 1);
        let p = &snapshot.performances[0];
        assert_eq!(p.total_shipments, 3);
        assert!((p.avg_transit_days - 6.0).abs() < 1e-12);
        assert!((p.on_time_rate - 2.0 / 3.0).abs() < 1e-12);
        assert!((p.avg_cost_per_kg - 5.5).abs() < 1e-12);
    }

    /// 缺失成本/时效观测 → 中性值 1.0, 不引入随机数
    #[test]
    fn test_neutral_fallback_for_missing_metrics() {
        let records = vec![ShipmentRecord {
            forwarder: "FedEx".to_string(),
            delivery_status: DeliveryStatus::Pending,
            collection_date: None,
            arrival_date: None,
            quoted_cost: None,
            weight_kg: None,
        }];
        let snapshot = PerformanceAggregator::aggregate(&records);
        assert_eq!(snapshot.matrix[0][0], 1.0);
        assert_eq!(snapshot.matrix[0][1], 1.0);
        assert_eq!(snapshot.matrix[0][2], 0.0);
    }

    /// 相同输入两次聚合结果逐位一致 (行序由字典序保证)
    #[test]
    fn test_deterministic_ordering() {
        let records = vec![
            delivered("Kuehne+Nagel", date(2025, 2, 1), date(2025, 2, 8), 4000.0, 800.0),
            delivered("DHL", date(2025, 2, 1), date(2025, 2, 5), 5000.0, 1000.0),
            delivered("DSV", date(2025, 2, 1), date(2025, 2, 7), 4500.0, 900.0),
        ];
        let first = PerformanceAggregator::aggregate(&records);
        let second = PerformanceAggregator::aggregate(&records);
        assert_eq!(first, second);
        assert_eq!(first.names, vec!["DHL", "DSV", "Kuehne+Nagel"]);
    }

    /// 空货代名称跳过
    #[test]
    fn test_empty_forwarder_skipped() {
        let records = vec![ShipmentRecord {
            forwarder: String::new(),
            delivery_status: DeliveryStatus::Pending,
            collection_date: None,
            arrival_date: None,
            quoted_cost: None,
            weight_kg: None,
        }];
        let snapshot = PerformanceAggregator::aggregate(&records);
        assert!(snapshot.performances.is_empty());
        assert!(snapshot.matrix.is_empty());
    }
}
