// ==========================================
// 货运代理评估引擎 - 异常检测
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.7 Anomaly Detector
// 职责: 按固定阈值对货代运营信号产出告警
// 红线: 规则相互独立, 同一货代可产出多条告警;
//       阈值为严格比较, 边界值不触发
// ==========================================

use crate::domain::forwarder::{AnomalyInsight, ForwarderSignal};
use crate::domain::types::Severity;

/// 低可靠性阈值: reliability < 0.7 触发
const LOW_RELIABILITY_THRESHOLD: f64 = 0.7;

/// 高延误率阈值: delay_rate > 0.25 触发
const HIGH_DELAY_THRESHOLD: f64 = 0.25;

/// 严重延误率阈值: delay_rate > 0.4 时升级为 HIGH
const SEVERE_DELAY_THRESHOLD: f64 = 0.4;

/// 组合规则可靠性阈值
const COMBINED_RELIABILITY_THRESHOLD: f64 = 0.8;

/// 组合规则延误率阈值
const COMBINED_DELAY_THRESHOLD: f64 = 0.15;

// ==========================================
// AnomalyDetector - 异常检测纯函数工具类
// ==========================================
pub struct AnomalyDetector;

impl AnomalyDetector {
    /// 对货代信号列表执行异常检测
    ///
    /// # 规则
    /// 1. reliability < 0.7 → HIGH
    /// 2. delay_rate > 0.25 → delay_rate > 0.4 时 HIGH, 否则 MEDIUM
    /// 3. reliability < 0.8 且 delay_rate > 0.15 → MEDIUM (独立于前两条)
    pub fn detect(signals: &[ForwarderSignal]) -> Vec<AnomalyInsight> {
        let mut insights = Vec::new();

        for signal in signals {
            if signal.reliability < LOW_RELIABILITY_THRESHOLD {
                insights.push(AnomalyInsight {
                    name: signal.name.clone(),
                    message: format!(
                        "可靠性偏低: {:.0}%",
                        signal.reliability * 100.0
                    ),
                    severity: Severity::High,
                });
            }

            if signal.delay_rate > HIGH_DELAY_THRESHOLD {
                let severity = if signal.delay_rate > SEVERE_DELAY_THRESHOLD {
                    Severity::High
                } else {
                    Severity::Medium
                };
                insights.push(AnomalyInsight {
                    name: signal.name.clone(),
                    message: format!("延误趋势: {:.0}%", signal.delay_rate * 100.0),
                    severity,
                });
            }

            if signal.reliability < COMBINED_RELIABILITY_THRESHOLD
                && signal.delay_rate > COMBINED_DELAY_THRESHOLD
            {
                insights.push(AnomalyInsight {
                    name: signal.name.clone(),
                    message: format!(
                        "可靠性与延误率组合风险: 可靠性 {:.0}%, 延误率 {:.0}%",
                        signal.reliability * 100.0,
                        signal.delay_rate * 100.0
                    ),
                    severity: Severity::Medium,
                });
            }
        }

        insights
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn signal(name: &str, reliability: f64, delay_rate: f64) -> ForwarderSignal {
        ForwarderSignal {
            name: name.to_string(),
            reliability,
            delay_rate,
        }
    }

    /// 阈值为严格比较: 恰好 0.7 不触发, 0.6999 触发
    #[test]
    fn test_reliability_threshold_exactness() {
        let none = AnomalyDetector::detect(&[signal("A", 0.7, 0.0)]);
        assert!(none.is_empty());

        let hit = AnomalyDetector::detect(&[signal("A", 0.6999, 0.0)]);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].severity, Severity::High);
    }

    /// 延误率规则: > 0.4 升级为 HIGH
    #[test]
    fn test_delay_severity_escalation() {
        let medium = AnomalyDetector::detect(&[signal("B", 0.95, 0.3)]);
        assert_eq!(medium.len(), 1);
        assert_eq!(medium[0].severity, Severity::Medium);

        let high = AnomalyDetector::detect(&[signal("B", 0.95, 0.41)]);
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].severity, Severity::High);
    }

    /// 组合规则独立触发, 同一货代可产出多条告警
    #[test]
    fn test_multiple_insights_per_forwarder() {
        let insights = AnomalyDetector::detect(&[signal("C", 0.65, 0.45)]);
        // 规则1 (可靠性<0.7) + 规则2 (延误>0.25, 严重) + 规则3 (组合)
        assert_eq!(insights.len(), 3);
        assert_eq!(
            insights.iter().filter(|i| i.severity == Severity::High).count(),
            2
        );
    }

    /// 组合规则边界: 0.8/0.15 均为严格比较
    #[test]
    fn test_combined_rule_boundaries() {
        assert!(AnomalyDetector::detect(&[signal("D", 0.8, 0.2)]).is_empty());
        assert!(AnomalyDetector::detect(&[signal("D", 0.79, 0.15)]).is_empty());
        let hit = AnomalyDetector::detect(&[signal("D", 0.79, 0.16)]);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].severity, Severity::Medium);
    }
}
