// ==========================================
// 货运代理评估引擎 - 运单记录定义
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 2. 补充特性 (绩效聚合)
// 职责: 定义调用方喂入的运单快照结构
// 红线: 引擎不负责运单的来源与存储, 只约定数值契约
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// DeliveryStatus - 交付状态
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Pending,   // 在途/待交付
    Delivered, // 已交付
}

// ==========================================
// ShipmentRecord - 运单记录
// ==========================================
// 调用方从其数据源整理后的瞬态快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// 中标货代名称
    pub forwarder: String,

    /// 交付状态
    pub delivery_status: DeliveryStatus,

    /// 揽收日期
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_date: Option<NaiveDate>,

    /// 到达目的地日期
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<NaiveDate>,

    /// 该货代报价 (总价)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_cost: Option<f64>,

    /// 货重 (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

// ==========================================
// ForwarderPerformance - 货代绩效汇总
// ==========================================
// 由 PerformanceAggregator 从运单记录推导
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwarderPerformance {
    /// 货代名称
    pub name: String,

    /// 运单总数
    pub total_shipments: usize,

    /// 平均每公斤成本
    pub avg_cost_per_kg: f64,

    /// 平均运输天数
    pub avg_transit_days: f64,

    /// 准时率 [0,1]
    pub on_time_rate: f64,

    /// 可靠性评分 [0,1]
    pub reliability_score: f64,
}
