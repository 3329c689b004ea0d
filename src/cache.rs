// ==========================================
// 货运代理评估引擎 - 显式快照缓存
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 2. 补充特性 (缓存重构)
// 职责: 由调用方持有并显式传递的数据快照容器
// 红线: 不使用全局可变状态; 时钟由调用方注入,
//       引擎本身保持纯函数
// ==========================================

use crate::domain::forwarder::ForwarderSignal;
use crate::domain::shipment::ShipmentRecord;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DecisionCache - 决策数据快照缓存
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionCache {
    /// 运单快照
    pub shipments: Vec<ShipmentRecord>,

    /// 货代信号快照
    pub forwarders: Vec<ForwarderSignal>,

    /// 快照采集时间
    pub captured_at: DateTime<Utc>,

    /// 有效期 (秒)
    pub ttl_seconds: i64,
}

impl DecisionCache {
    /// 构建快照
    pub fn new(
        shipments: Vec<ShipmentRecord>,
        forwarders: Vec<ForwarderSignal>,
        captured_at: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> Self {
        Self {
            shipments,
            forwarders,
            captured_at,
            ttl_seconds,
        }
    }

    /// 快照在 `now` 时刻是否仍然新鲜
    ///
    /// 新鲜度是 (captured_at, ttl, now) 的纯函数,
    /// 不读取系统时钟
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.captured_at <= Duration::seconds(self.ttl_seconds)
    }

    /// 快照年龄 (秒); `now` 早于采集时间时为 0
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.captured_at).num_seconds().max(0)
    }
}
