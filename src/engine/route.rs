// ==========================================
// 货运代理评估引擎 - 航线距离计算
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.8 Geo-Distance
// 职责: Haversine 大圆距离, 每次调用重算不缓存
// ==========================================

use crate::domain::types::{GeoPoint, RouteSpec};

/// 地球半径 (km)
const EARTH_RADIUS_KM: f64 = 6371.0;

// ==========================================
// RouteDistance - 距离计算纯函数工具类
// ==========================================
pub struct RouteDistance;

impl RouteDistance {
    /// 两坐标间的大圆距离 (km), 四舍五入保留 1 位小数
    pub fn haversine_km(origin: GeoPoint, destination: GeoPoint) -> f64 {
        let d_lat = (destination.lat - origin.lat).to_radians();
        let d_lng = (destination.lng - origin.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + origin.lat.to_radians().cos()
                * destination.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        let distance = EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        (distance * 10.0).round() / 10.0
    }

    /// 航线距离 (km)
    pub fn for_route(route: &RouteSpec) -> f64 {
        Self::haversine_km(route.origin, route.destination)
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let p = GeoPoint { lat: 1.29, lng: 103.85 };
        assert_eq!(RouteDistance::haversine_km(p, p), 0.0);
    }

    /// 内罗毕 → 迪拜, 参考大圆距离约 3,519 km
    #[test]
    fn test_nairobi_to_dubai() {
        let nairobi = GeoPoint { lat: -1.2921, lng: 36.8219 };
        let dubai = GeoPoint { lat: 25.2048, lng: 55.2708 };
        let distance = RouteDistance::haversine_km(nairobi, dubai);
        assert!(distance > 3400.0 && distance < 3650.0);
        // 保留 1 位小数
        assert_eq!(distance, (distance * 10.0).round() / 10.0);
    }

    /// 对称性: A→B 与 B→A 距离一致
    #[test]
    fn test_symmetry() {
        let a = GeoPoint { lat: 31.2304, lng: 121.4737 };
        let b = GeoPoint { lat: 51.9244, lng: 4.4777 };
        assert_eq!(
            RouteDistance::haversine_km(a, b),
            RouteDistance::haversine_km(b, a)
        );
    }
}
