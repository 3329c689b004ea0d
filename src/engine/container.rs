// ==========================================
// 货运代理评估引擎 - 集装箱选型
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 4.8 Container Selector
// 职责: 按 (货重, 体积) 阈值表确定集装箱类型
// 红线: 无状态纯函数, 幂等
// ==========================================

use crate::domain::types::{CargoSpec, ContainerClass};

/// 20ft 标准箱载重上限 (kg)
const TWENTY_FT_MAX_WEIGHT_KG: f64 = 21000.0;
/// 20ft 标准箱容积上限 (m³)
const TWENTY_FT_MAX_VOLUME_CBM: f64 = 33.0;

/// 40ft 标准箱载重上限 (kg)
const FORTY_FT_MAX_WEIGHT_KG: f64 = 27000.0;
/// 40ft 标准箱容积上限 (m³)
const FORTY_FT_MAX_VOLUME_CBM: f64 = 67.0;

/// 40ft 高柜载重上限 (kg)
const FORTY_FT_HC_MAX_WEIGHT_KG: f64 = 29000.0;
/// 40ft 高柜容积上限 (m³)
const FORTY_FT_HC_MAX_VOLUME_CBM: f64 = 76.0;

// ==========================================
// ContainerSelector - 选型纯函数工具类
// ==========================================
pub struct ContainerSelector;

impl ContainerSelector {
    /// 按阈值表确定集装箱类型
    ///
    /// # 规则 (上限为闭区间, 超出任一维度即升级)
    /// - <=21000kg 且 <=33m³ → 20ft Standard
    /// - <=27000kg 且 <=67m³ → 40ft Standard
    /// - <=29000kg 且 <=76m³ → 40ft High Cube
    /// - 其余 → Break Bulk/Multi-Unit
    pub fn select(cargo: &CargoSpec) -> ContainerClass {
        let weight = cargo.weight_kg;
        let volume = cargo.volume_cbm;

        if weight <= TWENTY_FT_MAX_WEIGHT_KG && volume <= TWENTY_FT_MAX_VOLUME_CBM {
            ContainerClass::TwentyFtStandard
        } else if weight <= FORTY_FT_MAX_WEIGHT_KG && volume <= FORTY_FT_MAX_VOLUME_CBM {
            ContainerClass::FortyFtStandard
        } else if weight <= FORTY_FT_HC_MAX_WEIGHT_KG && volume <= FORTY_FT_HC_MAX_VOLUME_CBM {
            ContainerClass::FortyFtHighCube
        } else {
            ContainerClass::BreakBulk
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn cargo(weight_kg: f64, volume_cbm: f64) -> CargoSpec {
        CargoSpec {
            weight_kg,
            volume_cbm,
        }
    }

    /// 边界: 21000kg/33m³ 恰好命中 20ft, 超出 0.01kg 即升级
    #[test]
    fn test_twenty_ft_boundary() {
        assert_eq!(
            ContainerSelector::select(&cargo(21000.0, 33.0)),
            ContainerClass::TwentyFtStandard
        );
        assert_eq!(
            ContainerSelector::select(&cargo(21000.01, 33.0)),
            ContainerClass::FortyFtStandard
        );
    }

    #[test]
    fn test_high_cube_band() {
        assert_eq!(
            ContainerSelector::select(&cargo(28000.0, 70.0)),
            ContainerClass::FortyFtHighCube
        );
    }

    #[test]
    fn test_break_bulk_overflow() {
        assert_eq!(
            ContainerSelector::select(&cargo(35000.0, 40.0)),
            ContainerClass::BreakBulk
        );
        // 体积单独超限同样触发升级
        assert_eq!(
            ContainerSelector::select(&cargo(10000.0, 80.0)),
            ContainerClass::BreakBulk
        );
    }

    /// 幂等: 相同输入重复调用结果一致
    #[test]
    fn test_idempotent() {
        let spec = cargo(26000.0, 50.0);
        assert_eq!(
            ContainerSelector::select(&spec),
            ContainerSelector::select(&spec)
        );
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            ContainerClass::TwentyFtStandard.to_string(),
            "20ft Standard"
        );
        assert_eq!(
            ContainerClass::BreakBulk.to_string(),
            "Break Bulk/Multi-Unit"
        );
    }
}
