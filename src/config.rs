// ==========================================
// 货运代理评估引擎 - 运行选项
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 3. 环境栈 (配置)
// 职责: 单次排序调用的选项开关
// 红线: 算法常量 (混合权重、ζ、阈值表) 固定在各自模块,
//       不通过配置暴露
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RankingOptions - 排序调用选项
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingOptions {
    /// 是否在输出中附带非致命诊断 (退化列等)
    pub verbose_diagnostics: bool,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            verbose_diagnostics: false,
        }
    }
}
