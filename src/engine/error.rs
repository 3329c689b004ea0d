// ==========================================
// 货运代理评估引擎 - 引擎层错误类型
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 7. 错误处理设计
// 工具: thiserror 派生宏
// ==========================================
// 红线: 结构性错误快速失败, 不返回半成品矩阵;
//       引擎内部不重试 (纯函数, 重试不改变结果)
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 矩阵结构错误 =====
    #[error("决策矩阵形状无效: {message}")]
    InvalidMatrixShape { message: String },

    // ===== 权重错误 =====
    #[error("权重向量无效: {message}")]
    InvalidWeights { message: String },

    // ===== 数值质量错误 =====
    #[error("存在非有限数值 ({location}): {value}")]
    NonFiniteValue { location: String, value: f64 },

    // ===== AHP 计算错误 =====
    #[error("成对比较矩阵除零: 准则 {index} 的权重为 0")]
    DivisionByZero { index: usize },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// 边界层错误码 (API 层向调用方暴露的稳定标识)
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidMatrixShape { .. } => "INVALID_MATRIX_SHAPE",
            EngineError::InvalidWeights { .. } => "INVALID_WEIGHTS",
            EngineError::NonFiniteValue { .. } => "NON_FINITE_VALUE",
            EngineError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            EngineError::Other(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

// ==========================================
// Diagnostic - 非致命诊断
// ==========================================
// 退化列按零填充策略消解, 不阻断计算;
// 仅在调用方要求详细输出时附加到结果上
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Diagnostic {
    /// 退化列: 某准则列全零 (归一化因子为 0)
    DegenerateColumn { col: usize },
}
