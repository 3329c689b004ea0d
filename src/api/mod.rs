// ==========================================
// 货运代理评估引擎 - API 层
// ==========================================
// 依据: Forwarder_DSS_Spec.md - 6. 外部接口
// 职责: 面向宿主应用的进程内调用门面
// 红线: 错误在边界转为稳定错误码字符串,
//       不向调用方抛出内部类型
// ==========================================

pub mod dto;

pub use dto::{RankingRequest, RankingResponse};

use crate::config::RankingOptions;
use crate::engine::orchestrator::{RankingInput, RankingOrchestrator};
use tracing::{error, info};

// ==========================================
// RankingApi - 排序门面
// ==========================================
pub struct RankingApi;

impl RankingApi {
    /// 创建 API 实例
    pub fn new() -> Self {
        Self
    }

    /// 执行排序
    ///
    /// # 返回
    /// - `Ok(RankingResponse)`: 完整排序结果
    /// - `Err(code)`: 稳定错误码 (如 "INVALID_MATRIX_SHAPE")
    pub fn rank(&self, request: RankingRequest) -> Result<RankingResponse, String> {
        let options = RankingOptions {
            verbose_diagnostics: request.verbose_diagnostics.unwrap_or(false),
        };
        let input = RankingInput {
            matrix: request.decision_matrix,
            weights: request.weights,
            directions: request.directions,
            names: request.alternative_names,
            signals: request.forwarder_signals,
            cargo: request.cargo,
            route: request.route,
        };

        match RankingOrchestrator::new(options).rank(&input) {
            Ok(result) => {
                info!(ranked = result.ranked.len(), "排序请求完成");
                Ok(RankingResponse {
                    ranked: result.ranked,
                    consistency: result.consistency,
                    container_class: result.container_class.map(|c| c.to_string()),
                    route_distance_km: result.route_distance_km,
                    anomalies: result.anomalies,
                    diagnostics: result.diagnostics,
                })
            }
            Err(err) => {
                error!(code = err.code(), error = %err, "排序请求失败");
                Err(err.code().to_string())
            }
        }
    }

    /// JSON 进, JSON 出 (宿主应用的序列化边界)
    ///
    /// # 错误码
    /// - "MALFORMED_REQUEST": 请求 JSON 无法反序列化
    /// - "SERIALIZE_FAILED": 响应序列化失败
    /// - 其余同 `rank`
    pub fn rank_json(&self, request_json: &str) -> Result<String, String> {
        let request: RankingRequest = serde_json::from_str(request_json).map_err(|err| {
            error!(error = %err, "排序请求 JSON 解析失败");
            "MALFORMED_REQUEST".to_string()
        })?;

        let response = self.rank(request)?;
        serde_json::to_string(&response).map_err(|err| {
            error!(error = %err, "排序响应序列化失败");
            "SERIALIZE_FAILED".to_string()
        })
    }
}

impl Default for RankingApi {
    fn default() -> Self {
        Self::new()
    }
}
