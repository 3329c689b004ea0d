// ==========================================
// 日志系统初始化
// ==========================================
// tracing + tracing-subscriber, 紧凑格式
// RUST_LOG 可覆盖默认过滤级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 宿主进程启动时调用一次
///
/// 默认只放行本库的 info 级日志, 通过 RUST_LOG 放宽
/// (如 RUST_LOG=forwarder_dss=debug)
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("forwarder_dss=info"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 测试用初始化, 可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("forwarder_dss=debug"))
        .with_test_writer()
        .try_init();
}
