use std::io;
use tracing_subscriber::{fmt, EnvFilter};

// 默认过滤：业务事件与 tower_http 的请求 span 均为 info
// 可通过 RUST_LOG 覆盖，例如 RUST_LOG=debug,tower_http=info 可看到存储层的 debug 事件
const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; everything else falls back to compact.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Install the global subscriber in the requested format, writing to stdout.
/// A second call is a no-op (the first subscriber stays installed).
pub fn init_logging(format: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // 统一的基础配置：不输出 target，写 stdout 以兼容隐藏 stderr 的容器环境
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stdout);
    // 两种格式的 builder 类型不同，只能分别 try_init；重复初始化返回 Err，直接忽略
    let _ = match LogFormat::from_name(format) {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
