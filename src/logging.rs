// ==========================================
// 日志系统初始化
// ==========================================
// 输出: tracing-subscriber fmt（文本或 JSON）
// actix-web 的 log 记录经 tracing-log 桥接输出
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 未设置 RUST_LOG 时的过滤器：本服务与 actix 请求日志
pub const DEFAULT_FILTER: &str = "contest_lottery=info,actix_web=info";

/// 日志格式环境变量，取值 `json` 时输出单行 JSON
pub const LOG_FORMAT_ENV: &str = "CONTEST_LOG_FORMAT";

fn wants_json(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 覆盖 [`DEFAULT_FILTER`]，例如 `RUST_LOG=contest_lottery=debug`
/// - CONTEST_LOG_FORMAT: `json` 或 `text`（默认）
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = wants_json(std::env::var(LOG_FORMAT_ENV).ok().as_deref());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 测试用，可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("contest_lottery=debug"))
        .with_test_writer()
        .try_init();
}
