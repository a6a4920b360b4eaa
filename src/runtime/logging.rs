//! 日志初始化
//!
//! 供嵌入方在启动时调用一次。开发环境输出带文件名行号的彩色文本，
//! 生产环境输出 JSON。

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;

/// 初始化 tracing 订阅器
///
/// 返回的 guard 必须在程序整个生命周期内持有，否则缓冲日志会丢失。
pub fn init() -> WorkerGuard {
    let config = AppConfig::get();

    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    guard
}
