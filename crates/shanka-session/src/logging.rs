//! 结构化日志初始化
//!
//! 标准输出为主；设置 `SHANKA_FILE_LOGS=1` 时额外写入按日滚动的文件日志
//! （目录由 `SHANKA_LOG_DIR` 指定，默认 `./logs`）。

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 文件日志写入守卫：drop 时冲刷缓冲。
pub struct LogGuard {
    _worker: WorkerGuard,
}

fn rolling_file_writer() -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let enabled = std::env::var("SHANKA_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    if !enabled {
        return None;
    }

    let log_dir = std::env::var("SHANKA_LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!("failed to create log directory {log_dir}: {err}");
        return None;
    }

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "shanka.log");
    Some(tracing_appender::non_blocking(appender))
}

/// 初始化 tracing 订阅器。返回的守卫须持有至进程结束。
pub fn init_tracing(log_level: &str) -> Option<LogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(true);

    match rolling_file_writer() {
        Some((writer, worker)) => {
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .with(file_layer)
                .init();
            Some(LogGuard { _worker: worker })
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .init();
            None
        }
    }
}
