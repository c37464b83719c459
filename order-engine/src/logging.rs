//! Logging Infrastructure
//!
//! Structured logging setup for hosts embedding the engine:
//! - Console output, pretty in development and JSON in production
//! - Optional daily rotating application log files

use crate::config::EngineConfig;
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Initialize the logging system from an [`EngineConfig`]
///
/// Production environments log JSON; everything else logs human-readable
/// output. When `log_dir` is set, a daily-rotated `app-YYYY-MM-DD.log`
/// file is written alongside the console output.
pub fn init_logger(config: &EngineConfig) -> anyhow::Result<()> {
    init_logger_with(&config.log_level, config.is_production(), config.log_dir.as_deref())
}

/// Initialize the logging system with explicit settings
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON format (true for production)
/// * `log_dir` - Optional directory for file logging
pub fn init_logger_with(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new(level));

        if let Some(dir) = log_dir {
            let app_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Mutex::new(rolling_app_log(dir)?))
                .with_filter(EnvFilter::new(level));

            subscriber.with(console_layer).with(app_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new(level));

        if let Some(dir) = log_dir {
            let app_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(rolling_app_log(dir)?))
                .with_filter(EnvFilter::new(level));

            subscriber.with(console_layer).with(app_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    }

    Ok(())
}

/// Daily rotating appender for application logs under `<dir>/app/`
fn rolling_app_log(dir: &str) -> anyhow::Result<RollingFileAppender> {
    let app_log_dir = Path::new(dir).join("app");
    fs::create_dir_all(&app_log_dir)?;
    Ok(RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app"))
}
