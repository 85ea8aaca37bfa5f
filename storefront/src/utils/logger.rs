//! Logging Infrastructure
//!
//! Structured logging setup for the storefront binary and tests.

use std::path::Path;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "storefront";

/// Initialize the logger at info level on stdout
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an optional daily rolling log file
///
/// `log_level` accepts anything `EnvFilter` understands ("debug",
/// "storefront=trace,info", ...). When `log_dir` exists, output goes to
/// `<log_dir>/storefront.YYYY-MM-DD` instead of stdout.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_new(log_level.unwrap_or("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(file_appender) = log_file_writer(log_dir) {
        // try_init: a second initialization (tests) keeps the first subscriber
        let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.try_init();
}

/// Daily rolling appender in `log_dir`, if that directory exists
fn log_file_writer(log_dir: Option<&str>) -> Option<RollingFileAppender> {
    log_dir
        .filter(|dir| Path::new(dir).is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_missing_dir_falls_back_to_stdout() {
        init_logger_with_file(Some("debug"), Some("/definitely/not/a/dir"));
        tracing::debug!("logger initialized");
    }

    #[test]
    fn test_log_file_writer_creates_daily_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let mut writer = log_file_writer(dir.path().to_str()).unwrap();
        writer.write_all(b"order placed\n").unwrap();
        writer.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("storefront."));
    }

    #[test]
    fn test_log_file_writer_needs_existing_dir() {
        assert!(log_file_writer(None).is_none());
        assert!(log_file_writer(Some("/definitely/not/a/dir")).is_none());
    }
}
