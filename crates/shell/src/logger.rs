//! Logging setup for the CLI.

use std::path::Path;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Sends logs to `log_path`, rotated daily.
///
/// Logs from `ftlog`'s own appender go to a sibling `*.err.log` file. The
/// parent directory is created if it does not exist.
///
/// # Errors
///
/// - If the parent directory of `log_path` could not be created.
/// - If the logger could not be initialized.
pub fn configure_logger<P: AsRef<Path>>(log_path: P) -> Result<LoggerGuard, String> {
    let log_path = log_path.as_ref();
    if let Some(dir) = log_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| format!("could not create log directory {dir:?}: {e}"))?;
    }

    let writer = FileAppender::builder().path(log_path).rotate(Period::Day).build();
    let err_path = log_path.with_extension("err.log");

    ftlog::Builder::new()
        .max_log_level(LevelFilter::Info)
        .root(writer)
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())
}
