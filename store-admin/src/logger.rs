//! Logging setup

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// `log_level` accepts an `EnvFilter` directive ("info",
/// "store_admin=debug,reqwest=warn"). When `log_dir` names an existing
/// directory, output goes to a daily rolling file there instead of stdout.
pub fn init_logger(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_new(log_level.unwrap_or("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "store-admin");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("Log directory {dir} does not exist, logging to stdout");
    }

    subscriber.init();
}
