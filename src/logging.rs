use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing.
///
/// Logs go to stderr by default. Set `CHIRPER_LOG` to a file path to write
/// them to `{path}.{timestamp}.{pid}` instead, so concurrent sessions never
/// share a file. The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_path) = std::env::var("CHIRPER_LOG").ok() else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .init();
        return;
    };

    let unique_path = session_log_path(&log_path, Utc::now(), std::process::id());

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{base}.{unix seconds}.{pid}`
fn session_log_path(base: &str, started_at: DateTime<Utc>, pid: u32) -> String {
    format!("{}.{}.{}", base, started_at.timestamp(), pid)
}
