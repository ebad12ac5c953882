use std::fs::File;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Names a file to log to instead of stderr.
pub const LOG_FILE_ENV: &str = "STOREFRONT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing.
///
/// Filter comes from `RUST_LOG` (default `warn`). Output goes to stderr
/// unless `STOREFRONT_LOG` is set, in which case it goes to
/// `{path}.{timestamp}.{pid}` so concurrent runs never share a file.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let Ok(base) = std::env::var(LOG_FILE_ENV) else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            )
            .init();
        return;
    };

    let path = unique_log_path(&base);
    match File::create(&path) {
        Ok(file) => registry
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init(),
        Err(e) => eprintln!("Warning: cannot create log file {}: {}", path, e),
    }
}

fn unique_log_path(base: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, std::process::id())
}
