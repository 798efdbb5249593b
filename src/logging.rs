use std::fs::File;
use tracing::Subscriber;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable naming the log file path.
pub const LOG_ENV_VAR: &str = "NAVSTACK_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: writing to stdout/stderr would corrupt
/// the alternate screen. Set `NAVSTACK_LOG` to a file path to enable it;
/// `RUST_LOG` controls the filter (default `info`).
///
/// The file name gets a timestamp and PID suffix, `{path}.{timestamp}.{pid}`,
/// so concurrent sessions don't clobber each other.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer(file))
        .init();
}

/// Plain-text layer with RFC 3339 UTC timestamps, matching the UTC times
/// shown in the history dialog.
fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer::<S>()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_keeps_base_and_appends_pid() {
        let path = unique_log_path("/tmp/navstack.log");
        assert!(path.starts_with("/tmp/navstack.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }

    #[test]
    fn file_layer_writes_utc_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navstack.log");
        let file = File::create(&path).unwrap();

        let subscriber = tracing_subscriber::registry().with(file_layer(file));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("navigation started");
        });

        let content = std::fs::read_to_string(&path).unwrap();
        let line = content.lines().next().unwrap();
        let timestamp = line.split_whitespace().next().unwrap();
        assert!(timestamp.contains('T'));
        assert!(timestamp.ends_with('Z'));
        assert!(line.contains("INFO"));
        assert!(line.contains("navigation started"));
    }
}
