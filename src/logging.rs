//! Tracing subscriber setup.

use crate::config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE_PREFIX: &str = "marquee.log";

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. When `config.directory` is
/// set, events are also written to a daily rolling file; keep the returned
/// guard alive for as long as that file should be flushed.
///
/// Calling this more than once is harmless; only the first call takes effect.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    layers.push(if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    });

    let guard = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            layers.push(if config.json {
                layer.json().boxed()
            } else {
                layer.boxed()
            });
            Some(guard)
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_layer_returns_guard() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            level: "debug".to_string(),
            json: true,
            directory: Some(dir.path().to_path_buf()),
        };

        let guard = init(&config);
        tracing::info!("written to the rolling file");

        assert!(guard.is_some());
    }

    #[test]
    fn test_stdout_only_has_no_guard() {
        assert!(init(&LogConfig::default()).is_none());
    }
}
