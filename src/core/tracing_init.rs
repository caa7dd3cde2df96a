use crate::core::config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Console output is chosen by the `console` flag or by `format = "console"`
fn wants_console(config: &LoggingConfig) -> bool {
    config.console || config.format == "console"
}

/// `RUST_LOG` wins over the configured level
fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn init_tracing(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(build_filter(config));

    if wants_console(config) {
        registry.with(fmt::layer().with_target(false)).init();
    } else {
        registry.with(fmt::layer().json().flatten_event(true)).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(format: &str, console: bool) -> LoggingConfig {
        LoggingConfig {
            level: "debug".to_string(),
            format: format.to_string(),
            console,
        }
    }

    #[test]
    fn test_wants_console() {
        assert!(wants_console(&logging("console", false)));
        assert!(wants_console(&logging("json", true)));
        assert!(!wants_console(&logging("json", false)));
    }

    #[test]
    fn test_build_filter_uses_configured_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert_eq!(build_filter(&logging("json", false)).to_string(), "debug");
    }
}
