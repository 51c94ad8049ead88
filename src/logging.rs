use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the configured log level
pub const LOG_LEVEL_ENV: &str = "CARDBOARD_LOG_LEVEL";

/// Installs a stderr subscriber. Returns false if a global subscriber was already set.
pub fn init_logging(default_level: &str) -> bool {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(build_log_filter(default_level))
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
    installed
}

fn build_log_filter(default_level: &str) -> EnvFilter {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|raw| normalize_log_level(&raw))
        .or_else(|| normalize_log_level(default_level))
        .unwrap_or("warn");
    EnvFilter::new(format!("{level},cardboard_core={level}"))
}

fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_log_level() {
        assert_eq!(normalize_log_level("TRACE"), Some("trace"));
        assert_eq!(normalize_log_level(" warning "), Some("warn"));
        assert_eq!(normalize_log_level("loud"), None);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("debug");
        assert!(!init_logging("debug"));
    }
}
