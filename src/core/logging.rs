use crate::core::config::AppEnvironment;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber for the given environment
///
/// Production logs are JSON at `info`; local and development logs are
/// human-readable at `debug`. `RUST_LOG` takes precedence when set.
pub fn init_logging(app_env: AppEnvironment) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(app_env)));

    let result = match app_env {
        AppEnvironment::Production => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        AppEnvironment::Local | AppEnvironment::Development => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init(),
    };

    result.map_err(|err| anyhow::anyhow!(err))
}

fn default_level(app_env: AppEnvironment) -> &'static str {
    match app_env {
        AppEnvironment::Production => "info",
        AppEnvironment::Local | AppEnvironment::Development => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(default_level(AppEnvironment::Production), "info");
        assert_eq!(default_level(AppEnvironment::Local), "debug");
        assert_eq!(default_level(AppEnvironment::Development), "debug");
    }

    #[test]
    fn test_second_install_is_an_error() {
        // The first call may lose to another test that installed a subscriber
        let _ = init_logging(AppEnvironment::Local);

        assert!(init_logging(AppEnvironment::Production).is_err());
        assert!(init_logging(AppEnvironment::Development).is_err());
    }
}
