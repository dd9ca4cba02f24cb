/// Used when `RUST_LOG` is unset. `TraceLayer` reports requests at debug.
#[cfg(feature = "ssr")]
pub const DEFAULT_SERVER_FILTER: &str = "portfolio_site=info,tower_http=debug";

#[cfg(feature = "ssr")]
pub fn init_server_logger() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_SERVER_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

#[cfg(feature = "hydrate")]
pub fn init_browser_logger() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(level);
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use tracing_subscriber::{filter::Directive, EnvFilter};

    #[test]
    fn test_default_filter_shows_request_traces() {
        assert!(EnvFilter::try_new(DEFAULT_SERVER_FILTER).is_ok());
        let http = DEFAULT_SERVER_FILTER
            .split(',')
            .find(|d| d.starts_with("tower_http="))
            .expect("tower_http directive should be present");
        let directive = http.parse::<Directive>().expect("directive should parse");
        assert_eq!(directive.to_string(), "tower_http=debug");
    }
}
