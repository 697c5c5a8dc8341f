use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
/// `RUST_LOG` directives are honored on top of these.
pub fn init_logging(quiet: bool) {
    let directive = if quiet {
        "gameboard=error"
    } else {
        "gameboard=info"
    };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logging already initialized: {e}");
    }
}

/// Whether `GAMEBOARD_QUIET` asks for error-only logging.
pub fn quiet_from_env() -> bool {
    std::env::var("GAMEBOARD_QUIET")
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
