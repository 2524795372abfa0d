use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the stderr subscriber. `RUST_LOG` wins over `debug`.
pub fn init(debug: bool) {
    let directives = if debug {
        "info,deskmenu=debug,deskmenu_app=debug,deskmenu_tools=debug,deskmenu_executor=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // A subscriber may already be installed when embedded in tests
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Tracing subscriber already set");
    }
}
