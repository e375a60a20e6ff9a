use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the CLI subscriber; `RUST_LOG` overrides the default filter
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "lvsys_conf=debug,info"
    } else {
        "lvsys_conf=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
