use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reports go to stdout, so logs are written to stderr.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let default_directive = match (verbose, level) {
        (true, _) => "onexone=debug".to_string(),
        (false, Some(level)) => format!("onexone={}", level),
        (false, None) => "onexone=warn".to_string(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
