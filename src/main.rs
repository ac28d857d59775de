//! enumgen CLI entry point

use enumgen::cli::Cli;

fn main() {
    let cli = Cli::load();
    let config = cli.generate_config();

    // Initialize structured logging with env-based filter, defaulting to info (debug with --verbose)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();

    enumgen::cli::run(cli);
}
