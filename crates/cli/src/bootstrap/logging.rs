use ferrous_txt_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout carries only the query result.
///
/// The filter comes from `--log-level` alone, never from the environment.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", config.level, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
