#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration validation error: {0}")]
    Validation(String),
}
