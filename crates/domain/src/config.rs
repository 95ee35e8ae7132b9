pub mod errors;
pub mod logging;
pub mod query;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::{QueryConfig, DEFAULT_EDNS_PAYLOAD_SIZE, DEFAULT_SERVER, DEFAULT_TIMEOUT};
