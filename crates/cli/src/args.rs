use clap::Parser;
use ferrous_txt_domain::config::{DEFAULT_EDNS_PAYLOAD_SIZE, DEFAULT_SERVER};
use ferrous_txt_domain::{ConfigError, LoggingConfig, QueryConfig};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ferrous-txt")]
#[command(version)]
#[command(about = "Query TXT records with UDP to TCP fallback")]
pub struct Cli {
    /// Domain name to query (a trailing dot is added when missing)
    #[arg(value_name = "FQDN")]
    pub fqdn: Option<String>,

    /// Nameserver as host[:port], repeat to try several in order
    #[arg(long = "server", value_name = "HOST[:PORT]", default_value = DEFAULT_SERVER)]
    pub servers: Vec<String>,

    /// Do not request recursion
    #[arg(long)]
    pub no_recurse: bool,

    /// EDNS0 UDP payload size, 0 disables EDNS0
    #[arg(long, value_name = "SIZE", default_value_t = DEFAULT_EDNS_PAYLOAD_SIZE)]
    pub edns0: u16,

    /// Per-attempt timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    pub timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn query_config(&self) -> Result<QueryConfig, ConfigError> {
        let config = QueryConfig {
            nameservers: QueryConfig::parse_nameservers(&self.servers)?,
            recursive: !self.no_recurse,
            edns_payload_size: self.edns0,
            timeout: Duration::from_secs(self.timeout),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
        }
    }
}
