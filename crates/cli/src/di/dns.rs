use ferrous_txt_application::ports::QueryExchange;
use ferrous_txt_application::use_cases::ResolveTxtUseCase;
use ferrous_txt_domain::QueryConfig;
use ferrous_txt_infrastructure::dns::FallbackExchange;
use std::sync::Arc;
use tracing::debug;

pub struct DnsServices {
    pub resolve_txt: ResolveTxtUseCase,
}

impl DnsServices {
    pub fn new(config: &QueryConfig) -> Self {
        debug!(
            timeout_secs = config.timeout.as_secs(),
            edns_payload_size = config.edns_payload_size,
            "Initializing DNS services"
        );

        let exchange: Arc<dyn QueryExchange> = Arc::new(FallbackExchange::new(config.timeout));

        Self {
            resolve_txt: ResolveTxtUseCase::new(exchange, config.edns_payload_size),
        }
    }
}
