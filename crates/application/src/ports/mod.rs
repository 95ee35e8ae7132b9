mod query_exchange;

pub use query_exchange::{QueryExchange, QueryResponse};

// Re-export for convenience
pub use ferrous_txt_domain::{NameserverTarget, QueryRequest};
