use crate::ports::{QueryExchange, QueryResponse};
use ferrous_txt_domain::{DomainError, NameserverTarget, QueryRequest, RecordType};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Walks an ordered nameserver list until one of them returns a non-empty answer.
///
/// When recursion was requested and a server reports that it does not offer it,
/// that server is asked once more without the RD flag before moving on. The
/// downgraded attempt never downgrades again.
///
/// If no server produces an answer, the outcome of the last attempt is returned,
/// whether it is an empty response or an error.
pub struct ResolveTxtUseCase {
    exchange: Arc<dyn QueryExchange>,
    edns_payload_size: u16,
}

impl ResolveTxtUseCase {
    pub fn new(exchange: Arc<dyn QueryExchange>, edns_payload_size: u16) -> Self {
        Self {
            exchange,
            edns_payload_size,
        }
    }

    pub async fn execute(
        &self,
        name: &str,
        record_type: RecordType,
        nameservers: &[NameserverTarget],
        recursive: bool,
    ) -> Result<QueryResponse, DomainError> {
        let mut outcome = Err(DomainError::NoNameservers);

        for (index, server) in nameservers.iter().enumerate() {
            outcome = self.query(name, record_type, server, recursive).await;
            if has_answers(&outcome) {
                debug!(server = %server, position = index, "Answer received");
                return outcome;
            }

            let downgrade = match &outcome {
                Ok(response) => recursive && !response.recursion_available(),
                Err(e) => {
                    warn!(server = %server, error = %e, position = index, "Query failed");
                    false
                }
            };

            if downgrade {
                warn!(server = %server, "Recursion unavailable");
                info!(server = %server, domain = %name, "Retrying without recursion");

                outcome = self.query(name, record_type, server, false).await;
                if has_answers(&outcome) {
                    return outcome;
                }
                if let Err(e) = &outcome {
                    warn!(server = %server, error = %e, "Non-recursive retry failed");
                }
            }

            debug!(server = %server, position = index, "No answer, moving on");
        }

        outcome
    }

    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        server: &NameserverTarget,
        recursive: bool,
    ) -> Result<QueryResponse, DomainError> {
        let request = QueryRequest::new(name, record_type, recursive, self.edns_payload_size);
        debug!(
            domain = %request.name,
            record_type = %record_type,
            recursive = recursive,
            edns = self.edns_payload_size,
            server = %server,
            "Sending query"
        );
        self.exchange.exchange(&request, server).await
    }
}

fn has_answers(outcome: &Result<QueryResponse, DomainError>) -> bool {
    matches!(outcome, Ok(response) if response.has_answers())
}
