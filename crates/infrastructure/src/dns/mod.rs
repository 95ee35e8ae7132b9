pub mod exchange;
pub mod forwarding;
pub mod transport;

pub use exchange::FallbackExchange;
pub use forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser};
pub use transport::{DirectConnector, DnsTransport, TransportConnector};
