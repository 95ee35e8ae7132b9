#![allow(dead_code, unused_imports)]

mod dns_server_mock;
mod responses;

pub use dns_server_mock::{MockDnsServer, TcpBehavior, UdpBehavior};
pub use mock_transport::{Attempt, MockConnector, Scripted};
pub use responses::{answer_texts, reply_to};
