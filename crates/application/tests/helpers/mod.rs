#![allow(dead_code, unused_imports)]

mod mock_exchange;

pub use mock_exchange::{empty_response, server, txt_response, ExchangeCall, MockQueryExchange};
