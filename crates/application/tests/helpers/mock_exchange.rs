#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_txt_application::ports::{QueryExchange, QueryResponse};
use ferrous_txt_domain::{DomainError, NameserverTarget, QueryRequest};
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{Name, RData, Record};
use std::collections::{HashMap, VecDeque};
use std::str::FromStr;
use std::sync::Mutex;

/// One recorded call to `exchange`.
#[derive(Debug, Clone)]
pub struct ExchangeCall {
    pub server: NameserverTarget,
    pub request: QueryRequest,
}

type Script = VecDeque<Result<Message, DomainError>>;

/// Replays scripted outcomes keyed by `(server, recursion_desired)` and records every call.
///
/// A key with no remaining script yields an empty response with RA set.
pub struct MockQueryExchange {
    scripts: Mutex<HashMap<(String, bool), Script>>,
    calls: Mutex<Vec<ExchangeCall>>,
}

impl MockQueryExchange {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, server: &str, recursive: bool, message: Message) {
        self.push(server, recursive, Ok(message));
    }

    pub fn fail(&self, server: &str, recursive: bool, error: DomainError) {
        self.push(server, recursive, Err(error));
    }

    fn push(&self, server: &str, recursive: bool, outcome: Result<Message, DomainError>) {
        self.scripts
            .lock()
            .unwrap()
            .entry((server.to_string(), recursive))
            .or_default()
            .push_back(outcome);
    }

    pub fn calls(&self) -> Vec<ExchangeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, server: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.server.to_string() == server)
            .count()
    }
}

#[async_trait]
impl QueryExchange for MockQueryExchange {
    async fn exchange(
        &self,
        request: &QueryRequest,
        server: &NameserverTarget,
    ) -> Result<QueryResponse, DomainError> {
        self.calls.lock().unwrap().push(ExchangeCall {
            server: server.clone(),
            request: request.clone(),
        });

        let key = (server.to_string(), request.recursion_desired);
        let scripted = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(|script| script.pop_front());

        let message = match scripted {
            Some(outcome) => outcome?,
            None => empty_response(0, true),
        };

        Ok(QueryResponse::new(message, server.clone(), "UDP"))
    }
}

pub fn server(s: &str) -> NameserverTarget {
    s.parse().unwrap()
}

pub fn empty_response(id: u16, recursion_available: bool) -> Message {
    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    message.set_recursion_available(recursion_available);
    message
}

pub fn txt_response(id: u16, name: &str, texts: &[&str], recursion_available: bool) -> Message {
    let mut message = empty_response(id, recursion_available);
    let owner = Name::from_str(name).unwrap();
    for text in texts {
        message.add_answer(Record::from_rdata(
            owner.clone(),
            300,
            RData::TXT(TXT::new(vec![text.to_string()])),
        ));
    }
    message
}
