//! DNS Message Builder
//!
//! Turns a `QueryRequest` into a wire-format query using `hickory-proto`.
//! The same bytes are reused verbatim when a UDP attempt falls back to TCP.

use super::record_type_map::RecordTypeMapper;
use ferrous_txt_domain::{DomainError, QueryRequest};
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Root owner (1) + TYPE (2) + CLASS (2) + TTL (4) + RDLENGTH (2), no options.
const OPT_RECORD_LEN: usize = 11;
const OPT_TYPE: u16 = 41;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the query message for a request
    ///
    /// - Random ID for request/response matching
    /// - RD flag as requested
    /// - Single IN-class question
    /// - One EDNS0 OPT record when a payload size is set, DNSSEC OK cleared
    pub fn build(request: &QueryRequest) -> Result<Message, DomainError> {
        let name = Name::from_str(&request.name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", request.name, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(&request.record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(request.recursion_desired);
        message.add_query(query);

        if request.edns_enabled() {
            let mut edns = Edns::new();
            edns.set_max_payload(request.edns_payload_size);
            edns.set_dnssec_ok(false);
            message.set_edns(edns);
        }

        Ok(message)
    }

    /// Build a query and serialize it, returning the message ID alongside the bytes
    pub fn build_query(request: &QueryRequest) -> Result<(u16, Vec<u8>), DomainError> {
        let message = Self::build(request)?;
        let mut bytes = Self::serialize_message(&message)?;

        if request.edns_enabled() {
            Self::write_payload_size(&mut bytes, request.edns_payload_size)?;
        }

        Ok((message.id(), bytes))
    }

    /// Writes the UDP payload size into the CLASS field of the trailing OPT record.
    ///
    /// hickory raises any payload below 512 to 512; the size on the wire must be
    /// exactly the one requested.
    fn write_payload_size(bytes: &mut [u8], size: u16) -> Result<(), DomainError> {
        let opt = bytes
            .len()
            .checked_sub(OPT_RECORD_LEN)
            .filter(|&opt| {
                bytes[opt] == 0
                    && u16::from_be_bytes([bytes[opt + 1], bytes[opt + 2]]) == OPT_TYPE
                    && bytes[opt + 9..opt + 11] == [0, 0]
            })
            .ok_or_else(|| {
                DomainError::InvalidDomainName(
                    "Failed to serialize DNS message: EDNS0 OPT record not found".to_string(),
                )
            })?;

        bytes[opt + 3..opt + 5].copy_from_slice(&size.to_be_bytes());
        Ok(())
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
