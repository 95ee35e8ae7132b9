use ferrous_txt_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

/// Byte 2 of the header carries QR, Opcode, AA, TC and RD; TC is 0x02.
const TC_BIT: u8 = 0x02;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            truncated = message.truncated(),
            recursion_available = message.recursion_available(),
            "DNS response parsed"
        );

        Ok(message)
    }

    /// Reads the TC bit straight from the header.
    ///
    /// A truncated datagram may be cut mid-record and fail to parse, so the
    /// fallback decision cannot depend on a full parse.
    pub fn is_truncated(response_bytes: &[u8]) -> bool {
        response_bytes.len() >= 12 && response_bytes[2] & TC_BIT != 0
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
