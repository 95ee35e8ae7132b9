use super::RecordType;
use std::sync::Arc;

/// A single outgoing question. Built once per attempt and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub recursion_desired: bool,
    /// Advertised EDNS0 UDP payload size; 0 sends no OPT record.
    pub edns_payload_size: u16,
}

impl QueryRequest {
    pub fn new(
        name: &str,
        record_type: RecordType,
        recursion_desired: bool,
        edns_payload_size: u16,
    ) -> Self {
        Self {
            name: fully_qualified(name).into(),
            record_type,
            recursion_desired,
            edns_payload_size,
        }
    }

    pub fn edns_enabled(&self) -> bool {
        self.edns_payload_size > 0
    }
}

/// Appends the root label terminator unless the name already ends with it.
pub fn fully_qualified(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
