//! Mapping between `ferrous_txt_domain::RecordType` and `hickory_proto::rr::RecordType`

use ferrous_txt_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::TXT => HickoryRecordType::TXT,
        }
    }
}
