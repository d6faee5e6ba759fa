//! Constructs DNS query messages in wire format using `hickory-proto`.

use aha_dns_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query with a random ID and a single question.
    ///
    /// Returns the ID alongside the wire bytes for response matching.
    pub fn build_query_with_id(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let query = Query::query(name, HickoryRecordType::from(record_type.to_u16()));
        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(query);

        let bytes = message.to_vec().map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok((id, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_ptr_query() {
        let (id, bytes) =
            MessageBuilder::build_query_with_id("34.216.184.93.in-addr.arpa.", RecordType::PTR)
                .unwrap();

        assert!(bytes.len() >= 12, "DNS message too short: {} bytes", bytes.len());
        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), id);
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");

        let message = Message::from_vec(&bytes).unwrap();
        assert_eq!(message.queries().len(), 1);
        assert_eq!(message.queries()[0].query_type(), HickoryRecordType::PTR);
    }

    #[test]
    fn test_unknown_type_code_preserved() {
        let (_, bytes) =
            MessageBuilder::build_query_with_id("example.com.", RecordType::Unknown(33)).unwrap();
        let message = Message::from_vec(&bytes).unwrap();
        assert_eq!(u16::from(message.queries()[0].query_type()), 33);
    }

    #[test]
    fn test_invalid_domain() {
        let long_label = "a".repeat(64);
        let result = MessageBuilder::build_query_with_id(&long_label, RecordType::A);
        assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
    }
}
