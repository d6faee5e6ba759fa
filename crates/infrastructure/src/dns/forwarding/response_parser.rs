use aha_dns_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a response and hand back its answer section unchanged.
    ///
    /// Any response code other than NOERROR fails with the code's name.
    pub fn parse_answers(response_bytes: &[u8], expected_id: u16) -> Result<Vec<Record>, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| DomainError::Transport {
            server: "upstream".to_string(),
            reason: format!("failed to parse DNS response: {}", e),
        })?;

        if message.id() != expected_id {
            return Err(DomainError::Transport {
                server: "upstream".to_string(),
                reason: format!(
                    "response id {} does not match query id {}",
                    message.id(),
                    expected_id
                ),
            });
        }

        let rcode = message.response_code();
        debug!(
            rcode = Self::rcode_to_status(rcode),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        if rcode != ResponseCode::NoError {
            return Err(DomainError::RawForward(
                Self::rcode_to_status(rcode).to_string(),
            ));
        }

        Ok(message.answers().to_vec())
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            _ => "UNKNOWN",
        }
    }
}
