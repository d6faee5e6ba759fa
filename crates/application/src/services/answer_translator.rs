//! Turns HTTPDNS answer entries into typed resource records.
//!
//! `data` grammar per type:
//! - A, AAAA, CNAME, NS: a single token
//! - TXT: a single quoted string
//! - MX: `preference exchange`
//! - SOA: `mname rname serial refresh retry expire minimum`
//! - CAA: `flag tag "value"`
//! - anything else: opaque text, returned as TXT

use aha_dns_domain::{AnswerEntry, DomainError, RecordType};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, NULL, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::warn;

/// Maximum length of one DNS character-string.
const MAX_CHARACTER_STRING: usize = 255;

const MX_FIELDS: usize = 2;
const SOA_FIELDS: usize = 7;
const CAA_FIELDS: usize = 3;

/// Removes surrounding literal quote characters. Idempotent.
pub fn strip_quotes(data: &str) -> &str {
    data.trim_matches('"')
}

pub struct AnswerTranslator;

impl AnswerTranslator {
    /// Translate one entry. The header carries the entry's name and TTL in
    /// class IN.
    pub fn translate(entry: &AnswerEntry) -> Result<Record, DomainError> {
        let name = parse_name(entry, &entry.name)?;

        let rdata = match RecordType::from_u16(entry.record_type) {
            RecordType::A => {
                let addr = Ipv4Addr::from_str(entry.data.trim())
                    .map_err(|e| malformed(entry, e.to_string()))?;
                RData::A(A(addr))
            }
            RecordType::AAAA => {
                let addr = Ipv6Addr::from_str(entry.data.trim())
                    .map_err(|e| malformed(entry, e.to_string()))?;
                RData::AAAA(AAAA(addr))
            }
            RecordType::CNAME => RData::CNAME(CNAME(parse_name(entry, entry.data.trim())?)),
            RecordType::NS => RData::NS(NS(parse_name(entry, entry.data.trim())?)),
            RecordType::MX => {
                let fields = split_fields::<MX_FIELDS>(entry)?;
                RData::MX(MX::new(
                    parse_number(entry, "preference", fields[0])?,
                    parse_name(entry, fields[1])?,
                ))
            }
            RecordType::SOA => {
                let fields = split_fields::<SOA_FIELDS>(entry)?;
                RData::SOA(SOA::new(
                    parse_name(entry, fields[0])?,
                    parse_name(entry, fields[1])?,
                    parse_number(entry, "serial", fields[2])?,
                    parse_number(entry, "refresh", fields[3])?,
                    parse_number(entry, "retry", fields[4])?,
                    parse_number(entry, "expire", fields[5])?,
                    parse_number(entry, "minimum", fields[6])?,
                ))
            }
            RecordType::CAA => caa_rdata(entry)?,
            RecordType::TXT | RecordType::PTR | RecordType::Unknown(_) => {
                RData::TXT(txt_rdata(strip_quotes(&entry.data)))
            }
        };

        Ok(Record::from_rdata(name, entry.ttl, rdata))
    }

    /// Translate every entry in order. A malformed entry is dropped with a
    /// warning and does not affect its neighbours.
    pub fn translate_all(entries: &[AnswerEntry]) -> Vec<Record> {
        entries
            .iter()
            .filter_map(|entry| match Self::translate(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        name = %entry.name,
                        record_type = entry.record_type,
                        error = %e,
                        "Skipping malformed answer record"
                    );
                    None
                }
            })
            .collect()
    }
}

fn malformed(entry: &AnswerEntry, reason: impl Into<String>) -> DomainError {
    DomainError::MalformedAnswerData {
        record_type: entry.record_type,
        data: entry.data.clone(),
        reason: reason.into(),
    }
}

fn parse_name(entry: &AnswerEntry, text: &str) -> Result<Name, DomainError> {
    let mut name =
        Name::from_utf8(text).map_err(|e| malformed(entry, format!("bad name {:?}: {}", text, e)))?;
    name.set_fqdn(true);
    Ok(name)
}

fn parse_number<T: FromStr>(entry: &AnswerEntry, field: &str, text: &str) -> Result<T, DomainError> {
    text.parse()
        .map_err(|_| malformed(entry, format!("{} is not a number: {:?}", field, text)))
}

/// Splits `data` into exactly `N` whitespace-separated tokens.
fn split_fields<const N: usize>(entry: &AnswerEntry) -> Result<[&str; N], DomainError> {
    let tokens: Vec<&str> = entry.data.split_whitespace().collect();
    tokens
        .try_into()
        .map_err(|tokens: Vec<&str>| {
            malformed(entry, format!("expected {} fields, found {}", N, tokens.len()))
        })
}

fn txt_rdata(text: &str) -> TXT {
    if text.is_empty() {
        return TXT::from_bytes(vec![b"".as_slice()]);
    }
    TXT::from_bytes(text.as_bytes().chunks(MAX_CHARACTER_STRING).collect())
}

/// CAA is carried as raw RDATA so the upstream's flag byte, tag and value
/// reach the client exactly as given.
fn caa_rdata(entry: &AnswerEntry) -> Result<RData, DomainError> {
    // A quoted value may itself contain spaces, so only the first two
    // separators count.
    let (flag, tag, value) = entry
        .data
        .trim()
        .split_once(char::is_whitespace)
        .and_then(|(flag, rest)| {
            let (tag, value) = rest.trim_start().split_once(char::is_whitespace)?;
            Some((flag, tag, value.trim()))
        })
        .ok_or_else(|| {
            let found = entry.data.split_whitespace().count();
            malformed(
                entry,
                format!("expected {} fields, found {}", CAA_FIELDS, found),
            )
        })?;

    // Only a quote-wrapped value may span several tokens.
    let quoted = value.len() >= 2 && value.starts_with('"') && value.ends_with('"');
    if !quoted && value.contains(char::is_whitespace) {
        let found = entry.data.split_whitespace().count();
        return Err(malformed(
            entry,
            format!("expected {} fields, found {}", CAA_FIELDS, found),
        ));
    }

    let flag: u8 = parse_number(entry, "flag", flag)?;
    // RFC 8659 §4.1: tags are 1-15 ASCII letters and digits.
    if tag.len() > 15 || !tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(malformed(entry, format!("invalid CAA tag {:?}", tag)));
    }
    let value = strip_quotes(value);

    let mut wire = Vec::with_capacity(2 + tag.len() + value.len());
    wire.push(flag);
    wire.push(tag.len() as u8);
    wire.extend_from_slice(tag.as_bytes());
    wire.extend_from_slice(value.as_bytes());

    Ok(RData::Unknown {
        code: HickoryRecordType::CAA,
        rdata: NULL::with(wire),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes_idempotent() {
        assert_eq!(strip_quotes("\"hello world\""), "hello world");
        assert_eq!(strip_quotes(strip_quotes("\"hello world\"")), "hello world");
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn test_split_fields_exact_arity() {
        let entry = AnswerEntry::new("a.", 1, 15, "10 mail.a.");
        assert_eq!(split_fields::<2>(&entry).unwrap(), ["10", "mail.a."]);

        let short = AnswerEntry::new("a.", 1, 15, "mail.a.");
        assert!(split_fields::<2>(&short).is_err());

        let long = AnswerEntry::new("a.", 1, 15, "10 mail.a. extra");
        assert!(split_fields::<2>(&long).is_err());
    }

    #[test]
    fn test_long_txt_split_into_character_strings() {
        let text = "x".repeat(600);
        let txt = txt_rdata(&text);
        let lens: Vec<usize> = txt.txt_data().iter().map(|s| s.len()).collect();
        assert_eq!(lens, vec![255, 255, 90]);
    }
}
