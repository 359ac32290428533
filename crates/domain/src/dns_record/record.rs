use super::{RecordType, TxtData};
use crate::errors::SyntaxError;
use crate::{Domain, RecordName, Zone};
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Type-dependent payload of a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RecordData {
    /// A, AAAA
    Address(IpAddr),
    /// CNAME, MX, NS
    Target(Domain),
    /// TXT
    Text(TxtData),
}

impl RecordData {
    pub fn kind(&self) -> &'static str {
        match self {
            RecordData::Address(_) => "address",
            RecordData::Target(_) => "domain",
            RecordData::Text(_) => "text",
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Address(addr) => write!(f, "{}", addr),
            RecordData::Target(target) => write!(f, "{}", target),
            RecordData::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: RecordName,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub data: RecordData,

    /// Seconds; `None` falls back to the zone default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl Record {
    pub fn new(
        name: RecordName,
        record_type: RecordType,
        data: RecordData,
        ttl: Option<u32>,
    ) -> Result<Self, SyntaxError> {
        match (record_type, &data) {
            (RecordType::A, RecordData::Address(IpAddr::V4(_)))
            | (RecordType::AAAA, RecordData::Address(IpAddr::V6(_))) => {}
            (RecordType::A, RecordData::Address(address)) => {
                return Err(SyntaxError::AddressFamily {
                    record_type,
                    expected: "IPv4",
                    address: *address,
                });
            }
            (RecordType::AAAA, RecordData::Address(address)) => {
                return Err(SyntaxError::AddressFamily {
                    record_type,
                    expected: "IPv6",
                    address: *address,
                });
            }
            (RecordType::CNAME | RecordType::MX | RecordType::NS, RecordData::Target(_))
            | (RecordType::TXT, RecordData::Text(_)) => {}
            (_, other) => {
                return Err(SyntaxError::DataMismatch {
                    record_type,
                    found: other.kind(),
                });
            }
        }

        if ttl == Some(0) {
            return Err(SyntaxError::NonPositiveTtl(0));
        }

        Ok(Self {
            name,
            record_type,
            data,
            ttl,
        })
    }

    /// TTL of the record, falling back to the default of `zone` when none
    /// was specified.
    pub fn ttl_or_default(&self, zone: &Zone) -> Option<u32> {
        self.ttl.or(zone.default_ttl())
    }

    /// Same type and payload, regardless of TTL.
    pub fn same_rdata(&self, other: &Record) -> bool {
        self.record_type == other.record_type && self.data == other.data
    }
}
