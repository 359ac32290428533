use crate::{Domain, RecordName, RecordType};
use std::net::IpAddr;
use thiserror::Error;

/// Why a piece of text is not a valid domain or record name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("name is {0} characters long (maximum is 253)")]
    TooLong(usize),

    #[error("{0:?} contains an empty label")]
    EmptyLabel(String),

    #[error("label {0:?} exceeds 63 characters")]
    LabelTooLong(String),

    #[error("label {0:?} starts with a hyphen")]
    LeadingHyphen(String),

    #[error("label {0:?} ends with a hyphen")]
    TrailingHyphen(String),

    #[error("label {label:?} contains invalid character {ch:?}")]
    InvalidCharacter { label: String, ch: char },

    #[error("wildcard is only allowed as the leftmost label")]
    MisplacedWildcard,

    #[error("{0} is an FQDN - names relative to the zone are allowed only")]
    FullyQualified(String),
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("unterminated quoted string: hit end of input")]
    UnterminatedQuote,

    #[error("line ends inside a quoted string")]
    LineBreakInQuote,

    #[error("escape character at end of input")]
    DanglingEscape,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Expected {expected}, got: {found}")]
    Expected {
        expected: &'static str,
        found: String,
    },

    #[error("{name} is an invalid record name: {reason}")]
    InvalidRecordName { name: String, reason: NameError },

    #[error("{name} is not a valid domain: {reason}")]
    InvalidDomain { name: String, reason: NameError },

    #[error("Zone domain cannot be the apex placeholder @")]
    ApexAuthority,

    #[error("TTL value cannot be <=0, got {0}")]
    NonPositiveTtl(i64),

    #[error("TTL value {0} exceeds the maximum of {max}", max = u32::MAX)]
    TtlOutOfRange(i64),

    #[error("{record_type} record requires an {expected} address, got {address}")]
    AddressFamily {
        record_type: RecordType,
        expected: &'static str,
        address: IpAddr,
    },

    #[error("{record_type} record cannot carry {found} data")]
    DataMismatch {
        record_type: RecordType,
        found: &'static str,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("zone domain already specified for this zone ({0})")]
    DuplicateAuthority(Domain),

    #[error("default ttl already specified for this zone ({0})")]
    DuplicateDefaultTtl(u32),

    #[error("no zone domain specified (missing `zone` line)")]
    MissingAuthority,

    #[error("duplicate {record_type} record for {name}")]
    DuplicateRecord {
        name: RecordName,
        record_type: RecordType,
    },
}

#[derive(Error, Debug)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// A zone file failure, positioned as `<label>:<line>`.
#[derive(Error, Debug)]
#[error("{label}:{line} {kind}")]
pub struct ParseError {
    pub label: String,
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(label: impl Into<String>, line: usize, kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            label: label.into(),
            line,
            kind: kind.into(),
        }
    }

    pub fn is_scan(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Scan(_))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Syntax(_))
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Semantic(_))
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Duplicate zone: {0}")]
    DuplicateZone(Domain),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to read zone source {path}: {message}")]
    ZoneSourceError { path: String, message: String },
}
