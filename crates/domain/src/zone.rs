use crate::errors::{SemanticError, SyntaxError};
use crate::{Domain, Record, RecordData, RecordName};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One authority domain and the records configured under it.
///
/// Records are a multimap: a name can hold several records (round-robin
/// address sets, multiple NS), but never two with the same type and data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    authority: Domain,

    #[serde(skip_serializing_if = "Option::is_none")]
    default_ttl: Option<u32>,

    records: BTreeMap<RecordName, Vec<Record>>,
}

impl Zone {
    /// Creates an empty zone. The authority is stored fully-qualified.
    pub fn new(authority: Domain, default_ttl: Option<u32>) -> Result<Self, SyntaxError> {
        if authority.is_apex() {
            return Err(SyntaxError::ApexAuthority);
        }
        if default_ttl == Some(0) {
            return Err(SyntaxError::NonPositiveTtl(0));
        }
        Ok(Self {
            authority: authority.to_fqdn(),
            default_ttl,
            records: BTreeMap::new(),
        })
    }

    pub fn insert(&mut self, record: Record) -> Result<(), SemanticError> {
        let existing = self.records.entry(record.name.clone()).or_default();
        if existing.iter().any(|r| r.same_rdata(&record)) {
            return Err(SemanticError::DuplicateRecord {
                name: record.name,
                record_type: record.record_type,
            });
        }
        existing.push(record);
        Ok(())
    }

    pub fn authority(&self) -> &Domain {
        &self.authority
    }

    pub fn default_ttl(&self) -> Option<u32> {
        self.default_ttl
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values().flatten()
    }

    pub fn records_named(&self, name: &RecordName) -> &[Record] {
        self.records.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

/// Renders the zone back into zone-file syntax.
impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "zone {}", self.authority)?;
        if let Some(ttl) = self.default_ttl {
            writeln!(f, "ttl {}", ttl)?;
        }
        for record in self.records() {
            write!(f, "{} {} ", record.name, record.record_type)?;
            match &record.data {
                RecordData::Text(text) => write!(f, "{}", quote(&text.to_text()))?,
                other => write!(f, "{}", other)?,
            }
            if let Some(ttl) = record.ttl {
                write!(f, " {}", ttl)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\' | '\n') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}
