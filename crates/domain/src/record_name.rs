use crate::domain_name::{validate_relative, APEX};
use crate::errors::NameError;
use crate::Domain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const WILDCARD: &str = "*";

/// Owner name of a record, relative to the zone it lives in.
///
/// Accepted forms: `@`, `*`, `*.label(.label)*` and `label(.label)*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordName(Arc<str>);

impl RecordName {
    pub fn new(name: &str) -> Result<Self, NameError> {
        if name == APEX || name == WILDCARD {
            return Ok(Self(Arc::from(name)));
        }

        if name.ends_with('.') {
            return Err(NameError::FullyQualified(name.to_string()));
        }

        Self::validate(name)?;
        Ok(Self(Arc::from(name.to_ascii_lowercase())))
    }

    fn validate(name: &str) -> Result<(), NameError> {
        let rest = name.strip_prefix("*.").unwrap_or(name);
        if rest.split('.').any(|label| label == WILDCARD) {
            return Err(NameError::MisplacedWildcard);
        }
        validate_relative(rest)
    }

    pub fn apex() -> Self {
        Self(Arc::from(APEX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_apex(&self) -> bool {
        &*self.0 == APEX
    }

    pub fn is_wildcard(&self) -> bool {
        &*self.0 == WILDCARD || self.0.starts_with("*.")
    }

    /// Absolute owner name of this record under `authority`.
    pub fn qualify(&self, authority: &Domain) -> String {
        let authority = authority.to_fqdn();
        if self.is_apex() {
            authority.to_string()
        } else {
            format!("{}.{}", self.0, authority)
        }
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<RecordName> for String {
    fn from(name: RecordName) -> Self {
        name.0.to_string()
    }
}
