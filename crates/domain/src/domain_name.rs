use crate::errors::NameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Placeholder for the zone apex.
pub const APEX: &str = "@";

pub const MAX_LABEL_LEN: usize = 63;

pub const MAX_NAME_LEN: usize = 253;

/// A validated domain name such as `example.com.` or `www.example.com`.
///
/// A `Domain` can only be obtained through [`Domain::new`] (or `parse`), so
/// holding one means the text already passed label-by-label validation.
/// Letters are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Domain(Arc<str>);

impl Domain {
    pub fn new(name: &str) -> Result<Self, NameError> {
        if name == APEX {
            return Ok(Self(Arc::from(APEX)));
        }

        let relative = name.strip_suffix('.').unwrap_or(name);
        validate_relative(relative)?;

        Ok(Self(Arc::from(name.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reports whether the name ends with the root separator.
    pub fn is_fqdn(&self) -> bool {
        self.0.ends_with('.')
    }

    pub fn is_apex(&self) -> bool {
        &*self.0 == APEX
    }

    /// Returns the parent domain, e.g. `example.com` for `a.example.com`.
    ///
    /// When the domain is already a single top-level label the same
    /// domain is returned and the flag is `true`. A trailing dot is kept.
    pub fn parent(&self) -> (Domain, bool) {
        if self.is_apex() {
            return (self.clone(), true);
        }
        match self.0.split_once('.') {
            Some((_, rest)) if !rest.is_empty() => (Self(Arc::from(rest)), false),
            _ => (self.clone(), true),
        }
    }

    /// Same name with the trailing root separator.
    pub fn to_fqdn(&self) -> Domain {
        if self.is_fqdn() || self.is_apex() {
            self.clone()
        } else {
            Self(Arc::from(format!("{}.", self.0)))
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Domain {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Domain {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.0.to_string()
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates a dot-separated name with no trailing root separator.
pub(crate) fn validate_relative(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(NameError::TooLong(name.len()));
    }
    name.split('.').try_for_each(|label| validate_label(name, label))
}

pub(crate) fn validate_label(name: &str, label: &str) -> Result<(), NameError> {
    if label.is_empty() {
        return Err(NameError::EmptyLabel(name.to_string()));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(NameError::LabelTooLong(label.to_string()));
    }
    if let Some(ch) = label
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-')
    {
        return Err(NameError::InvalidCharacter {
            label: label.to_string(),
            ch,
        });
    }
    if label.starts_with('-') {
        return Err(NameError::LeadingHyphen(label.to_string()));
    }
    if label.ends_with('-') {
        return Err(NameError::TrailingHyphen(label.to_string()));
    }
    Ok(())
}
