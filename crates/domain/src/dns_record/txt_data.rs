use serde::{Serialize, Serializer};
use std::fmt;

/// Longest character-string a single TXT segment can hold on the wire.
pub const MAX_SEGMENT_LEN: usize = 255;

/// TXT payload, split into segments of at most 255 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxtData(Vec<Vec<u8>>);

impl TxtData {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        if bytes.is_empty() {
            return Self(vec![Vec::new()]);
        }
        Self(bytes.chunks(MAX_SEGMENT_LEN).map(<[u8]>::to_vec).collect())
    }

    pub fn segments(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(Vec::as_slice)
    }

    pub fn segment_count(&self) -> usize {
        self.0.len()
    }

    /// Total payload size in bytes.
    pub fn len(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reassembles the segments into the original text.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.0.concat()).into_owned()
    }
}

impl fmt::Display for TxtData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Serialize for TxtData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}
