//! Ferrous Zones Infrastructure Layer
pub mod zonefile;

pub use zonefile::{parse_zone, FileZoneSource};
