use ferrous_zones_domain::{DomainError, Zone};

/// Port for anything that can produce parsed zones (a directory of zone
/// files, an embedded set, a test double).
pub trait ZoneSource: Send + Sync {
    /// Parses every zone the source knows about, failing on the first error.
    fn load_zones(&self) -> Result<Vec<Zone>, DomainError>;

    /// Human readable origin of the zones, used in logs.
    fn describe(&self) -> String;
}
