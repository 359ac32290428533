use ferrous_zones_domain::{DomainError, ZoneRegistry, ZoneRegistryBuilder};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::ports::ZoneSource;

pub struct LoadZonesUseCase {
    source: Arc<dyn ZoneSource>,
}

impl LoadZonesUseCase {
    pub fn new(source: Arc<dyn ZoneSource>) -> Self {
        Self { source }
    }

    /// Loads every zone from the source into a frozen registry.
    ///
    /// Zones are inserted one at a time on the calling thread, so the
    /// duplicate authority check does not depend on how the source parsed
    /// them. Nothing is returned if any zone fails to parse or collides.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub fn execute(&self) -> Result<ZoneRegistry, DomainError> {
        let zones = self.source.load_zones().map_err(|e| {
            error!(error = %e, "Failed to load zones");
            e
        })?;

        let mut builder = ZoneRegistryBuilder::with_capacity(zones.len());
        for zone in zones {
            let authority = zone.authority().clone();
            let records = zone.record_count();
            if let Err(e) = builder.insert(zone) {
                error!(authority = %authority, "Duplicate zone authority");
                return Err(e);
            }
            debug!(authority = %authority, records, "Zone registered");
        }

        let registry = builder.build();
        info!(zones = registry.len(), "Zone registry built");
        Ok(registry)
    }
}
