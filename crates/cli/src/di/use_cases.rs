use ferrous_zones_application::use_cases::{FindAuthorityUseCase, LoadZonesUseCase};
use ferrous_zones_domain::{Config, DomainError, ZoneRegistry};
use ferrous_zones_infrastructure::FileZoneSource;
use std::sync::Arc;

pub struct UseCases {
    pub registry: Arc<ZoneRegistry>,
    pub find_authority: Arc<FindAuthorityUseCase>,
}

impl UseCases {
    /// Loads the configured zone directory and wires the query use cases to
    /// the resulting registry.
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let source = Arc::new(FileZoneSource::new(config.zones.clone()));
        let registry = Arc::new(LoadZonesUseCase::new(source).execute()?);

        Ok(Self {
            find_authority: Arc::new(FindAuthorityUseCase::new(registry.clone())),
            registry,
        })
    }
}
