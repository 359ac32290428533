use ferrous_zones_domain::{Domain, DomainError, Zone, ZoneRegistry};
use std::sync::Arc;
use tracing::debug;

pub struct FindAuthorityUseCase {
    registry: Arc<ZoneRegistry>,
}

impl FindAuthorityUseCase {
    pub fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the most specific zone governing `query`, if any.
    pub fn execute(&self, query: &str) -> Result<Option<Arc<Zone>>, DomainError> {
        let domain = Domain::new(query.trim())
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", query, e)))?;

        let zone = self.registry.find_authority(&domain).cloned();
        match &zone {
            Some(zone) => debug!(query = %domain, authority = %zone.authority(), "Authority found"),
            None => debug!(query = %domain, "No authority configured"),
        }
        Ok(zone)
    }
}
