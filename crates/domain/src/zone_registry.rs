use crate::{Domain, DomainError, Zone};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

/// Mutable phase of the registry: collects zones and rejects duplicate
/// authorities. Call [`build`](Self::build) to obtain the queryable registry.
#[derive(Debug, Default)]
pub struct ZoneRegistryBuilder {
    zones: FxHashMap<Domain, Arc<Zone>>,
}

impl ZoneRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            zones: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn insert(&mut self, zone: Zone) -> Result<(), DomainError> {
        match self.zones.entry(zone.authority().clone()) {
            Entry::Occupied(entry) => Err(DomainError::DuplicateZone(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(zone));
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn build(self) -> ZoneRegistry {
        ZoneRegistry { zones: self.zones }
    }
}

/// Inserts every zone and freezes the result, failing on the first
/// duplicate authority.
pub fn build_registry<I>(zones: I) -> Result<ZoneRegistry, DomainError>
where
    I: IntoIterator<Item = Zone>,
{
    let zones = zones.into_iter();
    let mut builder = ZoneRegistryBuilder::with_capacity(zones.size_hint().0);
    for zone in zones {
        builder.insert(zone)?;
    }
    Ok(builder.build())
}

/// Read-only set of zones keyed by authority domain.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    zones: FxHashMap<Domain, Arc<Zone>>,
}

impl ZoneRegistry {
    /// Finds the most specific zone whose authority is `query` or one of its
    /// ancestors.
    ///
    /// For example `a.b.example.com.` first tries `a.b.example.com.`, then
    /// `b.example.com.`, `example.com.` and finally `com.`. Relative queries
    /// are treated as fully-qualified.
    pub fn find_authority(&self, query: &Domain) -> Option<&Arc<Zone>> {
        let mut current = query.to_fqdn();
        loop {
            if let Some(zone) = self.zones.get(&current) {
                return Some(zone);
            }
            let (parent, tld) = current.parent();
            if tld {
                return None;
            }
            current = parent;
        }
    }

    /// Exact lookup by authority.
    pub fn get(&self, authority: &Domain) -> Option<&Arc<Zone>> {
        self.zones.get(&authority.to_fqdn())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// All zones ordered by authority.
    pub fn zones(&self) -> Vec<&Arc<Zone>> {
        let mut zones: Vec<_> = self.zones.values().collect();
        zones.sort_by(|a, b| a.authority().cmp(b.authority()));
        zones
    }
}
