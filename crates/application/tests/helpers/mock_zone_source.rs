#![allow(dead_code)]

use ferrous_zones_application::ports::ZoneSource;
use ferrous_zones_domain::{Domain, DomainError, Record, RecordData, RecordName, RecordType, Zone};
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockZoneSource {
    zones: Mutex<Vec<Zone>>,
    fail_with: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MockZoneSource {
    pub fn new() -> Self {
        Self {
            zones: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_zones(zones: Vec<Zone>) -> Self {
        let source = Self::new();
        *source.zones.lock().unwrap() = zones;
        source
    }

    pub fn set_failure(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ZoneSource for MockZoneSource {
    fn load_zones(&self) -> Result<Vec<Zone>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(DomainError::ZoneSourceError {
                path: "mock".to_string(),
                message,
            });
        }
        Ok(self.zones.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

pub fn zone(authority: &str) -> Zone {
    Zone::new(Domain::new(authority).unwrap(), Some(300)).unwrap()
}

pub fn zone_with_host(authority: &str, host: &str, ip: &str) -> Zone {
    let mut zone = zone(authority);
    zone.insert(
        Record::new(
            RecordName::new(host).unwrap(),
            RecordType::A,
            RecordData::Address(IpAddr::from_str(ip).unwrap()),
            None,
        )
        .unwrap(),
    )
    .unwrap();
    zone
}
