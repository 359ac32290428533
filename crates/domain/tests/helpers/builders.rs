#![allow(dead_code)]
use ferrous_zones_domain::{Domain, Record, RecordData, RecordName, RecordType, TxtData, Zone};
use std::net::IpAddr;
use std::str::FromStr;

pub struct ZoneBuilder {
    authority: String,
    default_ttl: Option<u32>,
    records: Vec<Record>,
}

impl ZoneBuilder {
    pub fn new(authority: &str) -> Self {
        Self {
            authority: authority.to_string(),
            default_ttl: None,
            records: Vec::new(),
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    pub fn a(self, name: &str, ip: &str) -> Self {
        self.record(RecordBuilder::new(name).address(ip).build())
    }

    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn build(self) -> Zone {
        let authority = Domain::new(&self.authority).unwrap();
        let mut zone = Zone::new(authority, self.default_ttl).unwrap();
        for record in self.records {
            zone.insert(record).unwrap();
        }
        zone
    }
}

pub struct RecordBuilder {
    name: String,
    record_type: RecordType,
    data: RecordData,
    ttl: Option<u32>,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: RecordType::A,
            data: RecordData::Address(IpAddr::from_str("192.0.2.1").unwrap()),
            ttl: None,
        }
    }

    pub fn address(mut self, ip: &str) -> Self {
        let addr = IpAddr::from_str(ip).unwrap();
        self.record_type = if addr.is_ipv4() {
            RecordType::A
        } else {
            RecordType::AAAA
        };
        self.data = RecordData::Address(addr);
        self
    }

    pub fn target(mut self, record_type: RecordType, target: &str) -> Self {
        self.record_type = record_type;
        self.data = RecordData::Target(Domain::new(target).unwrap());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.record_type = RecordType::TXT;
        self.data = RecordData::Text(TxtData::new(text));
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn build(self) -> Record {
        Record::new(
            RecordName::new(&self.name).unwrap(),
            self.record_type,
            self.data,
            self.ttl,
        )
        .unwrap()
    }
}
