//! Ferrous Zones Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod record_name;
pub mod zone;
pub mod zone_registry;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ZonesConfig};
pub use dns_record::{Record, RecordData, RecordType, TxtData};
pub use domain_name::Domain;
pub use errors::{
    DomainError, NameError, ParseError, ParseErrorKind, ScanError, SemanticError, SyntaxError,
};
pub use record_name::RecordName;
pub use zone::Zone;
pub use zone_registry::{build_registry, ZoneRegistry, ZoneRegistryBuilder};
