mod zone_source;

pub use zone_source::ZoneSource;
