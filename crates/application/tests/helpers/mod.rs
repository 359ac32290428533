pub mod mock_zone_source;

pub use mock_zone_source::*;
