pub mod errors;
pub mod logging;
pub mod root;
pub mod zones;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use zones::ZonesConfig;
