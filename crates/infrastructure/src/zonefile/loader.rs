use super::discovery::discover_zone_files;
use super::parser::parse_zone;
use ferrous_zones_application::ports::ZoneSource;
use ferrous_zones_domain::{DomainError, Zone, ZonesConfig};
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads every zone file found under a directory.
pub struct FileZoneSource {
    root: PathBuf,
    config: ZonesConfig,
}

impl FileZoneSource {
    pub fn new(config: ZonesConfig) -> Self {
        Self {
            root: PathBuf::from(&config.path),
            config,
        }
    }

    /// Parses a single zone file, labelling errors with its base name.
    /// The file is closed when this returns, whether parsing succeeded or not.
    pub fn parse_file(path: &Path) -> Result<Zone, DomainError> {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file = File::open(path).map_err(|e| DomainError::ZoneSourceError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let zone = parse_zone(file, &label)?;
        debug!(
            file = %path.display(),
            authority = %zone.authority(),
            records = zone.record_count(),
            "Zone file loaded"
        );
        Ok(zone)
    }
}

impl ZoneSource for FileZoneSource {
    fn load_zones(&self) -> Result<Vec<Zone>, DomainError> {
        let files = discover_zone_files(&self.root, &self.config).map_err(|e| {
            DomainError::ZoneSourceError {
                path: self.root.display().to_string(),
                message: e.to_string(),
            }
        })?;

        info!(
            path = %self.root.display(),
            files = files.len(),
            parallel = self.config.parallel,
            "Parsing zone files"
        );

        // Results keep discovery order, so the first error reported is the
        // first failing file regardless of which thread parsed it.
        let results: Vec<Result<Zone, DomainError>> = if self.config.parallel {
            files.par_iter().map(|path| Self::parse_file(path)).collect()
        } else {
            files.iter().map(|path| Self::parse_file(path)).collect()
        };

        results.into_iter().collect()
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
