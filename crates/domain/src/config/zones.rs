use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZonesConfig {
    /// Directory searched recursively for zone files
    #[serde(default = "default_zones_path")]
    pub path: String,

    /// File extensions to load (without the dot); empty loads every file
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Resolve symlinked zone files to their real location
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    /// Parse zone files on the rayon thread pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl ZonesConfig {
    /// Whether a file with the given extension should be loaded.
    pub fn accepts_extension(&self, extension: Option<&str>) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        match extension {
            Some(ext) => self
                .extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            path: default_zones_path(),
            extensions: Vec::new(),
            follow_symlinks: true,
            parallel: true,
        }
    }
}

fn default_zones_path() -> String {
    "zones".to_string()
}

fn default_true() -> bool {
    true
}
