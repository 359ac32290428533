use ferrous_zones_domain::ZonesConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Returns the resolved, absolute paths of every zone file found under
/// `dir`, sorted and without duplicates.
///
/// Hidden entries (leading `.`) are skipped. Symlinked files are resolved
/// to their target unless `follow_symlinks` is off, in which case they are
/// ignored. Symlinked directories are never descended into.
pub fn discover_zone_files(dir: &Path, config: &ZonesConfig) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(dir, config, &mut files)?;
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk(dir: &Path, config: &ZonesConfig, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if is_hidden(&path) {
            trace!(path = %path.display(), "Skipping hidden entry");
            continue;
        }

        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(&path, config, files)?;
            continue;
        }
        if file_type.is_symlink() && (!config.follow_symlinks || fs::metadata(&path)?.is_dir())
        {
            trace!(path = %path.display(), "Skipping symlink");
            continue;
        }

        if !config.accepts_extension(path.extension().and_then(|ext| ext.to_str())) {
            trace!(path = %path.display(), "Skipping file with unlisted extension");
            continue;
        }

        files.push(fs::canonicalize(&path)?);
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
