use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::{DriverError, ShaderStage};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderSource {
    pub path: PathBuf,
    pub stage: ShaderStage,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DiscoveryOptions {
    pub recursive: bool,
}

impl DiscoveryOptions {
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Collects every shader source in `directory`, sorted by path.
/// Only the top level is scanned unless `options.recursive` is set.
pub fn discover_shaders(
    directory: &Path,
    options: DiscoveryOptions,
) -> Result<Vec<ShaderSource>, DriverError> {
    if !directory.is_dir() {
        return Err(DriverError::InvalidDirectory(directory.to_path_buf()));
    }

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut sources = vec![];
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
    {
        // Only failing to read the root itself is fatal.
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                warn!("Skipping {:?}: {e}", e.path());
                continue;
            }
            Err(e) => return Err(std::io::Error::from(e).into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(stage) = entry
            .path()
            .extension()
            .and_then(ShaderStage::from_extension)
        else {
            debug!("Skipping {:?}: not a shader source", entry.path());
            continue;
        };

        sources.push(ShaderSource {
            path: entry.into_path(),
            stage,
        });
    }

    sources.sort_by(|a, b| a.path.cmp(&b.path));
    info!("Found {} shader(s) in {directory:?}", sources.len());
    Ok(sources)
}
