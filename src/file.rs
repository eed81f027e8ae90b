use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Reference to a single file under a scan root.
///
/// Stores the full path with forward slashes so relative and virtual paths
/// stay stable across platforms. Holds no open handle; every filesystem
/// access happens per call, against whatever is on disk at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    path: String,
}

impl File {
    /// Create a file reference for `name` under the `root` directory.
    pub fn new(root: &str, name: &str) -> File {
        let root = root.replace('\\', "/");
        let name = name.replace('\\', "/");
        let path = if root.ends_with('/') {
            format!("{root}{name}")
        } else {
            format!("{root}/{name}")
        };
        File { path }
    }

    /// Full stored path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Filename relative to `root`: the stored path with `root` and the
    /// separator after it stripped off. Returns the full path unchanged when
    /// `root` does not contain this file. A partial component match
    /// (`/data` vs `/database/x`) is not containment.
    pub fn name(&self, root: &str) -> &str {
        if let Some(rest) = self.path.strip_prefix(root) {
            if root.ends_with('/') {
                return rest;
            }
            if let Some(rest) = rest.strip_prefix('/') {
                return rest;
            }
        }
        &self.path
    }

    /// Whether the file currently exists on disk.
    pub fn exists(&self) -> bool {
        Path::new(&self.path).exists()
    }

    /// Hex-encoded BLAKE3 digest of the file's current contents.
    /// Uses a 256 KB BufReader to reduce syscall overhead vs the default 8 KB.
    pub fn digest(&self) -> Result<String> {
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("Failed to open file for hashing: {}", self.path))?;
        let mut reader = std::io::BufReader::with_capacity(256 * 1024, file);
        let mut hasher = blake3::Hasher::new();
        std::io::copy(&mut reader, &mut hasher)
            .with_context(|| format!("Failed to hash file: {}", self.path))?;
        Ok(hasher.finalize().to_hex().to_string())
    }
}
