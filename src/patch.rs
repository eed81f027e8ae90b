use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::file::File;

/// The kind of change a patch describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatchOp {
    Create,
    Delete,
}

/// A single create/delete change record between two directory snapshots.
///
/// The patch owns its own copy of the referenced [`File`] and all path
/// strings, so it outlives whatever produced them. Cloning yields a fully
/// independent copy; an already-computed digest is copied verbatim, never
/// recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patch {
    path: String,
    virtual_path: String,
    file: File,
    op: PatchOp,
    digest: Option<String>,
}

impl Patch {
    /// Create a patch for `file`, discovered under the `path` root, re-rooted
    /// under `alias` for remote consumers.
    ///
    /// The virtual path is `alias` plus the file's name relative to `path`,
    /// with exactly one separator between them. No `..`/`.` normalization is
    /// performed; the caller supplies a well-formed alias.
    ///
    /// # Panics
    ///
    /// Panics if the file's name relative to `path` is absolute, which means
    /// the caller paired the wrong root with the file.
    pub fn new(path: &str, file: &File, op: PatchOp, alias: &str) -> Patch {
        let filename = file.name(path);
        assert!(
            !filename.starts_with('/'),
            "file {} is not relative to root {}",
            file.path(),
            path
        );
        let virtual_path = if alias.ends_with('/') {
            format!("{alias}{filename}")
        } else {
            format!("{alias}/{filename}")
        };
        Patch {
            path: path.to_string(),
            virtual_path,
            file: file.clone(),
            op,
            digest: None,
        }
    }

    /// The real directory root this patch was created against.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The file this patch refers to.
    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn op(&self) -> PatchOp {
        self.op
    }

    /// The path a remote consumer should address this file under.
    pub fn virtual_path(&self) -> &str {
        &self.virtual_path
    }

    /// The cached content digest, if [`ensure_digest`](Patch::ensure_digest)
    /// has computed one. Delete patches never carry a digest.
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Compute and cache the file's content digest.
    ///
    /// No-op for `Delete` patches and for patches whose digest is already
    /// set, so a diffing pass can build large patch lists cheaply and hash
    /// only the patches a consumer actually needs to deduplicate or
    /// transmit. On failure the digest stays unset and the call can be
    /// retried.
    pub fn ensure_digest(&mut self) -> Result<()> {
        if self.op == PatchOp::Create && self.digest.is_none() {
            self.digest = Some(self.file.digest()?);
        }
        Ok(())
    }
}
