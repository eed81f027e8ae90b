//! Directory patch primitives.
//!
//! A [`Patch`] describes one change between two snapshots of a directory
//! tree: "create this file" or "delete this file", referring to a [`File`]
//! each time. Patches carry a virtual path (the file re-rooted under a
//! caller-chosen alias, so a remote consumer addresses it independently of
//! the local scan root) and an optional, lazily computed content digest for
//! deduplication.
//!
//! This crate only models patches. Walking directories to produce them and
//! performing the actual create/delete I/O belong to the surrounding
//! synchronization system.

mod file;
mod patch;

pub use file::File;
pub use patch::{Patch, PatchOp};
