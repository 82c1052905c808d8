//! # Path Utilities

use std::{fs, io, path::Path};

/// Ensure the parent directory of `path` exists.
///
/// * Creates all missing intermediate directories.
/// * Idempotent.
/// * A no-op when `path` has no parent component.
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
