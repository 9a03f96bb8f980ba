//! Hashing System - SHA-256 over generated output
//!
//! Two runs with the same configuration and catalog must produce the same
//! digest.

use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Digest of every regular file under `root`, in sorted path order.
///
/// Each file contributes its `/`-separated relative path, a NUL, its bytes
/// and another NUL, so renames change the digest as well as edits.
pub fn digest_tree(root: &Path) -> io::Result<String> {
    let mut hasher = Sha256::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(io::Error::other)?;
        let key = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        hasher.update(key.as_bytes());
        hasher.update([0u8]);
        hasher.update(fs::read(entry.path())?);
        hasher.update([0u8]);
    }

    Ok(to_hex(&hasher.finalize()))
}

fn to_hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_lowercase_hex() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.json"), "{}").unwrap();
        let digest = digest_tree(dir.path()).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_tree_digest_tracks_content_and_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/one.svg"), "1").unwrap();
        fs::write(dir.path().join("index.json"), "{}").unwrap();

        let first = digest_tree(dir.path()).unwrap();
        assert_eq!(first, digest_tree(dir.path()).unwrap());

        fs::write(dir.path().join("a/b/one.svg"), "2").unwrap();
        let edited = digest_tree(dir.path()).unwrap();
        assert_ne!(first, edited);

        fs::rename(dir.path().join("a/b/one.svg"), dir.path().join("a/b/two.svg")).unwrap();
        assert_ne!(edited, digest_tree(dir.path()).unwrap());
    }

    #[test]
    fn test_empty_directories_do_not_count() {
        let dir = tempfile::tempdir().unwrap();
        let before = digest_tree(dir.path()).unwrap();
        fs::create_dir_all(dir.path().join("empty/nested")).unwrap();
        assert_eq!(before, digest_tree(dir.path()).unwrap());
    }
}
