//! Directory-backed key/value storage.
//!
//! Each key maps to `<dir>/<escaped key>.json`. Keys are escaped byte-wise so
//! any survey name (spaces, `:`, `/`, non-ASCII) yields a single safe file
//! name. Escaped names that would not fit a file system's 255-byte limit are
//! cut short and suffixed with a digest of the full key. Writes go to a temporary sibling first and are renamed into place,
//! so a crash never leaves a half-written record.

use pollstream_application::{DraftStorage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Longest escaped stem kept verbatim; leaves room for `.json.tmp`.
const MAX_STEM: usize = 200;

/// Bytes of the escaped key kept in front of the digest for long keys.
const PREFIX_LEN: usize = 160;

/// File-per-key draft storage
pub struct FileDraftStorage {
    dir: PathBuf,
}

impl FileDraftStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }
}

impl DraftStorage for FileDraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// File name (without extension) for `key`: the escaped key, or for long
/// keys an escaped prefix plus `~` and a 64-bit digest. `~` is always escaped
/// inside keys, so the two forms never collide.
fn file_stem(key: &str) -> String {
    let escaped = escape_key(key);
    if escaped.len() <= MAX_STEM {
        return escaped;
    }
    // Escaped text is pure ASCII, so any byte offset is a char boundary.
    format!("{}~{:016x}", &escaped[..PREFIX_LEN], fnv1a(key.as_bytes()))
}

/// FNV-1a, 64-bit. Stable across builds, unlike `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}

/// Escape everything outside `[A-Za-z0-9_-]` as `%XX` per UTF-8 byte.
fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}
