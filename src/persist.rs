//! Disk I/O helpers: load from file and atomic write.
//!
//! The rename-over approach is close to atomic on most platforms. On NTFS
//! (Windows) it's reliable; on FAT32 or network shares there are no hard
//! guarantees. If that matters to you, keep backups or use a real database.

use crate::error::{Error, Result};
use crate::record::User;
use crate::serializer::Serializer;
use std::path::Path;

/// Reads and deserializes the file at `path`. Returns an empty collection if
/// the file is missing or empty (not an error).
pub fn load<S: Serializer>(path: &Path, serializer: &S) -> Result<Vec<User>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::Io(e.to_string())),
    };
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    serializer.deserialize(&bytes)
}

/// Write `bytes` to `<path>.tmp` and then rename over `path`. This avoids
/// leaving a half-written file if the process crashes mid-write. Creates the
/// parent directory on first write if it doesn't exist yet.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Io(e.to_string()))?;
        }
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let tmp = path.with_extension(format!("{ext}.tmp"));
    std::fs::write(&tmp, bytes).map_err(|e| Error::Io(e.to_string()))?;
    std::fs::rename(&tmp, path).map_err(|e| Error::Io(e.to_string()))?;
    Ok(())
}
