//! Single-record credential storage.
//!
//! The record is one plain-text line holding the raw secret, with no
//! trailing newline and no metadata.

use crate::constants;
use crate::core::error::StoreError;
use crate::util::fs as gate_fs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use zeroize::Zeroizing;

#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True iff the record is a regular file with content.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false)
    }

    /// Replace the record with `secret`.
    ///
    /// Writes a sibling temp file and renames it over the record, so a failed
    /// write leaves the previous record untouched. The record is a single
    /// line, so secrets containing `\n` or `\r` are refused.
    pub fn save(&self, secret: &str) -> Result<(), StoreError> {
        if !is_single_line(secret) {
            return Err(StoreError::LineBreak {
                path: self.path.clone(),
            });
        }
        self.write_atomic(secret).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), len = secret.len(), "credential record written");
        Ok(())
    }

    /// Return the first line of the record. An empty record yields an empty string.
    pub fn load(&self) -> Result<Zeroizing<String>, StoreError> {
        let content = Zeroizing::new(fs::read_to_string(&self.path).map_err(|source| {
            StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            }
        })?);
        let line = content.split('\n').next().unwrap_or_default();
        tracing::debug!(path = %self.path.display(), "credential record read");
        Ok(Zeroizing::new(line.to_string()))
    }

    fn write_atomic(&self, secret: &str) -> io::Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        gate_fs::ensure_dir(parent, constants::STORE_DIR_MODE)?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".passgate-")
            .tempfile_in(parent)?;
        tmp.write_all(secret.as_bytes())?;
        tmp.flush()?;
        gate_fs::set_file_permissions(tmp.as_file(), constants::STORE_FILE_MODE)?;
        persist(tmp, &self.path)
    }
}

/// True when `secret` fits the one-line record layout.
pub fn is_single_line(secret: &str) -> bool {
    !secret.contains(['\n', '\r'])
}

fn persist(tmp: NamedTempFile, path: &Path) -> io::Result<()> {
    tmp.persist(path).map(|_| ()).map_err(|err| err.error)
}
