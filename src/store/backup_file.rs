//! JSON file with a rotating backup sibling.
//!
//! Every save first copies the current primary over `<name>.bak`, then
//! replaces the primary through a temp file + rename, so neither file is ever
//! left half-written. The very first save has nothing to rotate; once its
//! primary is on disk it is copied to the backup slot as the baseline.
//! Loading tries the primary, then the backup.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::Result;

pub const BACKUP_SUFFIX: &str = ".bak";

pub struct BackupFile<T> {
    path: PathBuf,
    backup_path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> BackupFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(dir: &Path, filename: &str) -> Self {
        Self {
            path: dir.join(filename),
            backup_path: dir.join(format!("{filename}{BACKUP_SUFFIX}")),
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Returns the primary's content, else the backup's, else `None`.
    /// Missing, unreadable and malformed files all count as absent.
    pub fn load(&self) -> Option<T> {
        match Self::read(&self.path) {
            Ok(value) => return Some(value),
            Err(e) if self.path.exists() => {
                tracing::warn!("Failed to load {}: {}", self.path.display(), e);
            }
            Err(_) => {}
        }

        match Self::read(&self.backup_path) {
            Ok(value) => {
                tracing::info!("Recovered {} from backup", self.path.display());
                Some(value)
            }
            Err(e) => {
                if self.backup_path.exists() {
                    tracing::warn!("Failed to load {}: {}", self.backup_path.display(), e);
                }
                None
            }
        }
    }

    pub fn save(&self, value: &T) -> Result<()> {
        let data = serde_json::to_vec_pretty(value)?;
        let had_primary = self.path.exists();

        if had_primary {
            if let Err(e) = self.rotate() {
                tracing::warn!("Failed to rotate {}: {}", self.path.display(), e);
            }
        }

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        if !had_primary {
            if let Err(e) = self.rotate() {
                tracing::warn!("Failed to seed backup {}: {}", self.backup_path.display(), e);
            }
        }
        Ok(())
    }

    /// Copies the primary over the backup.
    fn rotate(&self) -> Result<()> {
        fs::copy(&self.path, &self.backup_path)?;
        Ok(())
    }

    fn read(path: &Path) -> Result<T> {
        let content = fs::read(path)?;
        Ok(serde_json::from_slice(&content)?)
    }
}
