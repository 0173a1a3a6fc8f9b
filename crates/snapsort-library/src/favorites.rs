//! Persistent set of favorite photo ids.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Result, StorageError};

/// Favorites stored as a JSON array of ids next to the photos.
#[derive(Debug, Clone)]
pub struct FavoritesIndex {
    path: PathBuf,
    ids: BTreeSet<String>,
}

impl FavoritesIndex {
    /// Load the index; a missing file means no favorites.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let ids = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<BTreeSet<String>>(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeSet::new(),
            Err(err) => return Err(StorageError::io(&path, err)),
        };
        Ok(Self { path, ids })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip `id` and persist. Returns the new favorite state. The index is
    /// unchanged when the write fails.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let mut ids = self.ids.clone();
        let now_favorite = if ids.remove(id) {
            false
        } else {
            ids.insert(id.to_owned());
            true
        };
        self.commit(ids)?;
        Ok(now_favorite)
    }

    /// Drop `id` if present, persisting only when something changed.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        if !self.ids.contains(id) {
            return Ok(());
        }
        let mut ids = self.ids.clone();
        ids.remove(id);
        self.commit(ids)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, ids: BTreeSet<String>) -> Result<()> {
        let json = serde_json::to_vec_pretty(&ids)?;
        fs::write(&self.path, json).map_err(|err| StorageError::io(&self.path, err))?;
        self.ids = ids;
        Ok(())
    }
}
