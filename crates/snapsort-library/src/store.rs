//! The photo-storage service.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::capture::is_image_path;
use crate::{FavoritesIndex, PhotoEntry, Result, StorageError};

/// Extension every accepted photo is stored under.
pub const STORED_EXTENSION: &str = "jpg";

/// Name of the favorites index inside the library directory.
pub const FAVORITES_FILE: &str = "favorites.json";

/// Lookup order when several files share an id.
const LOOKUP_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Owner of the photo collection. The gesture engine only signals intent
/// through these calls and never mutates entries itself.
pub trait PhotoStore {
    /// Copy a captured still into the library.
    fn accept(&mut self, source: &Path) -> Result<PhotoEntry>;

    /// Remove a photo. Removing an already-missing photo succeeds.
    fn reject(&mut self, id: &str) -> Result<()>;

    /// Flip the favorite flag; returns the new state.
    fn toggle_favorite(&mut self, id: &str) -> Result<bool>;

    /// All photos, newest first.
    fn list(&mut self) -> Result<Vec<PhotoEntry>>;

    fn get(&mut self, id: &str) -> Result<PhotoEntry> {
        self.list()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StorageError::NotFound { id: id.to_owned() })
    }
}

/// Library backed by a directory of `<created_at_millis>.jpg` files.
pub struct FsPhotoStore {
    directory: PathBuf,
    favorites: Option<FavoritesIndex>,
}

impl FsPhotoStore {
    /// The directory is created lazily on first use.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            favorites: None,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|err| StorageError::io(&self.directory, err))
    }

    fn favorites(&mut self) -> Result<&mut FavoritesIndex> {
        let index = match self.favorites.take() {
            Some(index) => index,
            None => FavoritesIndex::load(self.directory.join(FAVORITES_FILE))?,
        };
        Ok(self.favorites.insert(index))
    }

    /// Path of the stored file for `id`, whatever image extension it has.
    fn locate(&self, id: &str) -> Option<PathBuf> {
        LOOKUP_EXTENSIONS
            .iter()
            .map(|ext| self.directory.join(format!("{id}.{ext}")))
            .find(|path| path.is_file())
    }

    fn read_entry(&self, path: PathBuf, favorites: &FavoritesIndex) -> Option<PhotoEntry> {
        let id = path.file_stem()?.to_str()?.to_owned();
        let created_at = id
            .parse::<i64>()
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .or_else(|| {
                let modified = fs::metadata(&path).and_then(|meta| meta.modified()).ok()?;
                Some(DateTime::<Utc>::from(modified))
            })
            .unwrap_or_else(Utc::now);
        Some(PhotoEntry {
            is_favorite: favorites.contains(&id),
            id,
            storage_uri: path,
            created_at,
        })
    }
}

impl PhotoStore for FsPhotoStore {
    fn accept(&mut self, source: &Path) -> Result<PhotoEntry> {
        if !source.is_file() {
            return Err(StorageError::InvalidSource {
                path: source.to_path_buf(),
            });
        }
        self.ensure_directory()?;

        let mut millis = Utc::now().timestamp_millis();
        while self.locate(&millis.to_string()).is_some() {
            millis += 1;
        }
        let id = millis.to_string();
        let destination = self.directory.join(format!("{id}.{STORED_EXTENSION}"));
        fs::copy(source, &destination).map_err(|err| StorageError::io(&destination, err))?;

        let created_at = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(Utc::now);
        log::debug!("accepted {} as {}", source.display(), destination.display());
        Ok(PhotoEntry {
            id,
            storage_uri: destination,
            created_at,
            is_favorite: false,
        })
    }

    fn reject(&mut self, id: &str) -> Result<()> {
        if let Some(path) = self.locate(id) {
            match fs::remove_file(&path) {
                Ok(()) => log::debug!("removed {}", path.display()),
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(StorageError::io(&path, err)),
            }
        }
        self.favorites()?.remove(id)
    }

    fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        if self.locate(id).is_none() {
            return Err(StorageError::NotFound { id: id.to_owned() });
        }
        self.favorites()?.toggle(id)
    }

    fn list(&mut self) -> Result<Vec<PhotoEntry>> {
        self.ensure_directory()?;
        let directory = self.directory.clone();
        let read_dir = fs::read_dir(&directory).map_err(|err| StorageError::io(&directory, err))?;

        let mut paths = Vec::new();
        for dir_entry in read_dir {
            let path = dir_entry
                .map_err(|err| StorageError::io(&directory, err))?
                .path();
            if path.is_file() && is_image_path(&path) {
                paths.push(path);
            }
        }

        // One entry per id, using the file `locate` resolves to.
        paths.sort_by_cached_key(|path| (stem(path), lookup_rank(path)));
        paths.dedup_by(|later, kept| stem(later) == stem(kept));

        let favorites = self.favorites()?.clone();
        let mut entries: Vec<PhotoEntry> = paths
            .into_iter()
            .filter_map(|path| self.read_entry(path, &favorites))
            .collect();
        entries.sort_by(PhotoEntry::newest_first);
        Ok(entries)
    }
}

fn stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
}

fn lookup_rank(path: &Path) -> usize {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| LOOKUP_EXTENSIONS.iter().position(|known| *known == ext))
        .unwrap_or(LOOKUP_EXTENSIONS.len())
}
