//! # Image Assets
//!
//! Copies user-picked images into a directory the application owns, so a
//! product record never points at a file the user may later move or delete.
//!
//! ## Staging
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Image Staging                                        │
//! │                                                                         │
//! │  Picked file: /home/me/Pictures/photo.png      code: ABC123            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  create_dir_all(<assets root>)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  copy → <assets root>/ABC123_photo.png   (overwrites an older copy)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Path stored in products.image_path                                    │
//! │                                                                         │
//! │  Edit: a path that already names a live file under the root is reused  │
//! │  without copying. Delete: the copy stays on disk.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Image staging failures.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The picked file can't be read.
    #[error("Cannot read image '{path}': {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The picked path has no file name or is not a regular file.
    #[error("'{path}' is not an image file")]
    InvalidSource { path: PathBuf },

    /// The asset directory or the copy can't be written.
    #[error("Cannot write image to '{path}': {source}")]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// The managed image directory.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// the first copy.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AssetStore { root: root.into() }
    }

    /// The managed directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name a source is staged under: `{code}_{original_basename}`.
    pub fn asset_name(code: &str, source: &Path) -> AssetResult<String> {
        let base = source
            .file_name()
            .ok_or_else(|| AssetError::InvalidSource {
                path: source.to_path_buf(),
            })?;
        Ok(format!("{}_{}", code, base.to_string_lossy()))
    }

    /// Copies `source` into the managed directory and returns the new path.
    ///
    /// Re-staging the same code and basename overwrites the earlier copy.
    pub async fn store(&self, code: &str, source: impl AsRef<Path>) -> AssetResult<PathBuf> {
        let source = source.as_ref();
        let name = Self::asset_name(code, source)?;

        let metadata =
            tokio::fs::metadata(source)
                .await
                .map_err(|e| AssetError::SourceUnreadable {
                    path: source.to_path_buf(),
                    source: e,
                })?;
        if !metadata.is_file() {
            return Err(AssetError::InvalidSource {
                path: source.to_path_buf(),
            });
        }

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AssetError::DestinationUnwritable {
                path: self.root.clone(),
                source: e,
            })?;

        let dest = self.root.join(name);
        let bytes = tokio::fs::copy(source, &dest)
            .await
            .map_err(|e| AssetError::DestinationUnwritable {
                path: dest.clone(),
                source: e,
            })?;

        info!(
            code = %code,
            source = %source.display(),
            dest = %dest.display(),
            bytes,
            "Image staged"
        );
        Ok(dest)
    }

    /// Whether `path` names an existing file inside the managed directory.
    ///
    /// The check is lexical, so any `..` component disqualifies the path.
    pub async fn is_managed(&self, path: &Path) -> bool {
        if path.components().any(|c| c == Component::ParentDir) || !path.starts_with(&self.root) {
            return false;
        }
        match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata.is_file(),
            Err(_) => false,
        }
    }

    /// Resolves the image of a product being edited.
    ///
    /// A live managed copy is reused as-is. Anything else (a newly picked
    /// file, or a stored path whose file has gone) goes through [`store`],
    /// which fails with [`AssetError::SourceUnreadable`] when the file is
    /// missing.
    ///
    /// [`store`]: AssetStore::store
    pub async fn stage_for_edit(&self, code: &str, current: impl AsRef<Path>) -> AssetResult<PathBuf> {
        let current = current.as_ref();

        if self.is_managed(current).await {
            debug!(path = %current.display(), "Reusing staged image");
            return Ok(current.to_path_buf());
        }

        self.store(code, current).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        picked: PathBuf,
        store: AssetStore,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let picked = dir.path().join("photo.png");
        std::fs::write(&picked, b"\x89PNG fake image bytes").unwrap();
        let store = AssetStore::new(dir.path().join("assets").join("products"));
        Fixture {
            _dir: dir,
            picked,
            store,
        }
    }

    #[test]
    fn test_asset_name() {
        let name = AssetStore::asset_name("ABC123", Path::new("/tmp/photo.png")).unwrap();
        assert_eq!(name, "ABC123_photo.png");

        assert!(AssetStore::asset_name("ABC123", Path::new("/")).is_err());
    }

    #[tokio::test]
    async fn test_store_copies_byte_identical() {
        let f = fixture();

        let dest = f.store.store("ABC123", &f.picked).await.unwrap();

        assert_eq!(dest.file_name().unwrap(), "ABC123_photo.png");
        assert!(dest.starts_with(f.store.root()));
        assert_eq!(std::fs::read(&dest).unwrap(), std::fs::read(&f.picked).unwrap());
    }

    #[tokio::test]
    async fn test_store_overwrites_same_name() {
        let f = fixture();
        f.store.store("ABC123", &f.picked).await.unwrap();

        std::fs::write(&f.picked, b"second version").unwrap();
        let dest = f.store.store("ABC123", &f.picked).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"second version");
        assert_eq!(std::fs::read_dir(f.store.root()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_store_missing_source() {
        let f = fixture();

        let err = f
            .store
            .store("ABC123", f.picked.with_file_name("gone.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssetError::SourceUnreadable { .. }));
        assert!(!f.store.root().exists());
    }

    #[tokio::test]
    async fn test_store_directory_source() {
        let f = fixture();
        let dir = f.picked.parent().unwrap().to_path_buf();

        let err = f.store.store("ABC123", &dir).await.unwrap_err();
        assert!(matches!(err, AssetError::InvalidSource { .. }));
    }

    #[tokio::test]
    async fn test_store_unwritable_root() {
        let f = fixture();
        // A regular file where the directory should be
        let blocker = f.picked.with_file_name("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let store = AssetStore::new(blocker.join("products"));

        let err = store.store("ABC123", &f.picked).await.unwrap_err();
        assert!(matches!(err, AssetError::DestinationUnwritable { .. }));
    }

    #[tokio::test]
    async fn test_stage_for_edit_reuses_live_copy() {
        let f = fixture();
        let staged = f.store.store("ABC123", &f.picked).await.unwrap();

        // Code changed on edit: the existing copy keeps its name
        let resolved = f.store.stage_for_edit("XYZ789", &staged).await.unwrap();

        assert_eq!(resolved, staged);
        assert_eq!(std::fs::read_dir(f.store.root()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_stage_for_edit_copies_new_pick() {
        let f = fixture();

        let resolved = f.store.stage_for_edit("ABC123", &f.picked).await.unwrap();

        assert_eq!(resolved, f.store.root().join("ABC123_photo.png"));
        assert!(f.store.is_managed(&resolved).await);
    }

    #[tokio::test]
    async fn test_stage_for_edit_stale_path() {
        let f = fixture();
        let staged = f.store.store("ABC123", &f.picked).await.unwrap();
        std::fs::remove_file(&staged).unwrap();

        let err = f.store.stage_for_edit("ABC123", &staged).await.unwrap_err();
        assert!(matches!(err, AssetError::SourceUnreadable { .. }));
    }

    #[tokio::test]
    async fn test_is_managed() {
        let f = fixture();
        assert!(!f.store.is_managed(&f.picked).await);

        let staged = f.store.store("ABC123", &f.picked).await.unwrap();
        assert!(f.store.is_managed(&staged).await);
        assert!(!f.store.is_managed(f.store.root()).await);
    }

    #[tokio::test]
    async fn test_is_managed_rejects_parent_components() {
        let f = fixture();
        f.store.store("ABC123", &f.picked).await.unwrap();

        // Exists on disk, but resolves outside the root
        let escaped = f.store.root().join("..").join("..").join("photo.png");
        assert!(escaped.is_file());
        assert!(!f.store.is_managed(&escaped).await);

        let resolved = f.store.stage_for_edit("ABC123", &escaped).await.unwrap();
        assert_eq!(resolved, f.store.root().join("ABC123_photo.png"));
    }
}
