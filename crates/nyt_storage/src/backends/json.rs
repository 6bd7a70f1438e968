use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use nyt_core::storage::bookmark_key;
use nyt_core::{BookmarkStore, Error, Result};

/// Bookmark flags persisted as a flat JSON object on disk. The whole map is
/// loaded at open and rewritten on every change; fine at bookmark scale.
#[derive(Debug)]
pub struct JsonBookmarkStore {
    path: PathBuf,
    flags: RwLock<HashMap<String, bool>>,
}

impl JsonBookmarkStore {
    /// Open the store at `path`, creating an empty one if the file does not
    /// exist yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let flags = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| Error::Storage(format!("Corrupt bookmark file: {}", err)))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No bookmark file at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(err) => return Err(Error::Storage(format!("Reading bookmark file: {}", err))),
        };
        Ok(Self {
            path,
            flags: RwLock::new(flags),
        })
    }

    async fn persist(&self, flags: &HashMap<String, bool>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(flags)
            .map_err(|err| Error::Storage(format!("Encoding bookmarks: {}", err)))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|err| Error::Storage(format!("Writing bookmark file: {}", err)))
    }
}

#[async_trait]
impl BookmarkStore for JsonBookmarkStore {
    async fn is_bookmarked(&self, article_id: i64) -> Result<bool> {
        let flags = self.flags.read().await;
        Ok(flags.get(&bookmark_key(article_id)).copied().unwrap_or(false))
    }

    async fn set_bookmarked(&self, article_id: i64, bookmarked: bool) -> Result<()> {
        let mut flags = self.flags.write().await;
        flags.insert(bookmark_key(article_id), bookmarked);
        self.persist(&flags).await
    }
}
