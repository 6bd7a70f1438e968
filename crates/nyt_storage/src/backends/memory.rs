use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use nyt_core::storage::bookmark_key;
use nyt_core::{BookmarkStore, Result};

/// Process-local bookmark flags. Useful in tests and as the fallback when
/// no file path is configured.
#[derive(Default)]
pub struct MemoryBookmarkStore {
    flags: RwLock<HashMap<String, bool>>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn is_bookmarked(&self, article_id: i64) -> Result<bool> {
        let flags = self.flags.read().await;
        Ok(flags.get(&bookmark_key(article_id)).copied().unwrap_or(false))
    }

    async fn set_bookmarked(&self, article_id: i64, bookmarked: bool) -> Result<()> {
        let mut flags = self.flags.write().await;
        flags.insert(bookmark_key(article_id), bookmarked);
        Ok(())
    }
}
