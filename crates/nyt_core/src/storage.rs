use async_trait::async_trait;

use crate::Result;

/// Key-value persistence for per-article bookmark flags. Injected into the
/// detail layer; implementations live in `nyt_storage`.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Whether the article with this id is bookmarked. Unknown ids read false.
    async fn is_bookmarked(&self, article_id: i64) -> Result<bool>;

    /// Set or clear the bookmark flag for an article.
    async fn set_bookmarked(&self, article_id: i64, bookmarked: bool) -> Result<()>;
}

/// Storage key for an article's bookmark flag.
pub fn bookmark_key(article_id: i64) -> String {
    format!("bookmark_{}", article_id)
}
