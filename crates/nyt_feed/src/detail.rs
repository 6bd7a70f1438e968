use std::sync::Arc;

use url::Url;

use nyt_core::{Article, BookmarkStore, Result};

/// The `{title, url}` pair handed to the platform share surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// State behind the detail screen for a single article: the bookmark flag
/// and the outward-facing payloads. Presentation (share sheet, browser)
/// stays outside.
pub struct ArticleDetail {
    article: Article,
    bookmarks: Arc<dyn BookmarkStore>,
    is_bookmarked: bool,
}

impl ArticleDetail {
    /// Wrap an article, reading its persisted bookmark flag. Articles
    /// without an id are never bookmarked.
    pub async fn load(article: Article, bookmarks: Arc<dyn BookmarkStore>) -> Result<Self> {
        let is_bookmarked = match article.id {
            Some(id) => bookmarks.is_bookmarked(id).await?,
            None => false,
        };
        Ok(Self {
            article,
            bookmarks,
            is_bookmarked,
        })
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn is_bookmarked(&self) -> bool {
        self.is_bookmarked
    }

    /// Flip and persist the bookmark flag, returning the new state. For
    /// id-less articles the flip is process-local only.
    pub async fn toggle_bookmark(&mut self) -> Result<bool> {
        self.is_bookmarked = !self.is_bookmarked;
        if let Some(id) = self.article.id {
            self.bookmarks.set_bookmarked(id, self.is_bookmarked).await?;
        }
        Ok(self.is_bookmarked)
    }

    pub fn share_payload(&self) -> SharePayload {
        SharePayload {
            title: self.article.title.clone(),
            url: self.article.url.clone(),
        }
    }

    /// The article URL for the external browser, if present and valid.
    pub fn external_url(&self) -> Option<Url> {
        self.article
            .url
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok())
    }
}
