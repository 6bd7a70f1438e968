pub mod detail;
pub mod feed;
pub mod messages;

pub use detail::{ArticleDetail, SharePayload};
pub use feed::{ArticleFeed, FeedSnapshot, DEBOUNCE_WINDOW};
pub use messages::user_message;

pub mod prelude {
    pub use crate::{ArticleFeed, FeedSnapshot};
    pub use nyt_core::{Article, Error, PathType, Period, Result};
}
