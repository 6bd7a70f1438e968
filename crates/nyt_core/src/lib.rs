pub mod error;
pub mod filters;
pub mod storage;
pub mod types;

pub use error::Error;
pub use filters::{PathType, Period};
pub use storage::BookmarkStore;
pub use types::{Article, ArticleMedia, MediaMetadata, PopularResponse};

pub type Result<T> = std::result::Result<T, Error>;
