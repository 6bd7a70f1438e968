pub mod api;
pub mod network;
pub mod repository;

pub use api::ApiConfig;
pub use network::{request_json, HttpNetworkService, NetworkService};
pub use repository::{ArticleRepository, NytArticleRepository};

pub mod prelude {
    pub use crate::{ApiConfig, ArticleRepository, NytArticleRepository};
    pub use nyt_core::{Article, Error, PathType, Period, Result};
}
