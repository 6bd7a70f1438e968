use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use nyt_core::{Article, PathType, Period, PopularResponse, Result};

use crate::api::ApiConfig;
use crate::network::{request_json, NetworkService};

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn fetch_articles(&self, path_type: PathType, period: Period) -> Result<Vec<Article>>;
}

/// Most-popular repository: builds the endpoint URL, fetches the envelope,
/// unwraps `results`. Transport errors propagate unchanged.
pub struct NytArticleRepository {
    network: Arc<dyn NetworkService>,
    config: ApiConfig,
}

impl NytArticleRepository {
    pub fn new(network: Arc<dyn NetworkService>, config: ApiConfig) -> Self {
        Self { network, config }
    }
}

#[async_trait]
impl ArticleRepository for NytArticleRepository {
    async fn fetch_articles(&self, path_type: PathType, period: Period) -> Result<Vec<Article>> {
        let url = self.config.most_popular_url(path_type, period)?;
        let response: PopularResponse =
            request_json(self.network.as_ref(), url, Method::GET, None).await?;
        Ok(response.results)
    }
}
