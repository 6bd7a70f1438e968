use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use nyt_core::{Error, Result};

/// Single-request HTTP transport. Implementations validate the response and
/// hand back the raw, non-empty body; decoding happens in [`request_json`]
/// so the trait stays object-safe.
#[async_trait]
pub trait NetworkService: Send + Sync {
    async fn fetch(&self, url: Url, method: Method, body: Option<Vec<u8>>) -> Result<Vec<u8>>;
}

/// Issue a request through `service` and decode the body as `T`. Decode
/// detail is logged, not surfaced, so callers only see the closed error set.
pub async fn request_json<T: DeserializeOwned>(
    service: &dyn NetworkService,
    url: Url,
    method: Method,
    body: Option<Vec<u8>>,
) -> Result<T> {
    let bytes = service.fetch(url, method, body).await?;
    serde_json::from_slice(&bytes).map_err(|err| {
        warn!("Decoding failed: {}", err);
        Error::DecodingFailed
    })
}

pub struct HttpNetworkService {
    client: Client,
}

impl HttpNetworkService {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpNetworkService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkService for HttpNetworkService {
    async fn fetch(&self, url: Url, method: Method, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| Error::Unknown(err.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ServerError(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| Error::Unknown(err.into()))?;
        if bytes.is_empty() {
            return Err(Error::NoData);
        }

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    struct StaticService(Vec<u8>);

    #[async_trait]
    impl NetworkService for StaticService {
        async fn fetch(&self, _url: Url, _method: Method, _body: Option<Vec<u8>>) -> Result<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Deserialize, Debug)]
    struct Payload {
        value: u32,
    }

    #[tokio::test]
    async fn request_json_decodes_valid_body() {
        let service = StaticService(br#"{"value": 7}"#.to_vec());
        let url = Url::parse("https://example.com/").unwrap();
        let payload: Payload = request_json(&service, url, Method::GET, None).await.unwrap();
        assert_eq!(payload.value, 7);
    }

    #[tokio::test]
    async fn request_json_collapses_decode_errors() {
        let service = StaticService(b"not json".to_vec());
        let url = Url::parse("https://example.com/").unwrap();
        let err = request_json::<Payload>(&service, url, Method::GET, None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DecodingFailed));
    }
}
