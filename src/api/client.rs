//! src/api/client.rs
//! ============================================================================
//! # Backend: Outbound Calls to the Search Server
//!
//! The coordinator and orchestrator never touch HTTP directly; they talk to
//! the [`Backend`] trait, so tests drive them with an in-memory
//! implementation. [`HttpBackend`] is the production implementation: reqwest
//! against a configured base URL, JSON both ways.
//!
//! No timeout is imposed here. A hung server call leaves the loading
//! indicator up until the call settles; the user can keep working.

use async_trait::async_trait;
use tracing::debug;

use crate::api::protocol::{FileOpRequest, OpResponse, SearchRequest, SearchResponse};
use crate::error::AppError;

/// Capability interface over the two outbound call families.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, AppError>;
    async fn file_op(&self, req: &FileOpRequest) -> Result<OpResponse, AppError>;
}

/// HTTP implementation of [`Backend`].
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, AppError> {
        debug!("POST /search/ query={:?} paths={:?}", req.query, req.paths);
        // Decode the body regardless of HTTP status; a non-JSON error page
        // surfaces as a decode failure, which is a transport error here.
        let response = self
            .client
            .post(self.url("/search/"))
            .json(req)
            .send()
            .await?
            .json::<SearchResponse>()
            .await?;
        Ok(response)
    }

    async fn file_op(&self, req: &FileOpRequest) -> Result<OpResponse, AppError> {
        debug!("POST {} body={}", req.endpoint(), req.body());
        // The server answers rejections with a 4xx status and a JSON body
        // ({"error": ...}); that body must be decoded, not discarded.
        let response = self
            .client
            .post(self.url(req.endpoint()))
            .json(&req.body())
            .send()
            .await?
            .json::<OpResponse>()
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let backend = HttpBackend::new("http://127.0.0.1:5000/");
        assert_eq!(backend.url("/file/open"), "http://127.0.0.1:5000/file/open");
    }
}
