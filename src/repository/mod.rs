use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::app::{NewsError, NewsResult};
use crate::fetcher::NewsGateway;

/// Boundary that turns gateway failures into [`NewsError`]s.
#[async_trait]
pub trait NewsRepository {
    /// Fetch the current most-popular listing. Never fails with a raw error.
    async fn request_news(&self) -> NewsResult;
}

pub struct RemoteNewsRepository {
    gateway: Arc<dyn NewsGateway + Send + Sync>,
    api_key: String,
}

impl RemoteNewsRepository {
    pub fn new(gateway: Arc<dyn NewsGateway + Send + Sync>, api_key: impl Into<String>) -> Self {
        Self {
            gateway,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl NewsRepository for RemoteNewsRepository {
    async fn request_news(&self) -> NewsResult {
        self.gateway
            .fetch_most_popular(&self.api_key)
            .await
            .map_err(|e| {
                let mapped = NewsError::from_remote(&e);
                warn!("Most popular request failed: {} ({})", mapped, e);
                mapped
            })
    }
}
