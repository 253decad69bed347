use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::MostPopularResponse;
use crate::fetcher::{HttpFetcher, NewsGateway};

/// Puts the concrete HTTP client behind [`NewsGateway`].
pub struct RemoteGateway {
    client: Arc<HttpFetcher>,
}

impl RemoteGateway {
    pub fn new(client: Arc<HttpFetcher>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NewsGateway for RemoteGateway {
    async fn fetch_most_popular(&self, api_key: &str) -> Result<MostPopularResponse> {
        self.client.fetch_most_popular(api_key).await
    }
}
