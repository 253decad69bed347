pub mod gateway;
pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::MostPopularResponse;

pub use gateway::RemoteGateway;
pub use http_fetcher::HttpFetcher;

/// Source of most-popular listings.
///
/// Failures are raw [`HeadlineError`](crate::app::HeadlineError)s; the
/// repository is responsible for mapping them.
#[async_trait]
pub trait NewsGateway {
    async fn fetch_most_popular(&self, api_key: &str) -> Result<MostPopularResponse>;
}
