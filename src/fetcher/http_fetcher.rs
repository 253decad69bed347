use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::app::{HeadlineError, Result};
use crate::config::ApiConfig;
use crate::domain::MostPopularResponse;

pub struct HttpFetcher {
    client: Client,
    endpoint: String,
}

impl HttpFetcher {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let endpoint = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.most_popular_path()
        );
        // Validate the base URL up front.
        Url::parse(&endpoint)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the most-popular listing and decode it.
    ///
    /// Non-2xx responses become [`HeadlineError::HttpStatus`] with the response
    /// body as message. Nothing is retried.
    pub async fn fetch_most_popular(&self, api_key: &str) -> Result<MostPopularResponse> {
        let url = Url::parse_with_params(&self.endpoint, &[("api-key", api_key)])?;
        let start = Instant::now();

        debug!("Fetching most popular articles from {}", self.endpoint);

        // The request URL carries the API key, keep it out of error messages.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HeadlineError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("").to_string()
            } else {
                body
            };
            return Err(HeadlineError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HeadlineError::Http(e.without_url()))?;
        let parsed: MostPopularResponse = serde_json::from_slice(&body)?;

        info!(
            "Most popular fetch completed - articles={}, duration={:.2}s",
            parsed.articles.len(),
            start.elapsed().as_secs_f32()
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BODY: &str = r#"{"status":"OK","copyright":"c","results":[{"id":1,"title":"T","abstract":"A","url":"u","published_date":"2023-01-01","media":[]}]}"#;

    fn fetcher_for(server: &MockServer) -> HttpFetcher {
        let config = ApiConfig {
            base_url: format!("{}/svc", server.uri()),
            ..ApiConfig::default()
        };
        HttpFetcher::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_uses_configured_path() {
        let config = ApiConfig {
            base_url: "https://api.example.com/svc/".into(),
            ..ApiConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        assert_eq!(
            fetcher.endpoint(),
            "https://api.example.com/svc/mostpopular/v2/emailed/30.json"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ApiConfig {
            base_url: "not a url".into(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            HttpFetcher::new(&config),
            Err(HeadlineError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_sends_api_key_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/svc/mostpopular/v2/emailed/30.json"))
            .and(query_param("api-key", "k3y"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(1)
            .mount(&server)
            .await;

        let response = fetcher_for(&server).fetch_most_popular("k3y").await.unwrap();

        assert_eq!(response.status, "OK");
        assert_eq!(response.articles.len(), 1);
        assert_eq!(response.articles[0].title, "T");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_carries_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid ApiKey"))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).fetch_most_popular("bad").await.unwrap_err();

        match err {
            HeadlineError::HttpStatus { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid ApiKey");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_empty_error_body_uses_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).fetch_most_popular("k").await.unwrap_err();

        assert!(matches!(
            err,
            HeadlineError::HttpStatus { status: 503, ref message } if message == "Service Unavailable"
        ));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\":"))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).fetch_most_popular("k").await.unwrap_err();

        assert!(matches!(err, HeadlineError::Decode(_)));
    }

    #[tokio::test]
    async fn test_gateway_delegates_to_client() {
        use crate::fetcher::{NewsGateway, RemoteGateway};
        use std::sync::Arc;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .mount(&server)
            .await;

        let gateway = RemoteGateway::new(Arc::new(fetcher_for(&server)));
        let response = gateway.fetch_most_popular("k").await.unwrap();
        assert_eq!(response.articles[0].id, 1);
    }
}
