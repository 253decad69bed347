use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::fetcher::{HttpFetcher, NewsGateway, RemoteGateway};
use crate::orchestrator::{GetMostPopularNews, NewsController};
use crate::repository::{NewsRepository, RemoteNewsRepository};

/// Object graph composed once at startup.
pub struct AppContext {
    pub config: Config,
    pub repository: Arc<dyn NewsRepository + Send + Sync>,
    pub controller: NewsController,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(&config.api)?);
        let gateway: Arc<dyn NewsGateway + Send + Sync> = Arc::new(RemoteGateway::new(fetcher));
        Ok(Self::with_gateway(config, gateway))
    }

    pub fn with_gateway(config: Config, gateway: Arc<dyn NewsGateway + Send + Sync>) -> Self {
        let repository: Arc<dyn NewsRepository + Send + Sync> = Arc::new(
            RemoteNewsRepository::new(gateway, config.api.api_key.clone()),
        );
        let controller = NewsController::new(GetMostPopularNews::new(repository.clone()));

        Self {
            config,
            repository,
            controller,
        }
    }

    pub fn default_image(&self) -> &str {
        &self.config.images.default_image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NewsError;
    use crate::config::ApiConfig;
    use crate::domain::{FetchPhase, ImageRendition};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        Config {
            api: ApiConfig {
                base_url: format!("{}/svc", server.uri()),
                api_key: "test-key".into(),
                ..ApiConfig::default()
            },
            ..Config::default()
        }
    }

    async fn serve(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/svc/mostpopular/v2/emailed/30.json"))
            .and(query_param("api-key", "test-key"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_single_article_ends_loaded() {
        let server = MockServer::start().await;
        serve(
            &server,
            ResponseTemplate::new(200).set_body_string(
                r#"{"status":"OK","copyright":"c","results":[{"id":1,"title":"T","abstract":"A","url":"u","published_date":"2023-01-01","media":[]}]}"#,
            ),
        )
        .await;
        let ctx = AppContext::new(config_for(&server)).unwrap();

        let state = ctx.controller.load().await;

        assert_eq!(state.phase(), FetchPhase::Loaded);
        assert_eq!(state.articles().len(), 1);
        assert_eq!(state.articles()[0].title, "T");
        assert_eq!(
            state.articles()[0].image_url_or(ImageRendition::Large, ctx.default_image()),
            ctx.default_image()
        );
    }

    #[tokio::test]
    async fn test_unauthorized_ends_failed() {
        let server = MockServer::start().await;
        serve(
            &server,
            ResponseTemplate::new(401).set_body_string(r#"{"fault":{"faultstring":"Invalid ApiKey"}}"#),
        )
        .await;
        let ctx = AppContext::new(config_for(&server)).unwrap();

        let state = ctx.controller.load().await;

        assert_eq!(state.phase(), FetchPhase::Failed);
        assert!(!state.is_loading);
        assert!(state.articles.is_none());
        assert_eq!(state.error, Some(NewsError::HttpUnauthorized));
    }

    #[tokio::test]
    async fn test_missing_format_parses_as_empty() {
        let server = MockServer::start().await;
        serve(
            &server,
            ResponseTemplate::new(200).set_body_string(
                r#"{"status":"OK","copyright":"c","results":[{"id":1,"title":"T","abstract":"A","url":"u","published_date":null,"media":[{"caption":"c","media-metadata":[{"url":"https://img/1.jpg"}]}]}]}"#,
            ),
        )
        .await;
        let ctx = AppContext::new(config_for(&server)).unwrap();

        let response = ctx.repository.request_news().await.unwrap();

        let meta = &response.articles[0].media[0].meta_data[0];
        assert_eq!(meta.format, "");
        assert_eq!(meta.url, "https://img/1.jpg");
    }

    #[tokio::test]
    async fn test_server_error_maps_to_internal_server_error() {
        let server = MockServer::start().await;
        serve(&server, ResponseTemplate::new(500).set_body_string("boom")).await;
        let ctx = AppContext::new(config_for(&server)).unwrap();

        assert_eq!(
            ctx.repository.request_news().await,
            Err(NewsError::HttpInternalServerError("boom".into()))
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_unknown() {
        // Reserve a free port, then release it so connecting is refused.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = Config {
            api: ApiConfig {
                base_url: format!("http://127.0.0.1:{port}/svc"),
                timeout_secs: 2,
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        let ctx = AppContext::new(config).unwrap();

        assert!(matches!(
            ctx.repository.request_news().await,
            Err(NewsError::HttpUnknown(_))
        ));
    }

    #[tokio::test]
    async fn test_slow_response_times_out_as_unknown() {
        let server = MockServer::start().await;
        serve(
            &server,
            ResponseTemplate::new(200)
                .set_body_string(r#"{"status":"OK","copyright":"c","results":[]}"#)
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .await;
        let mut config = config_for(&server);
        config.api.timeout_secs = 1;
        let ctx = AppContext::new(config).unwrap();

        assert!(matches!(
            ctx.repository.request_news().await,
            Err(NewsError::HttpUnknown(_))
        ));
    }
}
