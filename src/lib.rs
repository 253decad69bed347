//! # Headline
//!
//! A reader for the "most popular" articles of a news REST API.
//!
//! ## Architecture
//!
//! One request pipeline, leaf first:
//!
//! ```text
//! HttpFetcher → RemoteGateway → RemoteNewsRepository → NewsController → UI
//! ```
//!
//! - [`fetcher`]: HTTP client and the gateway seam
//! - [`repository`]: maps transport failures into [`NewsError`](app::NewsError)
//! - [`orchestrator`]: use case and the state holder publishing
//!   [`FetchState`](domain::FetchState)
//!
//! ## Quick Start
//!
//! ```bash
//! # List the most emailed articles of the last 30 days
//! headline --api-key <KEY> list
//!
//! # Show one article
//! headline show 100000009000001
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct composes the object graph:
/// fetcher, gateway, repository, controller.
pub mod app;

/// Command-line interface using clap.
///
/// - `list` - List the most popular articles
/// - `show <id>` - Show one article
/// - `open <id>` - Open an article in the browser
pub mod cli;

/// Configuration loaded from `~/.config/headline/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article), [`Media`](domain::Media),
///   [`MediaMetaData`](domain::MediaMetaData): wire models
/// - [`MostPopularResponse`](domain::MostPopularResponse): API envelope
/// - [`FetchState`](domain::FetchState): UI-facing snapshot
pub mod domain;

/// HTTP fetching.
///
/// - [`NewsGateway`](fetcher::NewsGateway): Async trait the repository depends on
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based client
pub mod fetcher;

pub mod orchestrator;

/// Repository boundary.
pub mod repository;
