use crate::app::NewsError;
use crate::domain::Article;

/// Snapshot of the article list as seen by the UI.
///
/// Replaced wholesale on every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub is_loading: bool,
    pub articles: Option<Vec<Article>>,
    /// Cause of the most recent failure, cleared by the next load.
    pub error: Option<NewsError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl FetchState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            articles: None,
            error: None,
        }
    }

    pub fn loaded(articles: Vec<Article>) -> Self {
        Self {
            is_loading: false,
            articles: Some(articles),
            error: None,
        }
    }

    pub fn failed(error: NewsError) -> Self {
        Self {
            is_loading: false,
            articles: None,
            error: Some(error),
        }
    }

    pub fn phase(&self) -> FetchPhase {
        if self.is_loading {
            FetchPhase::Loading
        } else if self.articles.is_some() {
            FetchPhase::Loaded
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else {
            FetchPhase::Idle
        }
    }

    pub fn articles(&self) -> &[Article] {
        self.articles.as_deref().unwrap_or(&[])
    }

    pub fn find(&self, id: i64) -> Option<&Article> {
        self.articles().iter().find(|a| a.id == id)
    }
}
