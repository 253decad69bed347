use serde::{Deserialize, Serialize};

use crate::domain::Article;

/// Envelope returned by the most-popular endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostPopularResponse {
    pub status: String,
    pub copyright: String,
    #[serde(rename = "results")]
    pub articles: Vec<Article>,
}
