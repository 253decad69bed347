use std::sync::Arc;

use crate::app::NewsResult;
use crate::repository::NewsRepository;

pub struct GetMostPopularNews {
    repository: Arc<dyn NewsRepository + Send + Sync>,
}

impl GetMostPopularNews {
    pub fn new(repository: Arc<dyn NewsRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> NewsResult {
        self.repository.request_news().await
    }
}
