use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::app::NewsResult;
use crate::domain::FetchState;
use crate::orchestrator::GetMostPopularNews;

/// Triggers accepted by [`NewsController::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsEvent {
    Load,
    /// Accepted but ignored; favorites are not implemented.
    MarkFavorite(i64),
    /// Accepted but ignored; favorites are not implemented.
    UnmarkFavorite(i64),
}

/// Identifies one in-flight load. Only the latest ticket may publish.
#[derive(Debug)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

/// Single owner of the UI-facing [`FetchState`].
///
/// Every transition replaces the snapshot and wakes all subscribers.
/// Overlapping loads are sequence-guarded: a response that resolves after a
/// newer load was triggered is dropped.
pub struct NewsController {
    use_case: GetMostPopularNews,
    state: watch::Sender<FetchState>,
    generation: AtomicU64,
}

impl NewsController {
    pub fn new(use_case: GetMostPopularNews) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        Self {
            use_case,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    pub async fn handle(&self, event: NewsEvent) {
        match event {
            NewsEvent::Load => {
                self.load().await;
            }
            NewsEvent::MarkFavorite(id) | NewsEvent::UnmarkFavorite(id) => {
                debug!("Ignoring favorite toggle for article {}", id);
            }
        }
    }

    /// Run one fetch to completion and return the resulting snapshot.
    pub async fn load(&self) -> FetchState {
        let ticket = self.begin_load();
        let result = self.use_case.execute().await;
        self.complete_load(ticket, result);
        self.state()
    }

    /// Enter `Loading` and hand out the ticket for this request.
    pub fn begin_load(&self) -> LoadTicket {
        let mut generation = 0;
        // Generation changes and checks happen under the channel's write lock.
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = FetchState::loading();
        });
        LoadTicket { generation }
    }

    /// Publish the outcome of `ticket`'s request. Returns false when a newer
    /// load has started and the outcome was discarded.
    pub fn complete_load(&self, ticket: LoadTicket, result: NewsResult) -> bool {
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != ticket.generation {
                debug!("Discarding stale response for load #{}", ticket.generation);
                return false;
            }
            *state = match result {
                Ok(response) => FetchState::loaded(response.articles),
                Err(error) => FetchState::failed(error),
            };
            true
        })
    }
}
