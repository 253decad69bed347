pub mod article;
pub mod response;
pub mod state;

pub use article::{Article, ImageRendition, Media, MediaMetaData};
pub use response::MostPopularResponse;
pub use state::{FetchPhase, FetchState};
