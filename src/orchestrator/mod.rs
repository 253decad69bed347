//! Turns load triggers into repository calls and publishes [`FetchState`].
//!
//! [`FetchState`]: crate::domain::FetchState

pub mod controller;
pub mod use_case;

pub use controller::{LoadTicket, NewsController, NewsEvent};
pub use use_case::GetMostPopularNews;
