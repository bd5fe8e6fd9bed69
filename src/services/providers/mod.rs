/// Destination provider abstraction
///
/// Recommendations come from interchangeable sources: a generative model reached
/// over HTTP, and the local catalog selector. The orchestrator tries one and falls
/// back to the other, so both sit behind the same trait.
use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Destination, TravelPreferences},
};

pub mod catalog;
pub mod openai;

pub use catalog::CatalogProvider;
pub use openai::OpenAiProvider;

/// Trait for recommendation sources
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationProvider: Send + Sync {
    /// Produce up to three destinations for the given preferences
    async fn recommend(&self, preferences: &TravelPreferences) -> AppResult<Vec<Destination>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
