/// Catalog-backed provider
///
/// Pure local computation over the built-in destination catalog. Each call draws
/// from its own generator so concurrent requests share nothing mutable.
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Destination, TravelPreferences},
    services::{
        catalog::Catalog,
        providers::DestinationProvider,
        selector::{self, BackfillPolicy},
    },
};

#[derive(Debug, Clone)]
pub struct CatalogProvider {
    catalog: Arc<Catalog>,
    policy: BackfillPolicy,
    seed: Option<u64>,
}

impl CatalogProvider {
    pub fn new(catalog: Arc<Catalog>, policy: BackfillPolicy, seed: Option<u64>) -> Self {
        Self {
            catalog,
            policy,
            seed,
        }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Synchronous selection, usable outside an async context
    pub fn select(&self, preferences: &TravelPreferences) -> AppResult<Vec<Destination>> {
        selector::select_destinations(preferences, &self.catalog, self.policy, &mut self.rng())
    }
}

impl Default for CatalogProvider {
    fn default() -> Self {
        Self::new(Catalog::builtin(), BackfillPolicy::default(), None)
    }
}

#[async_trait::async_trait]
impl DestinationProvider for CatalogProvider {
    async fn recommend(&self, preferences: &TravelPreferences) -> AppResult<Vec<Destination>> {
        self.select(preferences)
    }

    fn name(&self) -> &'static str {
        "catalog"
    }
}
