use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Destination, TravelPreferences},
    services::{
        catalog::Catalog,
        providers::{CatalogProvider, DestinationProvider, OpenAiProvider},
        selector::RECOMMENDATION_COUNT,
    },
};

/// Which provider produced a set of recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    External,
    Fallback,
}

impl RecommendationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSource::External => "external",
            RecommendationSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub destinations: Vec<Destination>,
    pub source: RecommendationSource,
}

/// Tries the external generator first and falls back to the catalog
///
/// External failures of any kind (error, timeout, empty answer) are logged and
/// swallowed. Only a fallback failure reaches the caller.
pub struct Recommender {
    primary: Option<Arc<dyn DestinationProvider>>,
    fallback: Arc<dyn DestinationProvider>,
    timeout: Duration,
}

impl Recommender {
    pub fn new(
        primary: Option<Arc<dyn DestinationProvider>>,
        fallback: Arc<dyn DestinationProvider>,
        timeout: Duration,
    ) -> Self {
        Self {
            primary,
            fallback,
            timeout,
        }
    }

    /// Recommender that only ever uses the given fallback
    pub fn fallback_only(fallback: Arc<dyn DestinationProvider>) -> Self {
        Self::new(None, fallback, Duration::ZERO)
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let fallback: Arc<dyn DestinationProvider> = Arc::new(CatalogProvider::new(
            Catalog::builtin(),
            config.backfill_policy,
            config.selection_seed,
        ));

        let primary = match OpenAiProvider::from_config(config)? {
            Some(provider) => Some(Arc::new(provider) as Arc<dyn DestinationProvider>),
            None => {
                tracing::warn!("OPENAI_API_KEY not set, serving catalog recommendations only");
                None
            }
        };

        Ok(Self::new(
            primary,
            fallback,
            Duration::from_secs(config.generation_timeout_secs),
        ))
    }

    pub async fn recommend(&self, preferences: &TravelPreferences) -> AppResult<Recommendations> {
        let start = Instant::now();

        if let Some(primary) = &self.primary {
            match self.try_primary(primary.as_ref(), preferences).await {
                Ok(destinations) => {
                    tracing::info!(
                        provider = primary.name(),
                        results = destinations.len(),
                        processing_time_ms = start.elapsed().as_millis(),
                        "Recommendations generated"
                    );
                    return Ok(Recommendations {
                        destinations,
                        source: RecommendationSource::External,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        provider = primary.name(),
                        error = %e,
                        "External generation unavailable, using fallback recommendations"
                    );
                }
            }
        }

        let mut destinations = self.fallback.recommend(preferences).await.map_err(|e| {
            tracing::error!(
                provider = self.fallback.name(),
                error = %e,
                "Fallback recommendations failed"
            );
            e
        })?;
        destinations.truncate(RECOMMENDATION_COUNT);

        tracing::info!(
            provider = self.fallback.name(),
            results = destinations.len(),
            processing_time_ms = start.elapsed().as_millis(),
            "Recommendations generated"
        );

        Ok(Recommendations {
            destinations,
            source: RecommendationSource::Fallback,
        })
    }

    async fn try_primary(
        &self,
        primary: &dyn DestinationProvider,
        preferences: &TravelPreferences,
    ) -> AppResult<Vec<Destination>> {
        let mut destinations = tokio::time::timeout(self.timeout, primary.recommend(preferences))
            .await
            .map_err(|_| {
                AppError::ExternalApi(format!(
                    "Generation timed out after {}ms",
                    self.timeout.as_millis()
                ))
            })??;

        if destinations.is_empty() {
            return Err(AppError::ExternalApi(
                "Provider returned no destinations".to_string(),
            ));
        }

        destinations.truncate(RECOMMENDATION_COUNT);
        Ok(destinations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use crate::services::providers::MockDestinationProvider;
    use crate::services::selector::BackfillPolicy;

    fn destination(name: &str) -> Destination {
        Destination {
            name: name.to_string(),
            country: "Somewhere".to_string(),
            subtitle: String::new(),
            summary: String::new(),
            activities: vec![],
            estimated_cost: 100.0,
            best_time: "Year-round".to_string(),
            image_url: String::new(),
        }
    }

    fn seeded_fallback() -> Arc<dyn DestinationProvider> {
        Arc::new(CatalogProvider::new(
            Catalog::builtin(),
            BackfillPolicy::Strict,
            Some(7),
        ))
    }

    fn prefs() -> TravelPreferences {
        TravelPreferences::new(2000.0, 7, "June", Mood::Relaxing)
    }

    struct SlowProvider;

    #[async_trait::async_trait]
    impl DestinationProvider for SlowProvider {
        async fn recommend(&self, _: &TravelPreferences) -> AppResult<Vec<Destination>> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(vec![destination("Too late")])
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test]
    async fn test_uses_primary_when_it_succeeds() {
        let mut primary = MockDestinationProvider::new();
        primary.expect_name().return_const("mock");
        primary.expect_recommend().times(1).returning(|_| {
            Ok(vec![
                destination("A"),
                destination("B"),
                destination("C"),
                destination("D"),
            ])
        });

        let recommender = Recommender::new(
            Some(Arc::new(primary)),
            seeded_fallback(),
            Duration::from_secs(5),
        );
        let result = recommender.recommend(&prefs()).await.unwrap();

        assert_eq!(result.source, RecommendationSource::External);
        assert_eq!(result.destinations.len(), 3);
        assert_eq!(result.destinations[0].name, "A");
    }

    #[tokio::test]
    async fn test_falls_back_when_primary_errors() {
        let mut primary = MockDestinationProvider::new();
        primary.expect_name().return_const("mock");
        primary
            .expect_recommend()
            .returning(|_| Err(AppError::ExternalApi("quota exceeded".to_string())));

        let recommender = Recommender::new(
            Some(Arc::new(primary)),
            seeded_fallback(),
            Duration::from_secs(5),
        );
        let result = recommender.recommend(&prefs()).await.unwrap();

        assert_eq!(result.source, RecommendationSource::Fallback);
        assert_eq!(result.destinations.len(), 3);
    }

    #[tokio::test]
    async fn test_falls_back_when_primary_returns_nothing() {
        let mut primary = MockDestinationProvider::new();
        primary.expect_name().return_const("mock");
        primary.expect_recommend().returning(|_| Ok(vec![]));

        let recommender = Recommender::new(
            Some(Arc::new(primary)),
            seeded_fallback(),
            Duration::from_secs(5),
        );
        let result = recommender.recommend(&prefs()).await.unwrap();
        assert_eq!(result.source, RecommendationSource::Fallback);
    }

    #[tokio::test]
    async fn test_falls_back_when_primary_times_out() {
        let recommender = Recommender::new(
            Some(Arc::new(SlowProvider)),
            seeded_fallback(),
            Duration::from_millis(50),
        );

        let started = Instant::now();
        let result = recommender.recommend(&prefs()).await.unwrap();

        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(result.source, RecommendationSource::Fallback);
        assert_eq!(result.destinations.len(), 3);
    }

    #[tokio::test]
    async fn test_fallback_error_propagates() {
        let mut fallback = MockDestinationProvider::new();
        fallback.expect_name().return_const("mock");
        fallback
            .expect_recommend()
            .returning(|_| Err(AppError::Internal("Destination catalog is empty".to_string())));

        let recommender = Recommender::fallback_only(Arc::new(fallback));
        let result = recommender.recommend(&prefs()).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_fallback_only_matches_seeded_selection() {
        let recommender = Recommender::fallback_only(seeded_fallback());
        let first = recommender.recommend(&prefs()).await.unwrap();
        let second = recommender.recommend(&prefs()).await.unwrap();

        assert_eq!(first.source, RecommendationSource::Fallback);
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_config_without_key_has_no_primary() {
        let recommender = Recommender::from_config(&Config::default()).unwrap();
        assert!(recommender.primary.is_none());
        assert_eq!(recommender.fallback.name(), "catalog");
    }
}
