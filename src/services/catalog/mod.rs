use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Currency, Destination},
};

mod destinations;

/// Mood and category labels attached to catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Relaxing,
    Adventurous,
    Cultural,
    Romantic,
    Beaches,
    Mountains,
    City,
    Budget,
}

/// A static destination record used for fallback recommendations
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub country: &'static str,
    pub subtitle: &'static str,
    pub summary: &'static str,
    pub activities: [&'static str; 4],
    /// Realistic upper bound for a trip here, in USD
    pub base_ceiling_usd: f64,
    /// Fraction of the requested budget a trip here typically uses
    pub base_multiplier: f64,
    pub best_time: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [Tag],
}

impl CatalogEntry {
    pub fn key(&self) -> (&'static str, &'static str) {
        (self.name, self.country)
    }

    pub fn has_any_tag(&self, tags: &[Tag]) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }

    /// Case-insensitive substring match on the country name
    pub fn in_country(&self, needle: &str) -> bool {
        self.country
            .to_lowercase()
            .contains(&needle.trim().to_lowercase())
    }

    /// Budget-scaled estimate, capped at the ceiling converted into `currency`
    pub fn estimated_cost(&self, budget: f64, currency: Currency) -> f64 {
        let scaled = budget * self.base_multiplier;
        let ceiling = currency.from_usd(self.base_ceiling_usd);
        scaled.min(ceiling).round()
    }

    pub fn to_destination(&self, budget: f64, currency: Currency) -> Destination {
        Destination {
            name: self.name.to_string(),
            country: self.country.to_string(),
            subtitle: self.subtitle.to_string(),
            summary: self.summary.to_string(),
            activities: self.activities.iter().map(|a| a.to_string()).collect(),
            estimated_cost: self.estimated_cost(budget, currency),
            best_time: self.best_time.to_string(),
            image_url: self.image_url.to_string(),
        }
    }
}

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog {
        entries: destinations::ENTRIES.to_vec(),
    })
});

/// Immutable set of known destinations, built once and shared read-only
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty input and duplicate name+country pairs
    pub fn new(entries: Vec<CatalogEntry>) -> AppResult<Self> {
        if entries.is_empty() {
            return Err(AppError::Internal("Catalog has no destinations".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.is_empty() || entry.country.is_empty() {
                return Err(AppError::Internal(
                    "Catalog entry is missing a name or country".to_string(),
                ));
            }
            if !seen.insert(entry.key()) {
                return Err(AppError::Internal(format!(
                    "Duplicate catalog entry: {}, {}",
                    entry.name, entry.country
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The built-in destination catalog
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal entry for selector tests
    pub(crate) fn entry(
        name: &'static str,
        country: &'static str,
        tags: &'static [Tag],
    ) -> CatalogEntry {
        CatalogEntry {
            name,
            country,
            subtitle: "Test subtitle",
            summary: "Test summary",
            activities: ["One", "Two", "Three", "Four"],
            base_ceiling_usd: 1000.0,
            base_multiplier: 0.5,
            best_time: "Year-round",
            image_url: "https://example.com/image.jpg",
            tags,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.entries().to_vec());
        assert!(rebuilt.is_ok());
        assert!(builtin.len() >= 12);
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        for entry in catalog.entries() {
            assert!(
                entry.base_multiplier > 0.0 && entry.base_multiplier <= 1.0,
                "{} multiplier out of range",
                entry.name
            );
            assert!(entry.base_ceiling_usd > 0.0);
            assert!(entry.activities.iter().all(|a| !a.is_empty()));
        }

        let romantic = catalog
            .entries()
            .iter()
            .filter(|e| e.tags.contains(&Tag::Romantic))
            .count();
        assert!(romantic >= 3);

        let japan: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|e| e.in_country("japan"))
            .map(|e| e.name)
            .collect();
        assert_eq!(japan, vec!["Kyoto"]);
    }

    #[test]
    fn test_every_mood_group_has_three_entries() {
        let catalog = Catalog::builtin();
        let groups: [&[Tag]; 4] = [
            &[Tag::Relaxing, Tag::Beaches],
            &[Tag::Adventurous, Tag::Mountains],
            &[Tag::Cultural, Tag::City],
            &[Tag::Romantic],
        ];
        for group in groups {
            let count = catalog
                .entries()
                .iter()
                .filter(|e| e.has_any_tag(group))
                .count();
            assert!(count >= 3, "group {:?} has only {} entries", group, count);
        }
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        assert!(Catalog::new(Vec::new()).is_err());

        let duplicate = Catalog::new(vec![
            entry("Lisbon", "Portugal", &[Tag::City]),
            entry("Lisbon", "Portugal", &[Tag::Cultural]),
        ]);
        assert!(matches!(duplicate, Err(AppError::Internal(_))));

        let same_name_other_country = Catalog::new(vec![
            entry("Victoria", "Canada", &[]),
            entry("Victoria", "Seychelles", &[]),
        ]);
        assert!(same_name_other_country.is_ok());
    }

    #[test]
    fn test_estimated_cost_takes_lower_of_budget_share_and_ceiling() {
        let kyoto = entry("Kyoto", "Japan", &[Tag::Cultural]);

        // 0.5 * 1000 = 500 < 1000 ceiling
        assert_eq!(kyoto.estimated_cost(1000.0, Currency::Usd), 500.0);
        // 0.5 * 10000 = 5000 > 1000 ceiling
        assert_eq!(kyoto.estimated_cost(10_000.0, Currency::Usd), 1000.0);
        // ceiling converts: 1000 USD = 83000 INR
        assert_eq!(kyoto.estimated_cost(1_000_000.0, Currency::Inr), 83_000.0);
        assert_eq!(kyoto.estimated_cost(0.0, Currency::Gbp), 0.0);
    }

    #[test]
    fn test_estimated_cost_is_rounded() {
        let entry = entry("Porto", "Portugal", &[]);
        assert_eq!(entry.estimated_cost(333.0, Currency::Usd), 167.0);
    }

    #[test]
    fn test_in_country_is_case_insensitive_substring() {
        let entry = entry("Queenstown", "New Zealand", &[]);
        assert!(entry.in_country("zealand"));
        assert!(entry.in_country(" NEW "));
        assert!(!entry.in_country("australia"));
    }
}
