use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Destination, Mood, TravelPreferences},
    services::catalog::{Catalog, CatalogEntry, Tag},
};

/// Number of destinations a recommendation contains
pub const RECOMMENDATION_COUNT: usize = 3;

/// Tags that satisfy each mood. A mood missing from this table is not filtered.
const MOOD_TAGS: &[(Mood, &[Tag])] = &[
    (Mood::Relaxing, &[Tag::Relaxing, Tag::Beaches]),
    (Mood::Adventurous, &[Tag::Adventurous, Tag::Mountains]),
    (Mood::Cultural, &[Tag::Cultural, Tag::City]),
    (Mood::Romantic, &[Tag::Romantic]),
];

/// How a short result is topped up when a country filter is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackfillPolicy {
    /// Never pad from outside the country filter; the result may be short
    #[default]
    Strict,
    /// Pad from the full catalog even when a country filter is active
    TopUp,
}

pub fn mood_tags(mood: Mood) -> Option<&'static [Tag]> {
    MOOD_TAGS
        .iter()
        .find(|(candidate, _)| *candidate == mood)
        .map(|(_, tags)| *tags)
}

/// Picks up to three destinations from the catalog
///
/// Selection runs in order:
/// 1. Country filter (case-insensitive substring, strict)
/// 2. Mood tag match over the country pool, shuffled
/// 3. Backfill from the rest of the country pool, shuffled
/// 4. Backfill from the whole catalog, shuffled, only without a country
///    filter or under [`BackfillPolicy::TopUp`]
///
/// Costs are estimated per entry in the requested currency. Output never
/// repeats a name+country pair and is fully determined by the rng state.
pub fn select_destinations<R: Rng + ?Sized>(
    preferences: &TravelPreferences,
    catalog: &Catalog,
    policy: BackfillPolicy,
    rng: &mut R,
) -> AppResult<Vec<Destination>> {
    if catalog.is_empty() {
        return Err(AppError::Internal(
            "Destination catalog is empty".to_string(),
        ));
    }

    let country = preferences.country_filter();

    let pool: Vec<&CatalogEntry> = catalog
        .entries()
        .iter()
        .filter(|entry| country.map_or(true, |c| entry.in_country(c)))
        .collect();

    let mut selected: Vec<&CatalogEntry> = match mood_tags(preferences.mood) {
        Some(tags) => pool
            .iter()
            .copied()
            .filter(|entry| entry.has_any_tag(tags))
            .collect(),
        None => pool.clone(),
    };
    selected.shuffle(rng);
    selected.truncate(RECOMMENDATION_COUNT);

    if selected.len() < RECOMMENDATION_COUNT {
        backfill(&mut selected, pool.iter().copied(), rng);
    }

    let may_leave_country = country.is_none() || policy == BackfillPolicy::TopUp;
    if selected.len() < RECOMMENDATION_COUNT && may_leave_country {
        backfill(&mut selected, catalog.entries().iter(), rng);
    }

    tracing::debug!(
        mood = %preferences.mood,
        country = ?country,
        pool = pool.len(),
        selected = selected.len(),
        "Destinations selected from catalog"
    );

    Ok(selected
        .into_iter()
        .map(|entry| entry.to_destination(preferences.budget, preferences.currency))
        .collect())
}

/// Appends shuffled, not-yet-selected candidates until the target count is reached
fn backfill<'a, R: Rng + ?Sized>(
    selected: &mut Vec<&'a CatalogEntry>,
    candidates: impl Iterator<Item = &'a CatalogEntry>,
    rng: &mut R,
) {
    let mut remaining: Vec<&CatalogEntry> = candidates
        .filter(|candidate| !selected.iter().any(|s| s.key() == candidate.key()))
        .collect();
    remaining.shuffle(rng);

    let needed = RECOMMENDATION_COUNT.saturating_sub(selected.len());
    selected.extend(remaining.into_iter().take(needed));
}
