use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// Longest trip the planner accepts, in days
pub const MAX_DURATION_DAYS: u32 = 365;

/// Coarse traveller intent used to match catalog tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Relaxing,
    Adventurous,
    Cultural,
    Romantic,
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mood::Relaxing => "Relaxing",
            Mood::Adventurous => "Adventurous",
            Mood::Cultural => "Cultural",
            Mood::Romantic => "Romantic",
        };
        write!(f, "{}", name)
    }
}

/// Currencies a budget may be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Inr,
    Eur,
    Gbp,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Trip preferences submitted by the traveller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    /// Total trip budget, denominated in `currency`
    pub budget: f64,
    /// Trip length in days
    pub duration: u32,
    pub month: String,
    pub mood: Mood,
    #[serde(default)]
    pub currency: Currency,
    /// Where the traveller departs from. Passed to the generator only.
    #[serde(default)]
    pub user_location: Option<String>,
    /// Restricts results to countries whose name contains this text
    #[serde(default)]
    pub country: Option<String>,
}

impl TravelPreferences {
    pub fn new(budget: f64, duration: u32, month: impl Into<String>, mood: Mood) -> Self {
        Self {
            budget,
            duration,
            month: month.into(),
            mood,
            currency: Currency::default(),
            user_location: None,
            country: None,
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_user_location(mut self, location: impl Into<String>) -> Self {
        self.user_location = Some(location.into());
        self
    }

    /// Country filter, trimmed. `None` when absent or blank.
    pub fn country_filter(&self) -> Option<&str> {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|country| !country.is_empty())
    }

    /// Boundary validation applied before preferences reach the selector
    pub fn validate(&self) -> AppResult<()> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(AppError::InvalidInput(
                "Budget must be a non-negative number".to_string(),
            ));
        }

        if !(1..=MAX_DURATION_DAYS).contains(&self.duration) {
            return Err(AppError::InvalidInput(format!(
                "Duration must be between 1 and {} days",
                MAX_DURATION_DAYS
            )));
        }

        if self.month.trim().is_empty() {
            return Err(AppError::InvalidInput("Month is required".to_string()));
        }

        Ok(())
    }
}
