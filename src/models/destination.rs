use serde::{Deserialize, Serialize};

/// A recommended destination returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub name: String,
    pub country: String,
    /// One-line hook, e.g. "Perfect for beach lovers"
    pub subtitle: String,
    pub summary: String,
    pub activities: Vec<String>,
    /// Estimated total trip cost in the requested currency
    pub estimated_cost: f64,
    pub best_time: String,
    pub image_url: String,
}

impl Destination {
    /// Identity used for de-duplication within a result
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.country)
    }
}

/// Response body for the recommendations endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub destinations: Vec<Destination>,
}
