pub mod destination;
pub mod preferences;

pub use destination::{Destination, RecommendationsResponse};
pub use preferences::{Currency, Mood, TravelPreferences};
