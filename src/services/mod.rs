pub mod catalog;
pub mod currency;
pub mod providers;
pub mod recommendations;
pub mod selector;

pub use recommendations::{RecommendationSource, Recommendations, Recommender};
