//! UI Components
//!
//! Reusable Leptos components for the pages.

pub mod card;
pub mod chart;
pub mod loading;
pub mod navbar;
pub mod recommendation_card;
pub mod stats_card;

pub use card::Card;
pub use chart::{Chart, ChartKind, ProductivityChart};
pub use loading::{InlineLoading, Loading};
pub use navbar::Navbar;
pub use recommendation_card::RecommendationCard;
pub use stats_card::StatsCard;
