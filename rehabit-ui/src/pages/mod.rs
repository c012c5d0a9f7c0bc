//! Pages
//!
//! Top-level page components for each route.

pub mod activity_log;
pub mod dashboard;
pub mod insights;
pub mod landing;

pub use activity_log::ActivityLog;
pub use dashboard::Dashboard;
pub use insights::Insights;
pub use landing::Landing;
