//! The onboarding journey around the two configuration wizards: page routes,
//! the product-analytics setup cards and the progress shown in wizard headers.

pub mod cards;
pub mod progress;
pub mod routes;

pub use cards::{ProductAnalyticsPage, SetupCard, SetupCardId, SetupStatus, SETUP_CARDS};
pub use progress::SetupProgress;
pub use routes::OnboardingRoute;
