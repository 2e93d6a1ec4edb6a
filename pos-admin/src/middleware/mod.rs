pub mod auth;
pub mod metrics;
pub mod navigation;
pub mod onboarding;
