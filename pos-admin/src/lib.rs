pub mod authz;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod onboarding;
pub mod services;
pub mod startup;
pub mod utils;

use config::OnboardingSettings;
use onboarding::ShopDirectory;
use services::ApiClient;
use std::sync::Arc;

/// Shared application state containing service clients
#[derive(Clone)]
pub struct AppState {
    pub api_client: Arc<ApiClient>,
    pub shops: Arc<dyn ShopDirectory>,
    pub onboarding: OnboardingSettings,
}

impl AppState {
    pub fn new(
        api_client: Arc<ApiClient>,
        shops: Arc<dyn ShopDirectory>,
        onboarding: OnboardingSettings,
    ) -> Self {
        Self {
            api_client,
            shops,
            onboarding,
        }
    }
}
