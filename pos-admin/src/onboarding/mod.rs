//! Onboarding gate: business owners must have a business and at least one
//! shop before they may use the rest of the application.

pub mod gate;

pub use gate::OnboardingGate;

use crate::authz::Role;
use crate::models::{AuthSession, ShopRecord};
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingDecision {
    Loading,
    Pass,
    Redirect,
}

impl OnboardingDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingDecision::Loading => "loading",
            OnboardingDecision::Pass => "pass",
            OnboardingDecision::Redirect => "redirect",
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, OnboardingDecision::Loading)
    }
}

/// Source of the shops belonging to the session's business.
#[async_trait]
pub trait ShopDirectory: Send + Sync {
    async fn list_shops(&self, session: &AuthSession) -> anyhow::Result<Vec<ShopRecord>>;
}

/// Only business owners are held back; they pass once a business exists and
/// it has at least one shop. A missing business wins over any shop count.
pub fn decide(session: &AuthSession, shop_count: usize) -> OnboardingDecision {
    if session.role != Role::BusinessOwner {
        return OnboardingDecision::Pass;
    }

    if session.has_business() && shop_count > 0 {
        OnboardingDecision::Pass
    } else {
        OnboardingDecision::Redirect
    }
}
