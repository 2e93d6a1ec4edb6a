use super::{decide, OnboardingDecision, ShopDirectory};
use crate::models::AuthSession;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// One mount of the onboarding guard.
///
/// `mount` issues a single shop lookup and publishes the decision once.
/// Unmounting (explicitly or by dropping the gate) cancels the lookup; a
/// result that arrives afterwards is discarded.
pub struct OnboardingGate {
    decision: watch::Receiver<OnboardingDecision>,
    token: CancellationToken,
}

impl OnboardingGate {
    pub fn mount(session: AuthSession, shops: Arc<dyn ShopDirectory>) -> Self {
        let (tx, rx) = watch::channel(OnboardingDecision::Loading);
        let token = CancellationToken::new();
        let mounted = token.clone();

        tokio::spawn(async move {
            let fetched = tokio::select! {
                _ = mounted.cancelled() => {
                    tracing::debug!(user_id = %session.user_id, "Onboarding gate unmounted before shops loaded");
                    return;
                }
                result = shops.list_shops(&session) => result,
            };

            if mounted.is_cancelled() {
                return;
            }

            let shop_count = match fetched {
                Ok(shops) => shops.len(),
                Err(e) => {
                    tracing::warn!(
                        user_id = %session.user_id,
                        business_id = ?session.business_id,
                        error = %e,
                        "Failed to load shops, treating as none"
                    );
                    0
                }
            };

            let decision = decide(&session, shop_count);
            tracing::debug!(
                user_id = %session.user_id,
                role = %session.role,
                shop_count,
                decision = decision.as_str(),
                "Onboarding decision"
            );

            // No receiver left means the gate is gone; nothing to publish to.
            let _ = tx.send(decision);
        });

        Self {
            decision: rx,
            token,
        }
    }

    pub fn current(&self) -> OnboardingDecision {
        *self.decision.borrow()
    }

    /// Wait for the decision. Returns `Loading` if the gate was unmounted
    /// before one was made.
    pub async fn decision(&mut self) -> OnboardingDecision {
        if self.token.is_cancelled() {
            return self.current();
        }

        let token = self.token.clone();
        tokio::select! {
            _ = token.cancelled() => OnboardingDecision::Loading,
            settled = self.decision.wait_for(OnboardingDecision::is_settled) => {
                settled.map(|d| *d).unwrap_or(OnboardingDecision::Loading)
            }
        }
    }

    pub fn unmount(&self) {
        self.token.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for OnboardingGate {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
