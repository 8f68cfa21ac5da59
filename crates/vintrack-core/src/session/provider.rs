use std::sync::Arc;

use async_trait::async_trait;

use super::{OAuthProvider, Session, SessionSubscription};
use crate::error::VintrackResult;

/// Contract consumed from the identity service.
///
/// Implementations keep the current session themselves and publish every
/// change to their subscribers; callers never mutate a session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// One-shot fetch of the currently signed-in user.
    async fn current_user(&self) -> VintrackResult<Option<Session>>;

    /// Subscribe to auth state changes. Every change is pushed to the
    /// returned subscription until it is released.
    fn on_session_change(&self) -> SessionSubscription;

    /// Run the sign-in flow for `provider`. On success the new session is
    /// published as `AuthChange::SignedIn`.
    async fn sign_in_with_provider(&self, provider: OAuthProvider) -> VintrackResult<()>;

    /// Sign out, publishing `AuthChange::SignedOut`.
    async fn sign_out(&self) -> VintrackResult<()>;
}

/// Provider shared between the shell and the views
pub type SharedSessionProvider = Arc<dyn SessionProvider>;
