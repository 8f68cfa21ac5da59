//! Shared state for the component tree.
//!
//! The root [`App`](crate::app::App) provides:
//! - the navigation shell, writable
//! - the current session, read-only (only the session subscription writes it)
//! - the identity provider
//! - the loaded configuration
//!
//! ## Usage
//!
//! ```ignore
//! let mut shell = use_shell();
//! let session = use_session();
//!
//! if let Some(session) = session.read().as_ref() {
//!     shell.write().set_active_view(View::Account);
//! }
//! ```

use dioxus::prelude::*;
use vintrack_core::{AppConfig, NavigationShell, OAuthProvider, Session, SharedSessionProvider};

/// Hook to access the navigation shell.
pub fn use_shell() -> Signal<NavigationShell> {
    use_context::<Signal<NavigationShell>>()
}

/// Hook to read the current session.
pub fn use_session() -> ReadOnlySignal<Option<Session>> {
    use_context::<ReadOnlySignal<Option<Session>>>()
}

pub fn use_provider() -> SharedSessionProvider {
    use_context::<SharedSessionProvider>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Sign-in / sign-out actions bound to the provider in context.
///
/// Results arrive through the session subscription; these only start the
/// flow and log failures.
#[derive(Clone, Copy)]
pub struct AuthActions {
    provider: CopyValue<SharedSessionProvider>,
    pending: Signal<SignInPending>,
}

impl AuthActions {
    /// Whether a sign-in flow is running
    pub fn is_pending(&self) -> bool {
        self.pending.read().0
    }

    pub fn sign_in(&self) {
        if self.is_pending() {
            return;
        }
        let provider = self.provider.read().clone();
        let mut pending = self.pending;
        pending.set(SignInPending(true));
        // The OAuth round-trip outlives the button that started it
        let _ = spawn_forever(async move {
            if let Err(e) = provider.sign_in_with_provider(OAuthProvider::Discord).await {
                tracing::warn!("Sign-in failed: {}", e);
            }
            pending.set(SignInPending(false));
        });
    }

    pub fn sign_out(&self) {
        let provider = self.provider.read().clone();
        let _ = spawn_forever(async move {
            if let Err(e) = provider.sign_out().await {
                tracing::warn!("Sign-out failed: {}", e);
            }
        });
    }
}

/// Hook returning the auth actions.
pub fn use_auth_actions() -> AuthActions {
    let provider = use_provider();
    AuthActions {
        provider: use_hook(move || CopyValue::new(provider)),
        pending: use_context::<Signal<SignInPending>>(),
    }
}

/// Marker wrapper so the pending flag has its own context slot
#[derive(Clone, Copy, Default, PartialEq)]
pub struct SignInPending(pub bool);
