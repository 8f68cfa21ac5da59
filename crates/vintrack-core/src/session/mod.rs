//! Session model and identity providers.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  SessionProvider (trait)                                     │
//! │  ├── current_user()          one-shot fetch                  │
//! │  ├── on_session_change()     SessionSubscription (broadcast) │
//! │  ├── sign_in_with_provider() completion publishes SignedIn   │
//! │  └── sign_out()              publishes SignedOut             │
//! │                                                              │
//! │  Implementations                                             │
//! │  ├── SupabaseAuth            GoTrue REST + PKCE loopback     │
//! │  └── DemoSessionProvider     in-memory, offline              │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod callback;
mod demo;
mod pkce;
mod provider;
mod subscription;
mod supabase;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{AuthBackend, AuthConfig};
use crate::error::{VintrackError, VintrackResult};

pub use callback::parse_callback_target;
pub use demo::DemoSessionProvider;
pub use pkce::PkcePair;
pub use provider::{SessionProvider, SharedSessionProvider};
pub use subscription::{SessionChannel, SessionSubscription, SESSION_CHANNEL_CAPACITY};
pub use supabase::SupabaseAuth;

/// Label shown when the identity service gave us neither a name nor an e-mail.
pub const FALLBACK_USER_LABEL: &str = "Utilisateur";

/// Profile attributes of the signed-in user.
///
/// Every attribute except the id is optional: Discord accounts linked through
/// the identity service may lack an e-mail, and avatars are never guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity-service user id
    pub id: String,
    /// E-mail address, if shared by the OAuth provider
    pub email: Option<String>,
    /// Display name (`full_name` metadata)
    pub display_name: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Name to show in the UI: display name, then e-mail, then a generic label.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(FALLBACK_USER_LABEL)
    }

    /// First letter of the label, uppercased, for avatar placeholders.
    pub fn initial(&self) -> String {
        self.label()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Authenticated identity plus profile, as supplied by the identity service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for the identity service
    pub access_token: String,
    /// Token used to obtain a fresh access token
    pub refresh_token: Option<String>,
    /// Expiry of the access token
    pub expires_at: Option<DateTime<Utc>>,
    /// Profile of the signed-in user
    pub user: UserProfile,
}

impl Session {
    /// Whether the access token is past its expiry at `now`.
    ///
    /// Sessions without an expiry never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|at| at <= now).unwrap_or(false)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// OAuth providers the identity service is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Discord,
}

impl OAuthProvider {
    /// Provider name as the identity service expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Discord => "discord",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = VintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discord" => Ok(OAuthProvider::Discord),
            other => Err(VintrackError::UnknownProvider(other.to_string())),
        }
    }
}

/// Kind of auth state change pushed by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// A pushed auth state change: what happened and the session after it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    /// What happened
    pub change: AuthChange,
    /// Session after the change (`None` means signed out)
    pub session: Option<Session>,
}

impl SessionEvent {
    pub fn signed_in(session: Session) -> Self {
        Self {
            change: AuthChange::SignedIn,
            session: Some(session),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            change: AuthChange::SignedOut,
            session: None,
        }
    }

    /// Consume the event, keeping only the session
    pub fn into_session(self) -> Option<Session> {
        self.session
    }
}

/// Build the provider selected by the auth config.
///
/// # Errors
///
/// Returns `VintrackError::Config` when the Supabase backend is selected
/// without a project URL or anon key.
pub fn provider_from_config(config: &AuthConfig) -> VintrackResult<SharedSessionProvider> {
    match config.effective_backend() {
        AuthBackend::Demo => {
            tracing::info!("Using demo identity provider");
            Ok(Arc::new(DemoSessionProvider::new()))
        }
        AuthBackend::Supabase => {
            let auth = SupabaseAuth::from_config(config)?;
            tracing::info!(url = %auth.base_url(), "Using Supabase identity provider");
            Ok(Arc::new(auth))
        }
    }
}
