//! Offline identity provider with a fixed profile.

use async_trait::async_trait;
use parking_lot::RwLock;
use rand::RngCore;
use tracing::info;

use super::{
    AuthChange, OAuthProvider, Session, SessionChannel, SessionEvent, SessionProvider,
    SessionSubscription, UserProfile,
};
use crate::error::VintrackResult;

/// In-memory provider used for demos, offline runs and tests.
///
/// Sign-in completes immediately with the configured profile. The session
/// can also be replaced from outside with [`DemoSessionProvider::set_session`],
/// which behaves like a change pushed by a real identity service.
#[derive(Debug)]
pub struct DemoSessionProvider {
    profile: UserProfile,
    current: RwLock<Option<Session>>,
    channel: SessionChannel,
}

impl DemoSessionProvider {
    /// Signed-out provider with the default demo profile
    pub fn new() -> Self {
        Self::with_profile(Self::demo_profile())
    }

    /// Signed-out provider that signs in as `profile`
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile,
            current: RwLock::new(None),
            channel: SessionChannel::new(),
        }
    }

    /// Provider that starts signed in with the default demo profile
    pub fn signed_in() -> Self {
        let provider = Self::new();
        *provider.current.write() = Some(provider.new_session());
        provider
    }

    pub fn demo_profile() -> UserProfile {
        UserProfile {
            id: "demo-user".to_string(),
            email: Some("demo@vintrack.app".to_string()),
            display_name: Some("gregoireltb".to_string()),
            avatar_url: None,
        }
    }

    /// Replace the session and push the change to subscribers.
    ///
    /// `Some` replacing an existing session is reported as a token refresh.
    pub fn set_session(&self, session: Option<Session>) {
        let change = {
            let mut current = self.current.write();
            let change = match (&*current, &session) {
                (_, None) => AuthChange::SignedOut,
                (None, Some(_)) => AuthChange::SignedIn,
                (Some(_), Some(_)) => AuthChange::TokenRefreshed,
            };
            *current = session.clone();
            change
        };
        self.channel.publish(SessionEvent { change, session });
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.channel.subscriber_count()
    }

    fn new_session(&self) -> Session {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        let token: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Session {
            access_token: format!("demo-{}", token),
            refresh_token: None,
            expires_at: None,
            user: self.profile.clone(),
        }
    }
}

impl Default for DemoSessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for DemoSessionProvider {
    async fn current_user(&self) -> VintrackResult<Option<Session>> {
        Ok(self.current.read().clone())
    }

    fn on_session_change(&self) -> SessionSubscription {
        self.channel.subscribe()
    }

    async fn sign_in_with_provider(&self, provider: OAuthProvider) -> VintrackResult<()> {
        info!(%provider, user = %self.profile.label(), "Demo sign-in");
        let session = self.new_session();
        self.set_session(Some(session));
        Ok(())
    }

    async fn sign_out(&self) -> VintrackResult<()> {
        info!("Demo sign-out");
        self.set_session(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_publishes_session() {
        let provider = DemoSessionProvider::new();
        let mut sub = provider.on_session_change();
        assert!(provider.current_user().await.unwrap().is_none());

        provider
            .sign_in_with_provider(OAuthProvider::Discord)
            .await
            .unwrap();

        let event = sub.recv().await.unwrap();
        assert_eq!(event.change, AuthChange::SignedIn);
        let session = event.session.unwrap();
        assert!(session.access_token.starts_with("demo-"));
        assert_eq!(session.user.label(), "gregoireltb");
        assert_eq!(provider.current_user().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_sign_out_publishes_absent() {
        let provider = DemoSessionProvider::signed_in();
        let mut sub = provider.on_session_change();

        provider.sign_out().await.unwrap();

        let event = sub.recv().await.unwrap();
        assert_eq!(event.change, AuthChange::SignedOut);
        assert!(event.session.is_none());
        assert!(provider.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_session_reports_refresh() {
        let provider = DemoSessionProvider::signed_in();
        let mut sub = provider.on_session_change();
        let refreshed = provider.new_session();

        provider.set_session(Some(refreshed.clone()));

        let event = sub.recv().await.unwrap();
        assert_eq!(event.change, AuthChange::TokenRefreshed);
        assert_eq!(event.session, Some(refreshed));
    }
}
