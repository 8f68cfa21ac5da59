//! Session-gated navigation shell.
//!
//! ```text
//!                 enter_app (session present)
//!   ┌─────────┐ ───────────────────────────────▶ ┌──────────────────────┐
//!   │ Landing │                                  │ Application × View   │
//!   └─────────┘ ◀─────────────────────────────── └──────────────────────┘
//!                 exit_app / session lost            set_active_view
//!                 (session loss resets view)
//! ```
//!
//! The shell itself is plain state; [`observe_session`] and
//! [`follow_session`] connect it to a [`SessionProvider`].

use tracing::{debug, info, warn};

use crate::session::{Session, SessionProvider, SessionSubscription};
use crate::views::View;

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageMode {
    /// Public marketing page
    #[default]
    Landing,
    /// Authenticated dashboard
    Application,
}

/// What a landing-page call to action does in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// Switch to the dashboard
    OpenApp,
    /// Start the sign-in flow first
    SignIn,
}

/// Navigation state: page mode, active view, and whether a session is held.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationShell {
    page_mode: PageMode,
    active_view: View,
    signed_in: bool,
}

impl NavigationShell {
    /// Initial state: landing page, default view, no session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_mode(&self) -> PageMode {
        self.page_mode
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Whether the last delivered session value was present
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    /// Set the page mode.
    ///
    /// Entering the application without a session is refused; the shell
    /// stays on the landing page. Returns the resulting mode.
    pub fn set_page_mode(&mut self, mode: PageMode) -> PageMode {
        match mode {
            PageMode::Application if !self.signed_in => {
                debug!("Refusing to enter application without a session");
            }
            mode => self.page_mode = mode,
        }
        self.page_mode
    }

    /// Select the view shown inside the application. Never changes page mode.
    pub fn set_active_view(&mut self, view: View) {
        if self.active_view != view {
            debug!(from = ?self.active_view, to = ?view, "Switching view");
            self.active_view = view;
        }
    }

    /// "Enter app" action from the landing page
    pub fn enter_app(&mut self) -> bool {
        self.set_page_mode(PageMode::Application) == PageMode::Application
    }

    /// Resolve a landing-page call to action: open the dashboard when a
    /// session is held, otherwise sign in.
    pub fn entry_action(&self) -> EntryAction {
        if self.signed_in {
            EntryAction::OpenApp
        } else {
            EntryAction::SignIn
        }
    }

    /// "Exit app" action (logo click, sign-out button)
    pub fn exit_app(&mut self) {
        self.set_page_mode(PageMode::Landing);
    }

    /// Record the latest session value.
    ///
    /// An absent session forces the landing page and resets the active view
    /// to the default, so re-entering starts clean. A present session never
    /// changes the page by itself.
    pub fn apply_session(&mut self, session: Option<&Session>) {
        match session {
            Some(session) => {
                if !self.signed_in {
                    info!(user = %session.user.label(), "Session present");
                }
                self.signed_in = true;
            }
            None => {
                if self.signed_in || self.page_mode != PageMode::Landing {
                    info!("Session absent, returning to landing page");
                }
                self.signed_in = false;
                self.page_mode = PageMode::Landing;
                self.active_view = View::default();
            }
        }
    }
}

/// Session values for the shell: the initial fetch, then every pushed change.
#[derive(Debug)]
pub struct SessionStream {
    initial: Option<Option<Session>>,
    subscription: SessionSubscription,
}

impl SessionStream {
    /// Next session value, or `None` once the provider is gone.
    pub async fn next(&mut self) -> Option<Option<Session>> {
        if let Some(initial) = self.initial.take() {
            return Some(initial);
        }
        self.subscription.recv().await.map(|event| event.into_session())
    }

    /// Release the underlying subscription.
    pub fn unsubscribe(self) {
        self.subscription.unsubscribe();
    }
}

/// Subscribe to `provider` and fetch the current user.
///
/// The subscription is opened before the fetch so no change between the two
/// is missed. A failed fetch counts as "absent": the shell never enters the
/// application on an error.
pub async fn observe_session(provider: &dyn SessionProvider) -> SessionStream {
    let subscription = provider.on_session_change();
    let initial = match provider.current_user().await {
        Ok(session) => session,
        Err(e) => {
            warn!("Could not fetch current user, treating as signed out: {}", e);
            None
        }
    };
    SessionStream {
        initial: Some(initial),
        subscription,
    }
}

/// Deliver every value of `stream` to `on_change` until the provider goes
/// away. Dropping the returned future drops the stream, which releases the
/// subscription; nothing is delivered after that.
pub async fn follow_session<F>(mut stream: SessionStream, mut on_change: F)
where
    F: FnMut(Option<Session>),
{
    while let Some(session) = stream.next().await {
        on_change(session);
    }
    debug!("Session provider closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserProfile;

    fn session() -> Session {
        Session {
            access_token: "token".to_string(),
            refresh_token: None,
            expires_at: None,
            user: UserProfile {
                id: "u1".to_string(),
                email: Some("u1@example.com".to_string()),
                display_name: None,
                avatar_url: None,
            },
        }
    }

    #[test]
    fn test_initial_state() {
        let shell = NavigationShell::new();
        assert_eq!(shell.page_mode(), PageMode::Landing);
        assert_eq!(shell.active_view(), View::Feed);
        assert!(!shell.is_signed_in());
    }

    #[test]
    fn test_enter_app_requires_session() {
        let mut shell = NavigationShell::new();
        assert!(!shell.enter_app());
        assert_eq!(shell.page_mode(), PageMode::Landing);

        shell.apply_session(Some(&session()));
        assert_eq!(shell.page_mode(), PageMode::Landing);
        assert!(shell.enter_app());
        assert_eq!(shell.page_mode(), PageMode::Application);
    }

    #[test]
    fn test_entry_action_follows_session() {
        let mut shell = NavigationShell::new();
        assert_eq!(shell.entry_action(), EntryAction::SignIn);

        shell.apply_session(Some(&session()));
        assert_eq!(shell.entry_action(), EntryAction::OpenApp);

        shell.apply_session(None);
        assert_eq!(shell.entry_action(), EntryAction::SignIn);
    }

    #[test]
    fn test_exit_app_keeps_view() {
        let mut shell = NavigationShell::new();
        shell.apply_session(Some(&session()));
        shell.enter_app();
        shell.set_active_view(View::Orders);

        shell.exit_app();
        assert_eq!(shell.page_mode(), PageMode::Landing);
        assert_eq!(shell.active_view(), View::Orders);
        assert!(shell.is_signed_in());
    }

    #[test]
    fn test_set_active_view_does_not_touch_page_mode() {
        let mut shell = NavigationShell::new();
        shell.set_active_view(View::Stats);
        assert_eq!(shell.page_mode(), PageMode::Landing);

        shell.apply_session(Some(&session()));
        shell.enter_app();
        shell.set_active_view(View::Account);
        assert_eq!(shell.page_mode(), PageMode::Application);
        assert_eq!(shell.active_view(), View::Account);
    }

    #[test]
    fn test_session_loss_resets_to_landing_and_feed() {
        let mut shell = NavigationShell::new();
        shell.apply_session(Some(&session()));
        shell.enter_app();
        shell.set_active_view(View::Messaging);

        shell.apply_session(None);
        assert_eq!(shell.page_mode(), PageMode::Landing);
        assert_eq!(shell.active_view(), View::Feed);

        shell.apply_session(Some(&session()));
        shell.enter_app();
        assert_eq!(shell.active_view(), View::Feed);
    }

    #[test]
    fn test_refresh_keeps_application() {
        let mut shell = NavigationShell::new();
        shell.apply_session(Some(&session()));
        shell.enter_app();
        shell.set_active_view(View::Filters);

        shell.apply_session(Some(&session()));
        assert_eq!(shell.page_mode(), PageMode::Application);
        assert_eq!(shell.active_view(), View::Filters);
    }
}
