//! Session gating of the navigation shell
//!
//! Drives the shell from real provider subscriptions and checks that the
//! application is only reachable while the latest session is present.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use proptest::prelude::*;
use tokio::sync::mpsc;
use vintrack_core::session::SessionChannel;
use vintrack_core::{
    follow_session, observe_session, DemoSessionProvider, NavigationShell, OAuthProvider,
    PageMode, Session, SessionEvent, SessionProvider, SessionSubscription, UserProfile,
    VintrackError, VintrackResult, View,
};

// ============================================================================
// Helpers
// ============================================================================

fn session(user: &str) -> Session {
    Session {
        access_token: format!("token-{}", user),
        refresh_token: None,
        expires_at: None,
        user: UserProfile {
            id: user.to_string(),
            email: Some(format!("{}@example.com", user)),
            display_name: None,
            avatar_url: None,
        },
    }
}

/// Shell fed by `provider` on a background task.
///
/// Every applied value is acknowledged on the returned receiver so tests can
/// wait for delivery instead of sleeping.
async fn spawn_shell(
    provider: Arc<DemoSessionProvider>,
) -> (
    Arc<Mutex<NavigationShell>>,
    mpsc::UnboundedReceiver<bool>,
    tokio::task::JoinHandle<()>,
) {
    let _ = tracing_subscriber::fmt::try_init();
    let shell = Arc::new(Mutex::new(NavigationShell::new()));
    let (ack_tx, ack_rx) = mpsc::unbounded_channel();

    let stream = observe_session(provider.as_ref()).await;
    let task_shell = shell.clone();
    let handle = tokio::spawn(async move {
        follow_session(stream, move |session| {
            let present = session.is_some();
            task_shell.lock().apply_session(session.as_ref());
            let _ = ack_tx.send(present);
        })
        .await;
    });
    (shell, ack_rx, handle)
}

/// Provider whose lookups always fail
struct FailingProvider {
    channel: SessionChannel,
}

#[async_trait]
impl SessionProvider for FailingProvider {
    async fn current_user(&self) -> VintrackResult<Option<Session>> {
        Err(VintrackError::Auth("identity service unavailable".to_string()))
    }

    fn on_session_change(&self) -> SessionSubscription {
        self.channel.subscribe()
    }

    async fn sign_in_with_provider(&self, _provider: OAuthProvider) -> VintrackResult<()> {
        Err(VintrackError::Auth("identity service unavailable".to_string()))
    }

    async fn sign_out(&self) -> VintrackResult<()> {
        Ok(())
    }
}

// ============================================================================
// Provider-driven tests
// ============================================================================

#[tokio::test]
async fn test_initial_session_delivered_first() {
    let provider = Arc::new(DemoSessionProvider::signed_in());
    let (shell, mut acks, _handle) = spawn_shell(provider).await;

    assert_eq!(acks.recv().await, Some(true));
    let mut shell = shell.lock();
    assert!(shell.is_signed_in());
    assert_eq!(shell.page_mode(), PageMode::Landing);
    assert!(shell.enter_app());
}

#[tokio::test]
async fn test_sign_in_then_out_through_provider() {
    let provider = Arc::new(DemoSessionProvider::new());
    let (shell, mut acks, _handle) = spawn_shell(provider.clone()).await;
    assert_eq!(acks.recv().await, Some(false));
    assert!(!shell.lock().enter_app());

    provider
        .sign_in_with_provider(OAuthProvider::Discord)
        .await
        .unwrap();
    assert_eq!(acks.recv().await, Some(true));
    assert!(shell.lock().enter_app());

    provider.sign_out().await.unwrap();
    assert_eq!(acks.recv().await, Some(false));
    assert_eq!(shell.lock().page_mode(), PageMode::Landing);
}

#[tokio::test]
async fn test_messaging_to_landing_on_session_loss() {
    let provider = Arc::new(DemoSessionProvider::signed_in());
    let (shell, mut acks, _handle) = spawn_shell(provider.clone()).await;
    assert_eq!(acks.recv().await, Some(true));

    {
        let mut shell = shell.lock();
        assert!(shell.enter_app());
        shell.set_active_view(View::Messaging);
    }

    provider.set_session(None);
    assert_eq!(acks.recv().await, Some(false));
    assert_eq!(shell.lock().page_mode(), PageMode::Landing);

    provider.set_session(Some(session("back")));
    assert_eq!(acks.recv().await, Some(true));
    let mut shell = shell.lock();
    assert!(shell.enter_app());
    assert_eq!(shell.active_view(), View::Feed);
}

#[tokio::test]
async fn test_no_mutation_after_teardown() {
    let provider = Arc::new(DemoSessionProvider::new());
    let (shell, mut acks, handle) = spawn_shell(provider.clone()).await;
    assert_eq!(acks.recv().await, Some(false));
    assert_eq!(provider.subscriber_count(), 1);

    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());
    assert_eq!(provider.subscriber_count(), 0);

    let before = shell.lock().clone();
    provider.set_session(Some(session("late")));
    tokio::task::yield_now().await;

    assert_eq!(*shell.lock(), before);
    assert!(!shell.lock().is_signed_in());
    assert_eq!(acks.recv().await, None);
}

#[tokio::test]
async fn test_failed_lookup_counts_as_absent() {
    let provider = FailingProvider {
        channel: SessionChannel::new(),
    };
    let mut stream = observe_session(&provider).await;
    assert_eq!(stream.next().await, Some(None));

    // Pushed changes still arrive after a failed lookup
    provider
        .channel
        .publish(SessionEvent::signed_in(session("pushed")));
    let pushed = stream.next().await.flatten();
    assert_eq!(pushed.map(|s| s.user.id), Some("pushed".to_string()));

    stream.unsubscribe();
    assert_eq!(provider.channel.subscriber_count(), 0);
}

#[tokio::test]
async fn test_stream_ends_with_provider() {
    let provider = DemoSessionProvider::new();
    let mut stream = observe_session(&provider).await;
    assert_eq!(stream.next().await, Some(None));
    drop(provider);
    assert_eq!(stream.next().await, None);
}

// ============================================================================
// Property Tests
// ============================================================================

#[derive(Debug, Clone)]
enum ShellOp {
    Session(bool),
    Enter,
    Exit,
    Select(usize),
}

fn shell_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ShellOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => any::<bool>().prop_map(ShellOp::Session),
            2 => Just(ShellOp::Enter),
            1 => Just(ShellOp::Exit),
            2 => (0..View::ALL.len()).prop_map(ShellOp::Select),
        ],
        0..max_ops,
    )
}

proptest! {
    /// Application mode only while the latest delivered session is present
    #[test]
    fn application_requires_latest_session(ops in shell_ops_strategy(60)) {
        let mut shell = NavigationShell::new();
        let mut latest_present = false;

        for op in ops {
            match op {
                ShellOp::Session(present) => {
                    latest_present = present;
                    let value = present.then(|| session("prop"));
                    shell.apply_session(value.as_ref());
                    if !present {
                        prop_assert_eq!(shell.page_mode(), PageMode::Landing);
                    }
                }
                ShellOp::Enter => {
                    let entered = shell.enter_app();
                    prop_assert_eq!(entered, latest_present);
                }
                ShellOp::Exit => shell.exit_app(),
                ShellOp::Select(i) => {
                    let mode = shell.page_mode();
                    shell.set_active_view(View::ALL[i]);
                    prop_assert_eq!(shell.active_view(), View::ALL[i]);
                    prop_assert_eq!(shell.page_mode(), mode);
                }
            }

            if shell.page_mode() == PageMode::Application {
                prop_assert!(latest_present);
            }
        }
    }

    /// Session loss always lands on the default view
    #[test]
    fn session_loss_resets_view(i in 0..View::ALL.len()) {
        let mut shell = NavigationShell::new();
        shell.apply_session(Some(&session("prop")));
        shell.enter_app();
        shell.set_active_view(View::ALL[i]);

        shell.apply_session(None);
        prop_assert_eq!(shell.page_mode(), PageMode::Landing);
        prop_assert_eq!(shell.active_view(), View::Feed);
    }
}
