//! Fan-out of auth state changes.
//!
//! Providers own a [`SessionChannel`] and publish every change on it; each
//! consumer holds a [`SessionSubscription`]. Releasing a subscription is tied
//! to ownership: `unsubscribe` consumes it and dropping it has the same
//! effect, so a subscription is released exactly once.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{trace, warn};

use super::SessionEvent;

/// Capacity of the auth event channel
pub const SESSION_CHANNEL_CAPACITY: usize = 64;

/// Sending side of the auth event channel, held by a provider.
#[derive(Debug, Clone)]
pub struct SessionChannel {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionChannel {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(SESSION_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Push an event to every live subscription.
    ///
    /// Returns how many subscriptions received it; publishing with nobody
    /// listening is not an error.
    pub fn publish(&self, event: SessionEvent) -> usize {
        trace!(change = ?event.change, signed_in = event.session.is_some(), "Publishing auth change");
        self.tx.send(event).unwrap_or(0)
    }

    /// Open a new subscription that sees every event published from now on.
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of subscriptions currently held
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SessionChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of the auth event channel.
#[derive(Debug)]
pub struct SessionSubscription {
    rx: broadcast::Receiver<SessionEvent>,
}

impl SessionSubscription {
    /// Wait for the next auth change.
    ///
    /// Returns `None` once the provider is gone. A subscriber that fell
    /// behind skips the overwritten events and keeps going; only the latest
    /// session matters to consumers.
    pub async fn recv(&mut self) -> Option<SessionEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Session subscription lagged, skipping stale auth events");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Release the subscription. No further events are delivered to it.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        trace!("Session subscription released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AuthChange, Session, UserProfile};

    fn session(token: &str) -> Session {
        Session {
            access_token: token.to_string(),
            refresh_token: None,
            expires_at: None,
            user: UserProfile {
                id: "u1".to_string(),
                email: None,
                display_name: None,
                avatar_url: None,
            },
        }
    }

    #[tokio::test]
    async fn test_subscription_receives_in_order() {
        let channel = SessionChannel::new();
        let mut sub = channel.subscribe();

        channel.publish(SessionEvent::signed_in(session("a")));
        channel.publish(SessionEvent::signed_out());

        let first = sub.recv().await.unwrap();
        assert_eq!(first.change, AuthChange::SignedIn);
        assert_eq!(first.session.unwrap().access_token, "a");

        let second = sub.recv().await.unwrap();
        assert_eq!(second.change, AuthChange::SignedOut);
        assert!(second.session.is_none());
    }

    #[tokio::test]
    async fn test_unsubscribe_releases_receiver() {
        let channel = SessionChannel::new();
        let sub = channel.subscribe();
        let other = channel.subscribe();
        assert_eq!(channel.subscriber_count(), 2);

        sub.unsubscribe();
        assert_eq!(channel.subscriber_count(), 1);

        drop(other);
        assert_eq!(channel.subscriber_count(), 0);
        assert_eq!(channel.publish(SessionEvent::signed_out()), 0);
    }

    #[tokio::test]
    async fn test_recv_ends_when_provider_dropped() {
        let channel = SessionChannel::new();
        let mut sub = channel.subscribe();
        drop(channel);
        assert!(sub.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_lagged_subscriber_keeps_latest() {
        let channel = SessionChannel::new();
        let mut sub = channel.subscribe();

        for i in 0..(SESSION_CHANNEL_CAPACITY + 10) {
            channel.publish(SessionEvent::signed_in(session(&i.to_string())));
        }
        channel.publish(SessionEvent::signed_out());

        let mut last = None;
        while let Ok(Some(event)) =
            tokio::time::timeout(std::time::Duration::from_millis(50), sub.recv()).await
        {
            last = Some(event);
        }
        assert_eq!(last.unwrap().change, AuthChange::SignedOut);
    }
}
