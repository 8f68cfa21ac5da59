//! VinTrack Core Library
//!
//! Everything behind the VinTrack desktop app that does not draw pixels.
//!
//! ## Overview
//!
//! - [`shell`]: the session-gated navigation shell (landing page vs.
//!   application, active view) and the glue that feeds it session changes.
//! - [`session`]: the identity provider contract, a Supabase (GoTrue) client
//!   with Discord OAuth, and an in-memory demo provider.
//! - [`views`]: the view registry and sidebar layout.
//! - [`catalog`]: the datasets each dashboard view shows and the local edits
//!   it allows (search, toggles, add/edit/delete).
//! - [`landing`]: content of the public landing page.
//! - [`config`]: the TOML configuration file and environment overrides.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vintrack_core::{follow_session, observe_session, DemoSessionProvider, NavigationShell};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = DemoSessionProvider::signed_in();
//!     let mut shell = NavigationShell::new();
//!
//!     let stream = observe_session(&provider).await;
//!     follow_session(stream, |session| {
//!         shell.apply_session(session.as_ref());
//!         println!("{:?}", shell.page_mode());
//!     })
//!     .await;
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod landing;
pub mod session;
pub mod shell;
pub mod views;

pub use config::{AppConfig, AuthBackend, AuthConfig, LinksConfig};
pub use error::{VintrackError, VintrackResult};
pub use session::{
    provider_from_config, AuthChange, DemoSessionProvider, OAuthProvider, Session, SessionEvent,
    SessionProvider, SessionSubscription, SharedSessionProvider, SupabaseAuth, UserProfile,
};
pub use shell::{
    follow_session, observe_session, EntryAction, NavigationShell, PageMode, SessionStream,
};
pub use views::{sidebar_sections, NavEntry, NavIcon, NavSection, NavTarget, View};
