//! Reusable UI components
//!
//! Stateless pieces driven entirely by props. Class names are computed by
//! small `class()` helpers so they can be unit tested without a renderer.

mod avatar;
mod button;
mod input;
mod modal;
mod rating;
mod status_pill;
mod toggle;

pub use avatar::*;
pub use button::*;
pub use input::*;
pub use modal::*;
pub use rating::*;
pub use status_pill::*;
pub use toggle::*;
