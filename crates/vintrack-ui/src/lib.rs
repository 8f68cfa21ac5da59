//! VinTrack UI Components
//!
//! Dioxus building blocks shared by the landing page and the dashboard.
//!
//! ## Look
//!
//! Black surfaces, white text and a single red accent:
//! - **Red (#dc2626)**: primary actions, active navigation, brand mark
//! - **Zinc (#18181b / #27272a)**: cards, borders, inputs
//! - **Status tones**: amber pending, green done, red cancelled, blue in transit
//!
//! Components only emit class names; the stylesheet lives in the app crate.

pub mod components;

pub use components::*;
