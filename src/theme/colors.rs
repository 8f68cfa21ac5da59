//! Color constants
//!
//! Black surfaces, zinc cards and a single red accent. Mirrors the custom
//! properties declared at the top of the stylesheet.

#![allow(dead_code)]

// === SURFACES ===
pub const BLACK: &str = "#000000";
pub const SURFACE: &str = "#101014";
pub const SURFACE_RAISED: &str = "#181820";
pub const SURFACE_HOVER: &str = "#23232b";
pub const BORDER: &str = "#27272a";

// === ACCENT ===
pub const RED: &str = "#ef4444";
pub const RED_DEEP: &str = "#dc2626";
pub const RED_SOFT: &str = "rgba(239, 68, 68, 0.2)";
pub const DISCORD: &str = "#5865f2";
pub const DISCORD_HOVER: &str = "#404eed";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#d1d5db";
pub const TEXT_MUTED: &str = "#9ca3af";

// === STATUS TONES ===
pub const WARNING: &str = "#facc15";
pub const SUCCESS: &str = "#4ade80";
pub const DANGER: &str = "#f87171";
pub const INFO: &str = "#60a5fa";
