//! Literal datasets behind the dashboard views, plus the local logic each
//! view applies to its own copy (search, toggles, add/edit/delete).
//!
//! Nothing here is shared between views: every view builds its own copy
//! from these constructors and mutates only that copy.

pub mod autocoop;
pub mod feed;
pub mod filters;
pub mod messaging;
pub mod money;
pub mod orders;
pub mod search;
pub mod stats;

pub use autocoop::{autocoop_items, confirm_purchase, AutocoopItem, AutocoopStatus, PurchaseKind};
pub use feed::{buyer_account, products, BuyerAccount, FeedFilters, ItemCondition, Product};
pub use filters::{FilterBook, FilterDraft, FilterItem, CATEGORY_OPTIONS};
pub use messaging::{Conversation, Inbox, Message, Sender};
pub use money::{format_eur, parse_amount};
pub use orders::{filter_orders, orders, status_counts, Order, OrderStatus, StatusFilter};
pub use search::{matches_query, search, toggle_flag};
pub use stats::{stats_snapshot, CategoryShare, Sale, StatsSnapshot, TimeRange, Trend};

/// Colour family of a status pill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Success,
    Danger,
    Info,
    Neutral,
}

impl StatusTone {
    /// CSS modifier class
    pub fn class(&self) -> &'static str {
        match self {
            StatusTone::Warning => "tone-warning",
            StatusTone::Success => "tone-success",
            StatusTone::Danger => "tone-danger",
            StatusTone::Info => "tone-info",
            StatusTone::Neutral => "tone-neutral",
        }
    }
}

/// Stock photos used by the mock catalogs
pub(crate) const IMG_SWEATER: &str = "https://images.pexels.com/photos/297933/pexels-photo-297933.jpeg?auto=compress&cs=tinysrgb";
pub(crate) const IMG_JACKET: &str = "https://images.pexels.com/photos/1040173/pexels-photo-1040173.jpeg?auto=compress&cs=tinysrgb";
pub(crate) const IMG_SHOES: &str = "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg?auto=compress&cs=tinysrgb";

/// Stock photo at a given width
pub(crate) fn photo(base: &str, width: u32) -> String {
    format!("{}&w={}", base, width)
}
