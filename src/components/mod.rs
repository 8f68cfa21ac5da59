//! Dashboard components for VinTrack.
//!
//! One module per dashboard view plus the chrome around them. Shared
//! building blocks (buttons, inputs, modal) come from `vintrack-ui`.

mod account_page;
mod autocoop_table;
mod feed;
mod filter_modal;
mod filters_page;
mod header;
mod icons;
mod login_button;
mod messaging_page;
mod orders_page;
mod product_modal;
mod sidebar;
mod stats_page;

pub use account_page::AccountView;
pub use autocoop_table::AutocoopView;
pub use feed::FeedView;
pub use filter_modal::FilterModal;
pub use filters_page::FiltersView;
pub use header::Header;
pub use icons::{icon, nav_glyph, Glyph};
pub use login_button::LoginButton;
pub use messaging_page::MessagingView;
pub use orders_page::OrdersView;
pub use product_modal::ProductModal;
pub use sidebar::Sidebar;
pub use stats_page::StatsView;
