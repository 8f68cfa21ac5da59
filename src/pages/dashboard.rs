//! Authenticated application: sidebar, header and the active view.

use dioxus::prelude::*;
use vintrack_core::View;

use crate::components::{
    AccountView, AutocoopView, FeedView, FiltersView, Header, MessagingView, OrdersView, Sidebar,
    StatsView,
};
use crate::context::use_shell;

#[component]
pub fn Dashboard() -> Element {
    let shell = use_shell();
    let view = shell.read().active_view();
    tracing::trace!(view = %view, "Rendering dashboard");

    rsx! {
        div { class: "dashboard",
            Sidebar {}
            div { class: "dashboard-main",
                Header {}
                main { class: "dashboard-content",
                    match view {
                        View::Feed => rsx! { FeedView {} },
                        View::Autocoop => rsx! { AutocoopView {} },
                        View::Filters => rsx! { FiltersView {} },
                        View::Stats => rsx! { StatsView {} },
                        View::Orders => rsx! { OrdersView {} },
                        View::Messaging => rsx! { MessagingView {} },
                        View::Account => rsx! { AccountView {} },
                    }
                }
            }
        }
    }
}
