//! "Mes commandes" view.

use dioxus::prelude::*;
use vintrack_core::catalog::{filter_orders, format_eur, orders, status_counts, Order, StatusFilter};
use vintrack_ui::{Button, ButtonVariant, IconButton, SearchInput, StatusPill};

use crate::components::{icon, Glyph};

#[component]
pub fn OrdersView() -> Element {
    let all = use_hook(orders);
    let mut status = use_signal(StatusFilter::default);
    let mut query = use_signal(String::new);

    let counts = status_counts(&all);
    let shown: Vec<Order> = filter_orders(&all, status(), &query.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "view orders-view",
            div { class: "view-header",
                h1 { class: "view-title", "Mes commandes" }
                p { class: "muted", "Suivez l'état de vos commandes et gérez vos achats." }
            }

            div { class: "status-cards",
                for (filter, count) in counts {
                    button {
                        key: "{filter.label()}",
                        class: if filter == status() { "card status-card active" } else { "card status-card" },
                        onclick: move |_| status.set(filter),
                        div { class: "status-count", "{count}" }
                        div { class: "small", "{filter.label()}" }
                    }
                }
            }

            div { class: "toolbar",
                div { class: "toolbar-left",
                    SearchInput {
                        value: query(),
                        oninput: move |q| query.set(q),
                        placeholder: "Rechercher une commande...".to_string(),
                    }
                    Button { variant: ButtonVariant::Secondary, {icon(Glyph::Filter, 16)} "Filtrer" }
                }
            }

            if shown.is_empty() {
                div { class: "empty-state",
                    {icon(Glyph::Package, 40)}
                    div { class: "empty-title", "Aucune commande trouvée" }
                }
            } else {
                div { class: "card table-card",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Commande" }
                                th { "Article" }
                                th { "Vendeur" }
                                th { "Prix" }
                                th { "Date" }
                                th { "Statut" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for order in shown {
                                OrderRow { key: "{order.id}", order: order.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(order: Order) -> Element {
    let ordered_on = order.ordered_on.format("%d/%m/%Y").to_string();
    let delivery = order
        .estimated_delivery
        .filter(|_| order.shows_estimated_delivery())
        .map(|d| d.format("%d/%m/%Y").to_string());

    rsx! {
        tr {
            td {
                div { class: "item-name", "{order.id}" }
                if let Some(tracking) = &order.tracking_number {
                    div { class: "muted small", "{tracking}" }
                }
            }
            td {
                div { class: "item-name", "{order.item}" }
                if let Some(date) = delivery {
                    div { class: "info small", "Livraison prévue: {date}" }
                }
            }
            td { class: "muted", "{order.seller}" }
            td { class: "price", "{format_eur(order.price)}" }
            td { class: "muted", "{ordered_on}" }
            td {
                StatusPill { label: order.status.label().to_string(), tone: order.status.tone() }
            }
            td {
                div { class: "row-actions",
                    IconButton { aria_label: "Voir".to_string(), {icon(Glyph::Eye, 16)} }
                    IconButton { aria_label: "Contacter le vendeur".to_string(), {icon(Glyph::Message, 16)} }
                    if order.tracking_number.is_some() {
                        IconButton { aria_label: "Suivre le colis".to_string(), {icon(Glyph::Truck, 16)} }
                    }
                }
            }
        }
    }
}
