//! Live feed view: buyer account, filter panel and product cards.

use std::time::Duration;

use dioxus::prelude::*;
use vintrack_core::catalog::{buyer_account, format_eur, products, FeedFilters, ItemCondition, Product};
use vintrack_ui::{Button, ButtonSize, Checkbox, RatingStars, ToggleSwitch};

use crate::components::{icon, Glyph, ProductModal};

/// Simulated fetch latency before the cards show up
const FEED_LOAD_DELAY: Duration = Duration::from_secs(1);

#[component]
pub fn FeedView() -> Element {
    let mut loading = use_signal(|| true);
    let catalog = use_signal(products);
    let mut filters = use_signal(FeedFilters::default);
    let mut opened: Signal<Option<Product>> = use_signal(|| None);
    let account = use_hook(buyer_account);

    use_future(move || async move {
        tokio::time::sleep(FEED_LOAD_DELAY).await;
        loading.set(false);
    });

    let visible: Vec<Product> = filters
        .read()
        .apply(&catalog.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "view feed-view",
            div { class: "view-header",
                h1 { class: "view-title", "Mon fil d'actualité" }
                p { class: "muted", "Retrouvez les différents articles selon vos filtres en temps réel." }
            }

            div { class: "feed-layout",
                aside { class: "card filter-panel",
                    div { class: "buyer-account",
                        div { class: "muted small", "Compte acheteur" }
                        div { class: "buyer-row",
                            span { class: "avatar avatar-sm", span { class: "avatar-initial", "G" } }
                            span { class: "buyer-name", "{account.username}" }
                            span { class: "buyer-balance", "{format_eur(account.balance)}" }
                        }
                    }

                    div { class: "filter-group",
                        h3 { "Prix" }
                        div { class: "price-range",
                            input {
                                class: "input-field",
                                r#type: "text",
                                inputmode: "decimal",
                                placeholder: "Minimum",
                                value: "{filters.read().min_price}",
                                oninput: move |e| filters.write().min_price = e.value(),
                            }
                            input {
                                class: "input-field",
                                r#type: "text",
                                inputmode: "decimal",
                                placeholder: "Maximum",
                                value: "{filters.read().max_price}",
                                oninput: move |e| filters.write().max_price = e.value(),
                            }
                        }
                    }

                    div { class: "filter-group",
                        h3 { "Marques" }
                        input {
                            class: "input-field",
                            placeholder: "Tapez pour chercher",
                            value: "{filters.read().brand}",
                            oninput: move |e| filters.write().brand = e.value(),
                        }
                    }

                    div { class: "filter-group",
                        h3 { "État des articles" }
                        for condition in ItemCondition::ALL {
                            Checkbox {
                                key: "{condition.label()}",
                                checked: filters.read().has_condition(condition),
                                label: condition.label().to_string(),
                                ontoggle: move |_| filters.write().toggle_condition(condition),
                            }
                        }
                    }

                    div { class: "filter-group",
                        h3 { "Tags" }
                        p { class: "muted small", "Aucune valeur disponible" }
                    }

                    div { class: "filter-group",
                        h3 { "Options" }
                        ToggleSwitch {
                            checked: filters.read().hide_reposts,
                            label: "Masquer les repost".to_string(),
                            ontoggle: move |_| {
                                let mut f = filters.write();
                                f.hide_reposts = !f.hide_reposts;
                            },
                        }
                        ToggleSwitch {
                            checked: filters.read().notifications,
                            label: "Réception des notifications".to_string(),
                            ontoggle: move |_| {
                                let mut f = filters.write();
                                f.notifications = !f.notifications;
                            },
                        }
                        ToggleSwitch {
                            checked: filters.read().sniper,
                            label: "Sniper cet article".to_string(),
                            ontoggle: move |_| {
                                let mut f = filters.write();
                                f.sniper = !f.sniper;
                            },
                        }
                    }
                }

                div { class: "product-grid",
                    if loading() {
                        for i in 0..6 {
                            div { key: "skeleton-{i}", class: "card product-card skeleton",
                                div { class: "skeleton-image" }
                                div { class: "skeleton-line" }
                                div { class: "skeleton-line short" }
                            }
                        }
                    } else {
                        for product in visible {
                            ProductCard {
                                key: "{product.id}",
                                product: product.clone(),
                                onopen: move |p| opened.set(Some(p)),
                            }
                        }
                    }
                }
            }

            if let Some(product) = opened() {
                ProductModal { product, onclose: move |_| opened.set(None) }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product, onopen: EventHandler<Product>) -> Element {
    let cover = product.cover().unwrap_or_default().to_string();
    let opened = product.clone();

    rsx! {
        div {
            class: "card product-card",
            onclick: move |_| onopen.call(opened.clone()),
            div { class: "product-image",
                img { src: "{cover}", alt: "{product.title}" }
                span { class: "condition-badge", "{product.condition}" }
            }
            div { class: "product-info",
                div { class: "muted small", "{product.brand} - {product.size}" }
                div { class: "product-title", "{product.title}" }
                div { class: "product-seller",
                    span { "{product.seller}" }
                    RatingStars { rating: product.rating, reviews: product.reviews }
                }
                div { class: "product-prices",
                    span { class: "price", "{format_eur(product.price)}" }
                    span { class: "muted small", "(= {format_eur(product.total_price)})" }
                }
                div { class: "product-footer",
                    span { class: "muted small", "{product.posted}" }
                    // Keeps the click from opening the product modal
                    span { onclick: move |e| e.stop_propagation(),
                        Button { size: ButtonSize::Small, "Acheter" }
                    }
                }
                div { class: "product-stats",
                    span { {icon(Glyph::Eye, 14)} "{product.views}" }
                    span { {icon(Glyph::Star, 14)} "{product.likes}" }
                }
            }
        }
    }
}
