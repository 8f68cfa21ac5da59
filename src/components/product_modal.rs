//! Product details modal opened from a feed card.

use dioxus::prelude::*;
use vintrack_core::catalog::{format_eur, Product};
use vintrack_ui::{Avatar, AvatarSize, Button, ButtonVariant, Modal, RatingStars};

use crate::components::{icon, Glyph};

#[component]
pub fn ProductModal(product: Product, onclose: EventHandler<()>) -> Element {
    let seller_initial = product
        .seller
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let cover = product.cover().unwrap_or_default().to_string();
    let extra: Vec<String> = product.images.iter().skip(1).take(2).cloned().collect();

    rsx! {
        Modal {
            title: product.title.clone(),
            onclose: move |_| onclose.call(()),
            class: "modal-wide".to_string(),
            div { class: "muted small", "{product.brand} - {product.size}" }

            div { class: "gallery",
                div { class: "gallery-main",
                    img { src: "{cover}", alt: "{product.title}" }
                    span { class: "condition-badge", "{product.condition}" }
                }
                div { class: "gallery-side",
                    for (i, image) in extra.iter().enumerate() {
                        img { key: "{i}", src: "{image}", alt: "{product.title} {i + 2}" }
                    }
                }
            }

            div { class: "seller-row",
                Avatar { initial: seller_initial, size: AvatarSize::Medium }
                div {
                    div { class: "seller-name", "{product.seller}" }
                    RatingStars { rating: product.rating, reviews: product.reviews }
                }
            }

            div { class: "modal-price",
                div { class: "price-large", "{format_eur(product.price)}" }
                div { class: "muted", "(= {format_eur(product.total_price)})" }
            }

            div { class: "product-stats spaced",
                span { class: "muted", "{product.posted}" }
                span { {icon(Glyph::Eye, 14)} "{product.views}" }
                span { {icon(Glyph::Star, 14)} "{product.likes}" }
            }

            div { class: "modal-section",
                div { class: "section-label", "{product.condition}" }
            }

            div { class: "modal-section",
                div { class: "section-label", "Filtres correspondants" }
                div { class: "muted small", "evhan filtre" }
                button { class: "link-btn success", "voir le filtre" }
            }

            div { class: "modal-actions",
                Button { variant: ButtonVariant::Secondary, "Voir sur vinted" }
                Button { variant: ButtonVariant::Success, "Acheter" }
            }
        }
    }
}
