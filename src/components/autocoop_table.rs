//! "Mon autocoop" view: items bought or being bought by the bot.

use dioxus::prelude::*;
use vintrack_core::catalog::{autocoop_items, confirm_purchase, format_eur, search, AutocoopItem, AutocoopStatus};
use vintrack_ui::{SearchInput, StatusPill};

#[component]
pub fn AutocoopView() -> Element {
    let mut items = use_signal(autocoop_items);
    let mut query = use_signal(String::new);

    let shown: Vec<AutocoopItem> = search(&items.read(), &query.read(), |item| item.name.as_str())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "view autocoop-view",
            div { class: "view-header",
                h1 { class: "view-title", "Mon autocoop" }
                p { class: "muted", "Retrouvez ici tous vos articles auto-coop ou en cours d'achat." }
            }

            SearchInput {
                value: query(),
                oninput: move |q| query.set(q),
                placeholder: "Tapez pour rechercher".to_string(),
            }

            if shown.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-title", "Aucun article trouvé" }
                    div { class: "muted", "Essayez de modifier votre recherche" }
                }
            } else {
                div { class: "card table-card",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Nom de l'article" }
                                th { "Prix" }
                                th { "Date" }
                                th { "État" }
                                th { "Action" }
                            }
                        }
                        tbody {
                            for item in shown {
                                {
                                    let id = item.id;
                                    let (date, time) = item.date_label();
                                    let pending = item.status == AutocoopStatus::Pending;
                                    rsx! {
                                        tr { key: "{id}",
                                            td {
                                                div { class: "item-cell",
                                                    img { class: "thumb", src: "{item.image}", alt: "{item.name}" }
                                                    div {
                                                        div { class: "item-name", "{item.name}" }
                                                        div { class: "muted small", "{item.kind.label()}" }
                                                    }
                                                }
                                            }
                                            td {
                                                span { class: "price", "{format_eur(item.price)}" }
                                                span { class: "muted small", " (-{format_eur(item.total_price)})" }
                                            }
                                            td { class: "muted", "{date} {time}" }
                                            td {
                                                StatusPill { label: item.status.label().to_string(), tone: item.status.tone() }
                                            }
                                            td {
                                                div { class: "row-actions",
                                                    button {
                                                        class: "link-btn success",
                                                        disabled: !pending,
                                                        onclick: move |_| {
                                                            confirm_purchase(&mut items.write(), id);
                                                        },
                                                        "Confirmer l'achat"
                                                    }
                                                    button { class: "link-btn danger", "Détails" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
