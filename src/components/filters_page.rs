//! "Mes filtres" view: saved filters with sniper and notification switches.

use dioxus::prelude::*;
use vintrack_core::catalog::{FilterBook, FilterDraft, FilterItem};
use vintrack_ui::{Button, ButtonVariant, IconButton, SearchInput, ToggleSwitch};

use crate::components::{icon, FilterModal, Glyph};

#[component]
pub fn FiltersView() -> Element {
    let mut book = use_signal(FilterBook::new);
    let mut query = use_signal(String::new);
    let mut editing: Signal<Option<FilterDraft>> = use_signal(|| None);

    let total = book.read().len();
    let shown: Vec<FilterItem> = book.read().search(&query.read()).into_iter().cloned().collect();

    rsx! {
        div { class: "view filters-view",
            div { class: "view-header",
                h1 { class: "view-title", "Mes filtres" }
                p { class: "muted",
                    "Retrouvez l'ensemble de vos filtres. Créez, modifiez et supprimez vos filtres au sein de notre plateforme."
                }
            }

            div { class: "toolbar",
                div { class: "toolbar-left",
                    SearchInput {
                        value: query(),
                        oninput: move |q| query.set(q),
                        placeholder: "Tapez pour rechercher".to_string(),
                    }
                    Button { variant: ButtonVariant::Secondary, {icon(Glyph::Filter, 16)} "Filtrer" }
                    Button { variant: ButtonVariant::Secondary, "Actions" {icon(Glyph::ChevronDown, 16)} }
                }
                div { class: "toolbar-right",
                    span { class: "muted small", "TOTAL: {total}" }
                    Button {
                        onclick: move |_| editing.set(Some(FilterDraft::blank())),
                        {icon(Glyph::Plus, 16)}
                        "Ajouter un filtre"
                    }
                }
            }

            if shown.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-title", "Aucun filtre trouvé" }
                    div { class: "muted", "Essayez de modifier votre recherche" }
                }
            } else {
                div { class: "card table-card",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Nom" }
                                th { "Tags" }
                                th { "Catégories" }
                                th { "Marques" }
                                th { "Sniper" }
                                th { "Notif." }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for filter in shown {
                                FilterRow {
                                    key: "{filter.id}",
                                    filter: filter.clone(),
                                    ontoggle_active: move |id| {
                                        book.write().toggle_active(id);
                                    },
                                    ontoggle_notified: move |id| {
                                        book.write().toggle_notified(id);
                                    },
                                    onedit: move |f: FilterItem| editing.set(Some(FilterDraft::from_filter(&f))),
                                    ondelete: move |id| {
                                        book.write().delete(id);
                                    },
                                }
                            }
                        }
                    }
                }
            }

            if let Some(draft) = editing() {
                FilterModal {
                    draft,
                    onsave: move |draft: FilterDraft| {
                        if book.write().save(draft).is_some() {
                            editing.set(None);
                        }
                    },
                    onclose: move |_| editing.set(None),
                }
            }
        }
    }
}

#[component]
fn FilterRow(
    filter: FilterItem,
    ontoggle_active: EventHandler<u32>,
    ontoggle_notified: EventHandler<u32>,
    onedit: EventHandler<FilterItem>,
    ondelete: EventHandler<u32>,
) -> Element {
    let id = filter.id;
    let edited = filter.clone();

    rsx! {
        tr {
            td {
                div { class: "filter-name-cell",
                    span { class: "accent-bar" }
                    div {
                        div { class: "item-name", "{filter.name}" }
                        if !filter.price_label.is_empty() {
                            div { class: "muted small", "{filter.price_label}" }
                        }
                        div { class: "muted tiny", "{filter.description}" }
                    }
                }
            }
            td {
                IconButton { aria_label: "Ajouter un tag".to_string(), {icon(Glyph::Plus, 14)} }
            }
            td {
                div { class: "chip-list",
                    for category in filter.categories.iter() {
                        span { key: "{category}", class: "chip", "{category}" }
                    }
                }
            }
            td {
                div { class: "chip-list",
                    for brand in filter.brands.iter() {
                        span { key: "{brand}", class: "chip", "{brand}" }
                    }
                }
            }
            td {
                ToggleSwitch {
                    checked: filter.active,
                    aria_label: "Sniper".to_string(),
                    ontoggle: move |_| ontoggle_active.call(id),
                }
            }
            td {
                ToggleSwitch {
                    checked: filter.notified,
                    aria_label: "Notifications".to_string(),
                    ontoggle: move |_| ontoggle_notified.call(id),
                }
            }
            td {
                div { class: "row-actions",
                    IconButton {
                        aria_label: "Modifier".to_string(),
                        onclick: move |_| onedit.call(edited.clone()),
                        {icon(Glyph::Edit, 16)}
                    }
                    IconButton {
                        aria_label: "Supprimer".to_string(),
                        class: "danger".to_string(),
                        onclick: move |_| ondelete.call(id),
                        {icon(Glyph::Trash, 16)}
                    }
                }
            }
        }
    }
}
