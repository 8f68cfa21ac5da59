//! Add/edit modal for a saved filter.

use dioxus::prelude::*;
use vintrack_core::catalog::{FilterDraft, CATEGORY_OPTIONS};
use vintrack_ui::{Button, ButtonVariant, Input, Modal, ToggleSwitch};

const SIZE_OPTIONS: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];
const COLOR_OPTIONS: [&str; 6] = ["Noir", "Blanc", "Rouge", "Bleu", "Vert", "Jaune"];

#[derive(Clone, PartialEq, Props)]
pub struct FilterModalProps {
    /// Starting values; id 0 means a new filter
    pub draft: FilterDraft,
    pub onsave: EventHandler<FilterDraft>,
    pub onclose: EventHandler<()>,
}

#[component]
pub fn FilterModal(props: FilterModalProps) -> Element {
    let initial = props.draft.clone();
    let mut draft = use_signal(move || initial);
    let mut brand_input = use_signal(String::new);

    let title = draft.read().title().to_string();
    let submit_label = if draft.read().is_new() { "Ajouter" } else { "Modifier" };
    let can_save = !draft.read().name.trim().is_empty();

    let mut add_brand = move || {
        let value = brand_input();
        if draft.write().add_brand(&value) {
            brand_input.set(String::new());
        }
    };

    rsx! {
        Modal {
            title,
            onclose: move |_| props.onclose.call(()),
            div { class: "filter-form",
                Input {
                    label: "Nom du filtre".to_string(),
                    placeholder: "Nom du filtre".to_string(),
                    value: draft.read().name.clone(),
                    oninput: move |v| draft.write().name = v,
                }

                div { class: "form-field",
                    label { class: "input-label", "Catégories" }
                    div { class: "chip-list",
                        for category in draft.read().categories.clone() {
                            span { key: "{category}", class: "chip",
                                "{category}"
                                button {
                                    class: "chip-remove",
                                    r#type: "button",
                                    onclick: {
                                        let category = category.clone();
                                        move |_| draft.write().remove_category(&category)
                                    },
                                    "\u{00D7}"
                                }
                            }
                        }
                    }
                    select {
                        class: "input-field",
                        value: "",
                        onchange: move |e| {
                            draft.write().add_category(&e.value());
                        },
                        option { value: "", "Sélectionnez des catégories" }
                        for category in CATEGORY_OPTIONS {
                            option { key: "{category}", value: "{category}", "{category}" }
                        }
                    }
                }

                div { class: "form-field",
                    label { class: "input-label", "Marques" }
                    div { class: "chip-list",
                        for brand in draft.read().brands.clone() {
                            span { key: "{brand}", class: "chip",
                                "{brand}"
                                button {
                                    class: "chip-remove",
                                    r#type: "button",
                                    onclick: {
                                        let brand = brand.clone();
                                        move |_| draft.write().remove_brand(&brand)
                                    },
                                    "\u{00D7}"
                                }
                            }
                        }
                    }
                    Input {
                        placeholder: "Recherchez des marques".to_string(),
                        value: brand_input(),
                        oninput: move |v| brand_input.set(v),
                        onsubmit: move |_| add_brand(),
                    }
                }

                div { class: "form-row",
                    div { class: "form-field",
                        label { class: "input-label", "Tailles" }
                        select {
                            class: "input-field",
                            value: "{draft.read().sizes}",
                            onchange: move |e| draft.write().sizes = e.value(),
                            option { value: "", "Sélectionnez des tailles" }
                            for size in SIZE_OPTIONS {
                                option { key: "{size}", value: "{size}", "{size}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { class: "input-label", "Couleurs" }
                        select {
                            class: "input-field",
                            value: "{draft.read().colors}",
                            onchange: move |e| draft.write().colors = e.value(),
                            option { value: "", "Sélectionnez des couleurs" }
                            for color in COLOR_OPTIONS {
                                option { key: "{color}", value: "{color}", "{color}" }
                            }
                        }
                    }
                }

                div { class: "form-field",
                    label { class: "input-label", "États" }
                    ToggleSwitch {
                        checked: draft.read().mask_reposts,
                        label: "Masquer les repost".to_string(),
                        ontoggle: move |_| {
                            let mut d = draft.write();
                            d.mask_reposts = !d.mask_reposts;
                        },
                    }
                    ToggleSwitch {
                        checked: draft.read().notified,
                        label: "Réception des notifications".to_string(),
                        ontoggle: move |_| {
                            let mut d = draft.write();
                            d.notified = !d.notified;
                        },
                    }
                    ToggleSwitch {
                        checked: draft.read().active,
                        label: "Sniper cet article".to_string(),
                        ontoggle: move |_| {
                            let mut d = draft.write();
                            d.active = !d.active;
                        },
                    }
                }

                div { class: "modal-actions",
                    Button {
                        disabled: !can_save,
                        onclick: move |_| props.onsave.call(draft()),
                        "{submit_label}"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| props.onclose.call(()),
                        "Annuler"
                    }
                }
            }
        }
    }
}
