//! Input Field Components
//!
//! Text inputs on zinc surfaces with a red focus ring.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

use super::button::join_classes;

#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, number...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub readonly: bool,
    /// ID for label association, generated when absent
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    /// Fired on Enter
    #[props(default)]
    pub onsubmit: Option<EventHandler<()>>,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Nom du filtre".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_field_id("input"));
    let input_class = join_classes(&["input-field", props.class.as_deref().unwrap_or("")]);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                readonly: props.readonly,
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        if let Some(handler) = &props.onsubmit {
                            handler.call(());
                        }
                    }
                },
            }
        }
    }
}

static FIELD_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique element id for form fields without an explicit one
fn next_field_id(prefix: &str) -> String {
    let n = FIELD_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", prefix, n)
}

#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default = "Rechercher...".to_string())]
    pub placeholder: String,
}

/// Search box with a magnifier icon
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            svg {
                class: "search-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                path { d: "m21 21-4.3-4.3" }
            }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_unique() {
        let a = next_field_id("input");
        let b = next_field_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("input-"));
    }
}
