//! Toggle Switch and Checkbox
//!
//! Both are controlled: they render `checked` and report clicks, the caller
//! owns the state.

use dioxus::prelude::*;

use super::button::join_classes;

pub fn switch_class(checked: bool) -> &'static str {
    if checked {
        "toggle-switch on"
    } else {
        "toggle-switch"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToggleSwitchProps {
    pub checked: bool,
    pub ontoggle: EventHandler<()>,
    /// Text shown next to the switch
    #[props(default)]
    pub label: Option<String>,
    /// Accessible label when there is no visible one
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Pill-shaped on/off switch
#[component]
pub fn ToggleSwitch(props: ToggleSwitchProps) -> Element {
    let class = switch_class(props.checked);
    let aria = props
        .aria_label
        .clone()
        .or_else(|| props.label.clone())
        .unwrap_or_default();

    rsx! {
        label { class: "toggle-row",
            button {
                class: "{class}",
                r#type: "button",
                role: "switch",
                "aria-checked": "{props.checked}",
                "aria-label": "{aria}",
                onclick: move |_| props.ontoggle.call(()),
                span { class: "toggle-knob" }
            }
            if let Some(label) = &props.label {
                span { class: "toggle-label", "{label}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    pub checked: bool,
    pub label: String,
    pub ontoggle: EventHandler<()>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let class = join_classes(&["checkbox-row", props.class.as_deref().unwrap_or("")]);
    rsx! {
        label { class: "{class}",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |_| props.ontoggle.call(()),
            }
            span { "{props.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_classes() {
        assert_eq!(switch_class(true), "toggle-switch on");
        assert_eq!(switch_class(false), "toggle-switch");
    }
}
