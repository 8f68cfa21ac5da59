//! Modal overlay
//!
//! Clicking the backdrop closes; clicks inside the panel do not bubble out.

use dioxus::prelude::*;

use super::button::{join_classes, CloseButton};

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    pub title: String,
    pub onclose: EventHandler<()>,
    pub children: Element,
    /// Extra panel classes (width variants)
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Modal(props: ModalProps) -> Element {
    let panel_class = join_classes(&["modal-panel", props.class.as_deref().unwrap_or("")]);
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| props.onclose.call(()),
            div {
                class: "{panel_class}",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    CloseButton { onclick: move |_| props.onclose.call(()) }
                }
                div { class: "modal-body", {props.children} }
            }
        }
    }
}
