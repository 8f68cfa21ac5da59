//! Status Pill Component
//!
//! Rounded label coloured by a [`StatusTone`].

use dioxus::prelude::*;
use vintrack_core::catalog::StatusTone;

use super::button::join_classes;

/// Full class list for a pill of `tone`
pub fn pill_class(tone: StatusTone) -> String {
    join_classes(&["status-pill", tone.class()])
}

#[component]
pub fn StatusPill(label: String, tone: StatusTone) -> Element {
    let class = pill_class(tone);
    rsx! {
        span { class: "{class}", "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_classes() {
        assert_eq!(pill_class(StatusTone::Warning), "status-pill tone-warning");
        assert_eq!(pill_class(StatusTone::Danger), "status-pill tone-danger");
    }
}
