//! Button Components
//!
//! - Primary: red filled, main call to action
//! - Secondary: zinc outline
//! - Ghost: text only, used in tables and the header
//! - Danger: destructive actions (delete, sign out)
//! - Success: purchase confirmation
//! - Discord: Discord blurple, sign-in only

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
    Success,
    Discord,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Success => "btn btn-success",
            ButtonVariant::Discord => "btn btn-discord",
        }
    }
}

/// Size modifiers
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Join non-empty class fragments with single spaces
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Class list of a [`Button`]
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    extra: Option<&str>,
) -> String {
    join_classes(&[
        variant.class(),
        size.class(),
        if full_width { "btn-block" } else { "" },
        extra.unwrap_or(""),
    ])
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| shell.write().enter_app(),
///         "Accéder au dashboard"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(
        props.variant,
        props.size,
        props.full_width,
        props.class.as_deref(),
    );

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Square button holding a single icon
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes(&["icon-btn", props.class.as_deref().unwrap_or("")]);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            title: "{props.aria_label}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: move |_| onclick.call(()),
            aria_label: "Fermer".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
        assert_eq!(ButtonVariant::Success.class(), "btn btn-success");
        assert_eq!(ButtonVariant::Discord.class(), "btn btn-discord");
    }

    #[test]
    fn button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default().class(), "");
    }

    #[test]
    fn join_classes_skips_empty() {
        assert_eq!(join_classes(&["btn btn-primary", "", "btn-lg", " "]), "btn btn-primary btn-lg");
        assert_eq!(join_classes(&[]), "");
    }

    #[test]
    fn button_class_combines_modifiers() {
        assert_eq!(
            button_class(ButtonVariant::Secondary, ButtonSize::Large, true, None),
            "btn btn-secondary btn-lg btn-block"
        );
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Medium, false, Some("hero-cta")),
            "btn btn-primary hero-cta"
        );
    }
}
