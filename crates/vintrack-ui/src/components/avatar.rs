//! Avatar Component
//!
//! Profile picture, or a red disc with the user's initial when there is none.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    pub fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar avatar-sm",
            AvatarSize::Medium => "avatar avatar-md",
            AvatarSize::Large => "avatar avatar-lg",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// Letter shown without a picture
    pub initial: String,
    #[props(default)]
    pub image_url: Option<String>,
    #[props(default)]
    pub size: AvatarSize,
    /// Green presence dot
    #[props(default = false)]
    pub online: bool,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let class = props.size.class();
    rsx! {
        div { class: "{class}",
            match &props.image_url {
                Some(url) => rsx! { img { src: "{url}", alt: "{props.initial}" } },
                None => rsx! { span { class: "avatar-initial", "{props.initial}" } },
            }
            if props.online {
                span { class: "presence-dot" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_size_classes() {
        assert_eq!(AvatarSize::default(), AvatarSize::Medium);
        assert_eq!(AvatarSize::Large.class(), "avatar avatar-lg");
    }
}
