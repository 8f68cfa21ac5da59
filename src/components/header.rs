//! Dashboard header: autocoop switch, notifications and the user chip.

use dioxus::prelude::*;
use vintrack_core::View;
use vintrack_ui::{Avatar, AvatarSize, IconButton, ToggleSwitch};

use crate::components::{icon, Glyph};
use crate::context::{use_session, use_shell};

#[component]
pub fn Header() -> Element {
    let mut shell = use_shell();
    let session = use_session();
    let mut autocoop = use_signal(|| true);

    let user = session.read().as_ref().map(|s| s.user.clone());
    let (status, hint) = if autocoop() {
        ("Autocoop actif", "Cliquez pour désactiver")
    } else {
        ("Autocoop inactif", "Cliquez pour activer")
    };

    rsx! {
        header { class: "dashboard-header",
            div { class: "autocoop-switch", title: "{hint}",
                ToggleSwitch {
                    checked: autocoop(),
                    ontoggle: move |_| autocoop.toggle(),
                    aria_label: hint.to_string(),
                }
                div { class: "autocoop-text",
                    span { class: if autocoop() { "autocoop-status on" } else { "autocoop-status" }, "{status}" }
                    span { class: "muted small", "{hint}" }
                }
            }

            div { class: "header-actions",
                IconButton { aria_label: "Notifications".to_string(), class: "bell".to_string(),
                    {icon(Glyph::Bell, 20)}
                    span { class: "notification-dot" }
                }

                button {
                    class: "user-chip",
                    onclick: move |_| shell.write().set_active_view(View::Account),
                    match &user {
                        Some(user) => rsx! {
                            Avatar {
                                initial: user.initial(),
                                image_url: user.avatar_url.clone(),
                                size: AvatarSize::Small,
                            }
                        },
                        None => rsx! { span { class: "avatar avatar-sm", {icon(Glyph::User, 16)} } },
                    }
                    div { class: "user-chip-text",
                        span { class: "user-chip-name",
                            {user.as_ref().map(|u| u.label().to_string()).unwrap_or_default()}
                        }
                        span { class: "user-chip-role", "Utilisateur" }
                    }
                    {icon(Glyph::ChevronDown, 16)}
                }
            }
        }
    }
}
