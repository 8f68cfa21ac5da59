//! Dashboard sidebar: brand, grouped navigation and the account footer.

use dioxus::prelude::*;
use vintrack_core::{sidebar_sections, NavTarget};
use vintrack_ui::{Avatar, AvatarSize};

use crate::components::{icon, nav_glyph, Glyph, LoginButton};
use crate::context::{use_app_config, use_auth_actions, use_session, use_shell};

#[component]
pub fn Sidebar() -> Element {
    let mut shell = use_shell();
    let session = use_session();
    let auth = use_auth_actions();
    let config = use_app_config();

    let sections = sidebar_sections(&config.links.discord_invite);
    let active = shell.read().active_view();
    let user = session.read().as_ref().map(|s| s.user.clone());

    rsx! {
        aside { class: "sidebar",
            button {
                class: "sidebar-brand",
                title: "Retour à l'accueil",
                onclick: move |_| shell.write().exit_app(),
                div { class: "brand-mark", "V" }
                span { class: "brand-name", "VinTrack" }
                span { class: "version-badge", "beta-1.2" }
            }

            nav { class: "sidebar-nav",
                for section in sections {
                    div { key: "{section.title}", class: "sidebar-section",
                        div { class: "sidebar-section-title", "{section.title}" }
                        for entry in section.entries {
                            button {
                                key: "{entry.key}",
                                class: if entry.is_active(active) { "sidebar-item active" } else { "sidebar-item" },
                                onclick: {
                                    let target = entry.target.clone();
                                    move |_| match &target {
                                        NavTarget::View(view) => shell.write().set_active_view(*view),
                                        NavTarget::External(url) => {
                                            if let Err(e) = open::that(url) {
                                                tracing::warn!("Failed to open {}: {}", url, e);
                                            }
                                        }
                                        NavTarget::Inert => {}
                                    }
                                },
                                {icon(nav_glyph(entry.icon), 18)}
                                span { "{entry.label}" }
                                if matches!(entry.target, NavTarget::External(_)) {
                                    span { class: "sidebar-external", {icon(Glyph::ExternalLink, 12)} }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "sidebar-footer",
                match user {
                    Some(user) => rsx! {
                        div { class: "sidebar-user",
                            Avatar {
                                initial: user.initial(),
                                image_url: user.avatar_url.clone(),
                                size: AvatarSize::Small,
                            }
                            span { class: "sidebar-user-name", "{user.label()}" }
                        }
                        button {
                            class: "sidebar-item",
                            onclick: move |_| auth.sign_out(),
                            {icon(Glyph::LogOut, 18)}
                            span { "Se déconnecter" }
                        }
                    },
                    None => rsx! { LoginButton { compact: true } },
                }
            }
        }
    }
}
