//! "Mon compte" view: profile of the signed-in user.

use dioxus::prelude::*;
use vintrack_ui::{Avatar, AvatarSize, Button, ButtonVariant, Input};

use crate::components::{icon, Glyph};
use crate::context::{use_auth_actions, use_session};

#[component]
pub fn AccountView() -> Element {
    let session = use_session();
    let auth = use_auth_actions();

    // The dashboard is only mounted with a session
    let Some(user) = session.read().as_ref().map(|s| s.user.clone()) else {
        return rsx! {};
    };
    let email = user.email.clone().unwrap_or_default();

    rsx! {
        div { class: "view account-view",
            div { class: "view-header",
                h1 { class: "view-title", "Paramètres du compte" }
            }
            div { class: "card account-card",
                div { class: "account-identity",
                    Avatar {
                        initial: user.initial(),
                        image_url: user.avatar_url.clone(),
                        size: AvatarSize::Large,
                    }
                    div {
                        div { class: "account-name", "{user.label()}" }
                        div { class: "muted", "{email}" }
                    }
                }
                Input {
                    label: "Nom d'utilisateur".to_string(),
                    value: user.label().to_string(),
                    oninput: move |_| {},
                    disabled: true,
                }
                Input {
                    label: "Adresse e-mail".to_string(),
                    input_type: "email".to_string(),
                    value: email.clone(),
                    oninput: move |_| {},
                    disabled: true,
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| auth.sign_out(),
                    {icon(Glyph::LogOut, 16)}
                    "Se déconnecter"
                }
            }
        }
    }
}
