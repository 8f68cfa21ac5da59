//! Landing page - public marketing page and the way into the dashboard.
//!
//! Signed in: "Ouvrir l'app" and the calls to action enter the dashboard.
//! Signed out: the Discord sign-in button is shown instead, and the calls to
//! action start the sign-in flow.

use std::time::Duration;

use dioxus::prelude::*;
use vintrack_core::landing::{
    pricing_plans, showcase_listings, testimonials, EarningsCounter, LandingSection,
    EARNINGS_TICK_SECS,
};
use vintrack_core::EntryAction;
use vintrack_ui::{Avatar, AvatarSize, Button, ButtonSize, ButtonVariant, RatingStars};

use crate::components::{icon, Glyph, LoginButton};
use crate::context::{use_auth_actions, use_session, use_shell};

fn scroll_to(section: LandingSection) {
    let _ = document::eval(&section.scroll_script());
}

#[component]
pub fn Landing() -> Element {
    let mut shell = use_shell();
    let session = use_session();
    let auth = use_auth_actions();
    let mut menu_open = use_signal(|| false);
    let mut earnings = use_signal(EarningsCounter::default);

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(EARNINGS_TICK_SECS)).await;
            earnings.write().tick(&mut rand::rng());
        }
    });

    let mut open_app = move || {
        if !shell.write().enter_app() {
            tracing::debug!("Enter app ignored without a session");
        }
    };

    let mut get_started = move || {
        let action = shell.peek().entry_action();
        match action {
            EntryAction::OpenApp => open_app(),
            EntryAction::SignIn => auth.sign_in(),
        }
    };

    let signed_in = session.read().is_some();
    let user = session.read().as_ref().map(|s| s.user.clone());

    rsx! {
        div { class: "landing",
            div { class: "landing-glow" }

            nav { class: "landing-nav",
                div { class: "brand",
                    div { class: "brand-mark", "V" }
                    span { class: "brand-name", "VinTrack" }
                }

                div { class: "landing-links",
                    for section in LandingSection::ALL {
                        button {
                            key: "{section.anchor()}",
                            class: "link-btn",
                            onclick: move |_| scroll_to(section),
                            "{section.label()}"
                        }
                    }
                }

                div { class: "landing-account",
                    match &user {
                        Some(user) => rsx! {
                            div { class: "user-chip",
                                Avatar {
                                    initial: user.initial(),
                                    image_url: user.avatar_url.clone(),
                                    size: AvatarSize::Medium,
                                }
                                div { class: "user-chip-text",
                                    span { class: "user-chip-name", "{user.label()}" }
                                    span { class: "user-chip-role", "Utilisateur" }
                                }
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| open_app(),
                                "Ouvrir l'app"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| auth.sign_out(),
                                "Se déconnecter"
                            }
                        },
                        None => rsx! { LoginButton {} },
                    }
                }

                button {
                    class: "menu-toggle",
                    "aria-label": "Menu",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { {icon(Glyph::Close, 24)} } else { {icon(Glyph::Menu, 24)} }
                }

                if menu_open() {
                    div { class: "mobile-menu",
                        for section in LandingSection::ALL {
                            button {
                                key: "m-{section.anchor()}",
                                class: "link-btn",
                                onclick: move |_| {
                                    scroll_to(section);
                                    menu_open.set(false);
                                },
                                "{section.label()}"
                            }
                        }
                        if signed_in {
                            Button { onclick: move |_| open_app(), "Ouvrir l'app" }
                        } else {
                            LoginButton {}
                        }
                    }
                }
            }

            section { id: "product", class: "hero",
                h1 { class: "hero-title",
                    "L'Apex du "
                    span { class: "accent", "Resell" }
                }
                p { class: "hero-subtitle",
                    "Votre partenaire idéal pour exploser votre business d'achat-revente Vinted."
                }
                div { class: "hero-actions",
                    Button {
                        size: ButtonSize::Large,
                        onclick: move |_| scroll_to(LandingSection::Pricing),
                        "Découvrir"
                        {icon(Glyph::ArrowRight, 18)}
                    }
                    if signed_in {
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Large,
                            onclick: move |_| open_app(),
                            "Ouvrir l'app"
                        }
                    } else {
                        LoginButton {}
                    }
                }

                div { class: "hero-layout",
                    div { class: "hero-side",
                        div { class: "earnings-card",
                            div { class: "earnings-head",
                                {icon(Glyph::TrendingUp, 18)}
                                span { "Ce mois-ci" }
                            }
                            div { class: "earnings-value", "{earnings.read().label()}" }
                        }
                        div { class: "feature-card", {icon(Glyph::Star, 18)} span { "Autobuy instantané" } }
                        div { class: "feature-card", {icon(Glyph::Shield, 18)} span { "Trust score" } }
                        div { class: "feature-card",
                            {icon(Glyph::Zap, 18)}
                            div {
                                div { class: "soon", "Bientôt" }
                                div { "Republication automatique des annonces" }
                            }
                        }
                    }

                    div { class: "phone",
                        div { class: "phone-status", span { "9:41" } }
                        for listing in showcase_listings() {
                            div { key: "{listing.title}", class: "phone-card",
                                div { class: "phone-card-image",
                                    img { src: "{listing.image}", alt: "{listing.title}" }
                                    span { class: "condition-badge", "{listing.condition}" }
                                }
                                div { class: "phone-card-info",
                                    div { class: "phone-card-title", "{listing.title}" }
                                    div { class: "phone-card-seller",
                                        span { "{listing.seller}" }
                                        RatingStars { rating: 5, reviews: listing.reviews }
                                    }
                                    div { class: "phone-card-price",
                                        span { class: "price", "{listing.price}€" }
                                        span { class: "retail", "({listing.retail_price}€)" }
                                        span { class: "discount", "-{listing.discount_percent()}%" }
                                    }
                                    div { class: "muted small", "{listing.posted}" }
                                }
                            }
                        }
                    }

                    div { class: "hero-side",
                        div { class: "notify-card",
                            span { class: "notify-emoji", "👟" }
                            div {
                                div { class: "notify-title", "Nouvel article trouvé" }
                                div { class: "muted", "Jogging Nike" }
                            }
                            span { class: "muted small", "maintenant" }
                        }
                        div { class: "notify-card",
                            span { class: "notify-emoji", "👕" }
                            div {
                                div { class: "notify-title", "Nouvel article trouvé" }
                                div { class: "muted", "Chemise Ralph Lauren" }
                            }
                            span { class: "muted small", "maintenant" }
                        }
                        Button {
                            onclick: move |_| get_started(),
                            "Mes annonces"
                            {icon(Glyph::ArrowRight, 16)}
                        }
                    }
                }
            }

            section { id: "pricing", class: "pricing",
                h2 { class: "section-title", "Choisissez le plan qui correspond à vos besoins" }
                div { class: "plans",
                    for plan in pricing_plans() {
                        div {
                            key: "{plan.name}",
                            class: if plan.highlighted { "plan highlighted" } else { "plan" },
                            if plan.highlighted {
                                span { class: "plan-badge", "POPULAIRE" }
                            }
                            h3 { class: "plan-brand", "VinTrack" }
                            h4 { class: "plan-name", "{plan.name}" }
                            div { class: "plan-price", "{plan.price}" }
                            div { class: "plan-period", "{plan.period}" }
                            ul { class: "plan-features",
                                for (feature, included) in plan.features.iter() {
                                    li {
                                        key: "{feature}",
                                        class: if *included { "included" } else { "excluded" },
                                        span { class: "mark", if *included { "✓" } else { "✗" } }
                                        span { "{feature}" }
                                    }
                                }
                            }
                            Button {
                                full_width: true,
                                onclick: move |_| get_started(),
                                "{plan.cta}"
                            }
                        }
                    }
                }
            }

            section { id: "reviews", class: "reviews",
                h2 { class: "section-title",
                    "Ce que disent nos "
                    span { class: "accent", "utilisateurs" }
                }
                div { class: "review-grid",
                    for review in testimonials() {
                        div { key: "{review.name}", class: "review-card",
                            RatingStars { rating: review.rating }
                            p { class: "review-text", "\"{review.text}\"" }
                            div { class: "review-author",
                                Avatar { initial: review.initial().to_string(), size: AvatarSize::Small }
                                div {
                                    div { class: "review-name", "{review.name}" }
                                    div { class: "muted small", "{review.role}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "final-cta",
                h2 { class: "section-title",
                    "Prêt à "
                    span { class: "accent", "dominer" }
                    " Vinted ?"
                }
                p { class: "muted", "Rejoignez des milliers d'utilisateurs qui font déjà confiance à VinTrack" }
                div { class: "hero-actions",
                    Button {
                        size: ButtonSize::Large,
                        onclick: move |_| scroll_to(LandingSection::Pricing),
                        "Commencer maintenant"
                        {icon(Glyph::ArrowRight, 18)}
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Large,
                        onclick: move |_| get_started(),
                        "Essayer gratuitement"
                    }
                }
            }

            footer { class: "landing-footer",
                span { class: "brand-name", "VinTrack" }
                span { class: "muted small", "© 2024 VinTrack. Tous droits réservés." }
            }
        }
    }
}
