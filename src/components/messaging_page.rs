//! Messaging view: conversation list on the left, selected thread on the right.

use dioxus::prelude::*;
use vintrack_core::catalog::{Conversation, Inbox, Message, Sender};
use vintrack_ui::{Avatar, AvatarSize, IconButton, Input, RatingStars, SearchInput};

use crate::components::{icon, Glyph};

#[component]
pub fn MessagingView() -> Element {
    let mut inbox = use_signal(Inbox::new);
    let mut query = use_signal(String::new);
    let mut draft = use_signal(String::new);

    let conversations: Vec<Conversation> = inbox.read().search(&query.read()).into_iter().cloned().collect();
    let selected: Option<Conversation> = inbox.read().selected().cloned();
    let thread: Vec<Message> = inbox.read().thread().to_vec();
    let unread = inbox.read().total_unread();

    let mut send = move || {
        let text = draft();
        if inbox.write().send(&text) {
            draft.set(String::new());
        }
    };

    rsx! {
        div { class: "view messaging-view",
            div { class: "card conversation-list",
                div { class: "conversation-list-head",
                    h2 { class: "card-title", "Messages" }
                    if unread > 0 {
                        span { class: "unread-badge", "{unread}" }
                    }
                }
                SearchInput {
                    value: query(),
                    oninput: move |q| query.set(q),
                    placeholder: "Rechercher une conversation...".to_string(),
                }
                for conversation in conversations {
                    ConversationRow {
                        key: "{conversation.id}",
                        selected: inbox.read().is_selected(&conversation.id),
                        conversation: conversation.clone(),
                        onselect: move |id: String| {
                            inbox.write().select(&id);
                        },
                    }
                }
            }

            div { class: "card thread",
                match selected {
                    Some(conversation) => rsx! {
                        div { class: "thread-head",
                            Avatar {
                                initial: conversation.initial(),
                                size: AvatarSize::Medium,
                                online: conversation.online,
                            }
                            div {
                                div { class: "item-name", "{conversation.name}" }
                                RatingStars { rating: conversation.rating }
                            }
                        }
                        div { class: "thread-messages",
                            for message in thread {
                                div {
                                    key: "{message.id}",
                                    class: if message.sender == Sender::Me { "bubble mine" } else { "bubble theirs" },
                                    p { "{message.text}" }
                                    span { class: "bubble-time", "{message.time}" }
                                }
                            }
                        }
                        div { class: "thread-compose",
                            Input {
                                placeholder: "Tapez votre message...".to_string(),
                                value: draft(),
                                oninput: move |v| draft.set(v),
                                onsubmit: move |_| send(),
                            }
                            IconButton {
                                aria_label: "Envoyer".to_string(),
                                class: "send-btn".to_string(),
                                disabled: draft.read().trim().is_empty(),
                                onclick: move |_| send(),
                                {icon(Glyph::Send, 16)}
                            }
                        }
                    },
                    None => rsx! {
                        div { class: "empty-state",
                            {icon(Glyph::Message, 40)}
                            div { class: "empty-title", "Sélectionnez une conversation" }
                            div { class: "muted", "Choisissez une conversation pour commencer à discuter" }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ConversationRow(conversation: Conversation, selected: bool, onselect: EventHandler<String>) -> Element {
    let id = conversation.id.clone();

    rsx! {
        button {
            class: if selected { "conversation-row active" } else { "conversation-row" },
            onclick: move |_| onselect.call(id.clone()),
            Avatar {
                initial: conversation.initial(),
                size: AvatarSize::Medium,
                online: conversation.online,
            }
            div { class: "conversation-body",
                div { class: "conversation-top",
                    span { class: "item-name", "{conversation.name}" }
                    span { class: "muted small", "{conversation.time}" }
                }
                div { class: "conversation-top",
                    RatingStars { rating: conversation.rating }
                }
                div { class: "conversation-bottom",
                    span { class: "muted small ellipsis", "{conversation.last_message}" }
                    if conversation.unread > 0 {
                        span { class: "unread-badge", "{conversation.unread}" }
                    }
                }
            }
        }
    }
}
