//! Conversations with buyers and sellers.

use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use super::search::search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u32,
    pub sender: Sender,
    pub text: String,
    /// `HH:MM`
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub last_message: String,
    /// `HH:MM` or a relative day such as "Hier"
    pub time: String,
    pub unread: u32,
    pub online: bool,
    pub rating: u8,
}

impl Conversation {
    /// First letter of the name, for the avatar
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Conversation list, threads and the current selection
#[derive(Debug, Clone, PartialEq)]
pub struct Inbox {
    conversations: Vec<Conversation>,
    threads: HashMap<String, Vec<Message>>,
    selected: Option<String>,
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new()
    }
}

fn conversation(
    id: &str,
    name: &str,
    last_message: &str,
    time: &str,
    unread: u32,
    online: bool,
    rating: u8,
) -> Conversation {
    Conversation {
        id: id.to_string(),
        name: name.to_string(),
        last_message: last_message.to_string(),
        time: time.to_string(),
        unread,
        online,
        rating,
    }
}

fn message(id: u32, sender: Sender, time: &str, text: &str) -> Message {
    Message {
        id,
        sender,
        text: text.to_string(),
        time: time.to_string(),
    }
}

impl Inbox {
    /// Inbox with the account's recent conversations, first one selected
    pub fn new() -> Self {
        use Sender::*;
        let conversations = vec![
            conversation("1", "sneakerhead_fr", "Parfait, je vous envoie le colis demain !", "14:30", 0, true, 5),
            conversation("2", "vintage_style", "Bonjour, l'article est-il toujours disponible ?", "12:45", 2, false, 4),
            conversation("3", "streetwear_pro", "Merci pour votre achat !", "Hier", 0, true, 5),
            conversation("4", "denim_lover", "Pouvez-vous m'envoyer plus de photos ?", "Hier", 1, false, 4),
        ];
        let mut threads = HashMap::new();
        threads.insert(
            "1".to_string(),
            vec![
                message(1, Other, "14:20", "Bonjour ! Je suis intéressé par vos Nike Air Max."),
                message(2, Me, "14:22", "Bonjour ! Elles sont encore disponibles. Souhaitez-vous plus d'informations ?"),
                message(3, Other, "14:25", "Oui, quelle est la taille exacte et l'état ?"),
                message(4, Me, "14:27", "Taille 42, état neuf sans étiquette. Portées 2-3 fois maximum."),
                message(5, Other, "14:30", "Parfait, je vous envoie le colis demain !"),
            ],
        );
        threads.insert(
            "2".to_string(),
            vec![message(1, Other, "12:45", "Bonjour, l'article est-il toujours disponible ?")],
        );
        Self {
            conversations,
            threads,
            selected: Some("1".to_string()),
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Conversations whose name contains `query`
    pub fn search(&self, query: &str) -> Vec<&Conversation> {
        search(&self.conversations, query, |c| c.name.as_str())
    }

    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select a conversation and mark it read. Unknown ids are a no-op.
    pub fn select(&mut self, id: &str) -> bool {
        match self.conversations.iter_mut().find(|c| c.id == id) {
            Some(conversation) => {
                conversation.unread = 0;
                self.selected = Some(id.to_string());
                true
            }
            None => false,
        }
    }

    /// Messages of the selected conversation
    pub fn thread(&self) -> &[Message] {
        self.selected
            .as_ref()
            .and_then(|id| self.threads.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }

    /// Send `text` in the selected conversation, stamped with the local time
    pub fn send(&mut self, text: &str) -> bool {
        self.send_at(text, Local::now())
    }

    /// Send `text` at a given time. Blank text or no selection is a no-op.
    pub fn send_at<Tz: TimeZone>(&mut self, text: &str, now: DateTime<Tz>) -> bool
    where
        Tz::Offset: std::fmt::Display,
    {
        let text = text.trim();
        let Some(id) = self.selected.clone() else {
            return false;
        };
        if text.is_empty() {
            return false;
        }

        let time = now.format("%H:%M").to_string();
        let thread = self.threads.entry(id.clone()).or_default();
        let next_id = thread.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        thread.push(Message {
            id: next_id,
            sender: Sender::Me,
            text: text.to_string(),
            time: time.clone(),
        });

        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) {
            conversation.last_message = text.to_string();
            conversation.time = time;
        }
        debug!(conversation = %id, "Message sent");
        true
    }
}
