//! Items bought (or being bought) by the auto-buy bot.

use chrono::NaiveDateTime;
use tracing::debug;

use super::{photo, StatusTone, IMG_JACKET, IMG_SHOES, IMG_SWEATER};

/// How an item was bought
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseKind {
    Manual,
    Automatic,
}

impl PurchaseKind {
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseKind::Manual => "Achat manuel",
            PurchaseKind::Automatic => "Achat automatique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocoopStatus {
    Pending,
    Confirmed,
    Sold,
}

impl AutocoopStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AutocoopStatus::Pending => "En attente",
            AutocoopStatus::Confirmed => "Confirmé",
            AutocoopStatus::Sold => "Vendu",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            AutocoopStatus::Pending => StatusTone::Warning,
            AutocoopStatus::Confirmed => StatusTone::Success,
            AutocoopStatus::Sold => StatusTone::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutocoopItem {
    pub id: u32,
    pub name: String,
    pub kind: PurchaseKind,
    pub price: f64,
    /// Price including buyer protection
    pub total_price: f64,
    pub bought_at: NaiveDateTime,
    pub status: AutocoopStatus,
    pub image: String,
}

impl AutocoopItem {
    /// `13/10/2023` and `16:08:43`, as shown in the table
    pub fn date_label(&self) -> (String, String) {
        (
            self.bought_at.format("%d/%m/%Y").to_string(),
            self.bought_at.format("%H:%M:%S").to_string(),
        )
    }
}

fn at(time: &str) -> NaiveDateTime {
    // Literal timestamps below are all well-formed
    NaiveDateTime::parse_from_str(&format!("2023-10-13 {}", time), "%Y-%m-%d %H:%M:%S")
        .unwrap_or(NaiveDateTime::MIN)
}

fn item(
    id: u32,
    name: &str,
    kind: PurchaseKind,
    price: f64,
    total_price: f64,
    time: &str,
    image: &str,
) -> AutocoopItem {
    AutocoopItem {
        id,
        name: name.to_string(),
        kind,
        price,
        total_price,
        bought_at: at(time),
        status: AutocoopStatus::Pending,
        image: photo(image, 100),
    }
}

/// Items listed on the autocoop page
pub fn autocoop_items() -> Vec<AutocoopItem> {
    use PurchaseKind::*;
    vec![
        item(1, "Arc teryx Atom", Manual, 215.00, 226.45, "16:08:43", IMG_SWEATER),
        item(2, "Veste zip Ralph Lauren Vintage / XL", Manual, 20.00, 21.70, "15:08:16", IMG_JACKET),
        item(3, "Casaco Impermeável Carhartt", Automatic, 40.00, 42.70, "13:26:52", IMG_SHOES),
        item(4, "Abrigo Carhartt negro", Automatic, 30.00, 32.20, "13:26:53", IMG_JACKET),
        item(5, "Manteau carhartt", Automatic, 40.00, 42.70, "13:24:37", IMG_SWEATER),
    ]
}

/// Move a pending item to confirmed.
///
/// Returns `false` when the id is unknown or the item is not pending.
pub fn confirm_purchase(items: &mut [AutocoopItem], id: u32) -> bool {
    match items
        .iter_mut()
        .find(|i| i.id == id && i.status == AutocoopStatus::Pending)
    {
        Some(item) => {
            debug!(id, name = %item.name, "Purchase confirmed");
            item.status = AutocoopStatus::Confirmed;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::search::search;

    #[test]
    fn test_items_start_pending() {
        let items = autocoop_items();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|i| i.status == AutocoopStatus::Pending));
    }

    #[test]
    fn test_date_label() {
        let items = autocoop_items();
        assert_eq!(
            items[0].date_label(),
            ("13/10/2023".to_string(), "16:08:43".to_string())
        );
    }

    #[test]
    fn test_confirm_purchase_once() {
        let mut items = autocoop_items();
        assert!(confirm_purchase(&mut items, 3));
        assert_eq!(items[2].status, AutocoopStatus::Confirmed);
        assert!(!confirm_purchase(&mut items, 3));
        assert!(!confirm_purchase(&mut items, 99));
        assert_eq!(
            items
                .iter()
                .filter(|i| i.status == AutocoopStatus::Confirmed)
                .count(),
            1
        );
    }

    #[test]
    fn test_search_by_name() {
        let items = autocoop_items();
        let hits = search(&items, "carhartt", |i| i.name.as_str());
        assert_eq!(hits.len(), 3);
        assert!(search(&items, "nike", |i| i.name.as_str()).is_empty());
    }
}
