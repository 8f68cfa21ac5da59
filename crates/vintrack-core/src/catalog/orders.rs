//! Purchase history.

use chrono::NaiveDate;

use super::search::matches_query;
use super::StatusTone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "En attente",
            OrderStatus::Shipped => "Expédié",
            OrderStatus::Delivered => "Livré",
            OrderStatus::Cancelled => "Annulé",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Pending => StatusTone::Warning,
            OrderStatus::Shipped => StatusTone::Info,
            OrderStatus::Delivered => StatusTone::Success,
            OrderStatus::Cancelled => StatusTone::Danger,
        }
    }
}

/// Status cards double as a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Toutes",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn accepts(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub item: String,
    pub seller: String,
    pub price: f64,
    pub ordered_on: NaiveDate,
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<NaiveDate>,
}

impl Order {
    /// Estimated delivery is only meaningful while the parcel is in transit
    pub fn shows_estimated_delivery(&self) -> bool {
        self.status == OrderStatus::Shipped && self.estimated_delivery.is_some()
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or(NaiveDate::MIN)
}

fn order(
    n: u32,
    item: &str,
    seller: &str,
    price: f64,
    ordered: u32,
    status: OrderStatus,
    tracking: Option<(&str, u32)>,
) -> Order {
    Order {
        id: format!("CMD-{:03}", n),
        item: item.to_string(),
        seller: seller.to_string(),
        price,
        ordered_on: day(ordered),
        status,
        tracking_number: tracking.map(|(t, _)| t.to_string()),
        estimated_delivery: tracking.map(|(_, d)| day(d)),
    }
}

pub fn orders() -> Vec<Order> {
    use OrderStatus::*;
    vec![
        order(1, "Nike Air Max 90", "sneakerhead_fr", 85.0, 15, Delivered, Some(("FR123456789", 18))),
        order(2, "Ralph Lauren Polo Shirt", "vintage_style", 25.0, 14, Shipped, Some(("FR987654321", 17))),
        order(3, "Adidas Hoodie", "streetwear_pro", 45.0, 13, Pending, None),
        order(4, "Levi's 501 Jeans", "denim_lover", 35.0, 12, Delivered, Some(("FR456789123", 15))),
        order(5, "Converse Chuck Taylor", "classic_shoes", 40.0, 11, Cancelled, None),
    ]
}

/// Orders passing the status filter whose item name or seller matches `query`
pub fn filter_orders<'a>(orders: &'a [Order], status: StatusFilter, query: &str) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| status.accepts(o.status))
        .filter(|o| matches_query(&o.item, query) || matches_query(&o.seller, query))
        .collect()
}

/// Count per status card, `All` first
pub fn status_counts(orders: &[Order]) -> Vec<(StatusFilter, usize)> {
    std::iter::once(StatusFilter::All)
        .chain(OrderStatus::ALL.into_iter().map(StatusFilter::Only))
        .map(|f| (f, orders.iter().filter(|o| f.accepts(o.status)).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(found: Vec<&Order>) -> Vec<&str> {
        found.into_iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_counts() {
        let orders = orders();
        let counts = status_counts(&orders);
        assert_eq!(
            counts,
            vec![
                (StatusFilter::All, 5),
                (StatusFilter::Only(OrderStatus::Pending), 1),
                (StatusFilter::Only(OrderStatus::Shipped), 1),
                (StatusFilter::Only(OrderStatus::Delivered), 2),
                (StatusFilter::Only(OrderStatus::Cancelled), 1),
            ]
        );
    }

    #[test]
    fn test_search_matches_item_or_seller() {
        let orders = orders();
        assert_eq!(ids(filter_orders(&orders, StatusFilter::All, "NIKE")), vec!["CMD-001"]);
        assert_eq!(ids(filter_orders(&orders, StatusFilter::All, "denim")), vec!["CMD-004"]);
        assert_eq!(filter_orders(&orders, StatusFilter::All, "").len(), 5);
        assert!(filter_orders(&orders, StatusFilter::All, "gucci").is_empty());
    }

    #[test]
    fn test_status_and_query_combine() {
        let orders = orders();
        let delivered = StatusFilter::Only(OrderStatus::Delivered);
        assert_eq!(ids(filter_orders(&orders, delivered, "")), vec!["CMD-001", "CMD-004"]);
        assert_eq!(ids(filter_orders(&orders, delivered, "levi")), vec!["CMD-004"]);
        assert!(filter_orders(&orders, delivered, "adidas").is_empty());
    }

    #[test]
    fn test_estimated_delivery_only_when_shipped() {
        let orders = orders();
        let shown: Vec<&str> = orders
            .iter()
            .filter(|o| o.shows_estimated_delivery())
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(shown, vec!["CMD-002"]);
        assert_eq!(orders[2].tracking_number, None);
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(StatusFilter::default().label(), "Toutes");
        assert_eq!(StatusFilter::Only(OrderStatus::Shipped).label(), "Expédié");
    }
}
