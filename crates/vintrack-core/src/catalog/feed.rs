//! Live feed: products spotted by the bot and the buyer's feed filters.

use std::collections::BTreeSet;
use std::fmt;

use super::money::parse_amount;
use super::search::matches_query;
use super::{photo, IMG_JACKET, IMG_SHOES, IMG_SWEATER};

/// Condition of a second-hand item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemCondition {
    NewWithoutTags,
    NewWithTags,
    VeryGood,
    Good,
    Satisfactory,
}

impl ItemCondition {
    pub const ALL: [ItemCondition; 5] = [
        ItemCondition::NewWithoutTags,
        ItemCondition::NewWithTags,
        ItemCondition::VeryGood,
        ItemCondition::Good,
        ItemCondition::Satisfactory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemCondition::NewWithoutTags => "Neuf sans étiquette",
            ItemCondition::NewWithTags => "Neuf avec étiquette",
            ItemCondition::VeryGood => "Très bon état",
            ItemCondition::Good => "Bon état",
            ItemCondition::Satisfactory => "Satisfaisant",
        }
    }
}

impl fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A listing surfaced in the feed
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub seller: String,
    pub rating: u8,
    pub reviews: u32,
    /// Listed price
    pub price: f64,
    /// Price including buyer protection
    pub total_price: f64,
    pub posted: String,
    pub images: Vec<String>,
    pub condition: ItemCondition,
    pub views: u32,
    pub likes: u32,
    pub brand: String,
    pub size: String,
}

impl Product {
    /// First gallery image, if any
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Products shown in the feed
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "ralph lauren crew neck".to_string(),
            seller: "sp927".to_string(),
            rating: 5,
            reviews: 26,
            price: 20.00,
            total_price: 26.48,
            posted: "il y a 28 secondes".to_string(),
            images: vec![
                photo(IMG_SWEATER, 400),
                photo(IMG_JACKET, 400),
                photo(IMG_SHOES, 400),
            ],
            condition: ItemCondition::NewWithoutTags,
            views: 45,
            likes: 12,
            brand: "RALPH LAUREN".to_string(),
            size: "S / 36 / 8".to_string(),
        },
        Product {
            id: 2,
            title: "Blauer Stone island reg...".to_string(),
            seller: "esad_1905".to_string(),
            rating: 5,
            reviews: 8,
            price: 54.99,
            total_price: 65.06,
            posted: "il y a 1 minute".to_string(),
            images: vec![photo(IMG_JACKET, 400), photo(IMG_SHOES, 400)],
            condition: ItemCondition::NewWithTags,
            views: 78,
            likes: 23,
            brand: "STONE ISLAND".to_string(),
            size: "L".to_string(),
        },
        Product {
            id: 3,
            title: "Stone island soft shell".to_string(),
            seller: "jaco699".to_string(),
            rating: 5,
            reviews: 26,
            price: 40.00,
            total_price: 55.00,
            posted: "il y a 2 minutes".to_string(),
            images: vec![photo(IMG_SHOES, 400), photo(IMG_SWEATER, 400)],
            condition: ItemCondition::VeryGood,
            views: 92,
            likes: 18,
            brand: "STONE ISLAND".to_string(),
            size: "L".to_string(),
        },
    ]
}

/// Account the bot buys with
#[derive(Debug, Clone, PartialEq)]
pub struct BuyerAccount {
    pub username: String,
    pub balance: f64,
}

pub fn buyer_account() -> BuyerAccount {
    BuyerAccount {
        username: "gregoireltb".to_string(),
        balance: 120.0,
    }
}

/// Filter panel of the feed.
///
/// Price bounds are kept as typed so the inputs round-trip; they are parsed
/// when applied and an unparsable bound is ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedFilters {
    pub min_price: String,
    pub max_price: String,
    pub brand: String,
    pub conditions: BTreeSet<ItemCondition>,
    pub hide_reposts: bool,
    pub notifications: bool,
    pub sniper: bool,
}

impl FeedFilters {
    /// Add the condition if missing, remove it otherwise
    pub fn toggle_condition(&mut self, condition: ItemCondition) {
        if !self.conditions.remove(&condition) {
            self.conditions.insert(condition);
        }
    }

    pub fn has_condition(&self, condition: ItemCondition) -> bool {
        self.conditions.contains(&condition)
    }

    /// Whether `product` passes every set filter.
    ///
    /// No selected condition means any condition.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min) = parse_amount(&self.min_price) {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = parse_amount(&self.max_price) {
            if product.price > max {
                return false;
            }
        }
        if !matches_query(&product.brand, self.brand.trim()) {
            return false;
        }
        self.conditions.is_empty() || self.conditions.contains(&product.condition)
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(found: Vec<&Product>) -> Vec<u32> {
        found.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filters_keep_everything() {
        let products = products();
        assert_eq!(ids(FeedFilters::default().apply(&products)), vec![1, 2, 3]);
    }

    #[test]
    fn test_price_bounds_accept_decimal_comma() {
        let products = products();
        let filters = FeedFilters {
            min_price: "20,5".to_string(),
            max_price: "50".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(filters.apply(&products)), vec![3]);
    }

    #[test]
    fn test_unparsable_bound_is_ignored() {
        let products = products();
        let filters = FeedFilters {
            min_price: "abc".to_string(),
            max_price: "30".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(filters.apply(&products)), vec![1]);
    }

    #[test]
    fn test_brand_search() {
        let products = products();
        let filters = FeedFilters {
            brand: " stone ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(filters.apply(&products)), vec![2, 3]);
    }

    #[test]
    fn test_condition_toggle() {
        let products = products();
        let mut filters = FeedFilters::default();
        filters.toggle_condition(ItemCondition::VeryGood);
        assert!(filters.has_condition(ItemCondition::VeryGood));
        assert_eq!(ids(filters.apply(&products)), vec![3]);

        filters.toggle_condition(ItemCondition::NewWithTags);
        assert_eq!(ids(filters.apply(&products)), vec![2, 3]);

        filters.toggle_condition(ItemCondition::VeryGood);
        filters.toggle_condition(ItemCondition::NewWithTags);
        assert_eq!(filters, FeedFilters::default());
    }

    #[test]
    fn test_every_product_has_a_cover() {
        for product in products() {
            assert!(product.cover().is_some());
            assert!(product.total_price > product.price);
        }
    }
}
