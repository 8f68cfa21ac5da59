//! Seller statistics.

use chrono::NaiveDate;

use super::money::{format_count, format_decimal, format_eur};

/// Period selected in the stats header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::Year,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "7 derniers jours",
            TimeRange::Month => "30 derniers jours",
            TimeRange::Quarter => "3 derniers mois",
            TimeRange::Year => "Cette année",
        }
    }

    pub fn from_key(key: &str) -> Option<TimeRange> {
        TimeRange::ALL.into_iter().find(|r| r.key() == key)
    }
}

/// Change against the previous period, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend(pub f64);

impl Trend {
    pub fn is_up(&self) -> bool {
        self.0 >= 0.0
    }

    /// `+12,5%` / `-2,1%`
    pub fn label(&self) -> String {
        let sign = if self.is_up() { "+" } else { "" };
        format!("{}{}%", sign, format_decimal(self.0, 1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    /// Percent of sales
    pub share: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub sold_on: NaiveDate,
    pub item: String,
    pub price: f64,
    pub profit: f64,
}

impl Sale {
    /// Profit over price, percent
    pub fn margin(&self) -> f64 {
        if self.price == 0.0 {
            0.0
        } else {
            self.profit / self.price * 100.0
        }
    }

    pub fn margin_label(&self) -> String {
        format!("{}%", format_decimal(self.margin(), 1))
    }
}

/// Everything the stats page shows for one period
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub range: TimeRange,
    pub total_earnings: f64,
    pub earnings_trend: Trend,
    pub total_purchases: u64,
    pub purchases_trend: Trend,
    pub total_views: u64,
    pub views_trend: Trend,
    pub conversion_rate: f64,
    pub conversion_trend: Trend,
    pub average_price: f64,
    /// Bar heights for Monday..Sunday, percent of the tallest
    pub weekly: [(&'static str, u8); 7],
    pub categories: Vec<CategoryShare>,
    pub recent_sales: Vec<Sale>,
}

impl StatsSnapshot {
    pub fn earnings_label(&self) -> String {
        format_eur(self.total_earnings)
    }

    pub fn purchases_label(&self) -> String {
        format_count(self.total_purchases)
    }

    pub fn views_label(&self) -> String {
        format_count(self.total_views)
    }

    pub fn conversion_label(&self) -> String {
        format!("{}%", format_decimal(self.conversion_rate, 1))
    }

    pub fn average_price_label(&self) -> String {
        format_eur(self.average_price)
    }

    pub fn total_profit(&self) -> f64 {
        self.recent_sales.iter().map(|s| s.profit).sum()
    }
}

fn sale(d: u32, item: &str, price: f64, profit: f64) -> Sale {
    Sale {
        sold_on: NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or(NaiveDate::MIN),
        item: item.to_string(),
        price,
        profit,
    }
}

/// Stats for `range`.
///
/// The account has a single reporting snapshot; every range shows it.
pub fn stats_snapshot(range: TimeRange) -> StatsSnapshot {
    StatsSnapshot {
        range,
        total_earnings: 2847.50,
        earnings_trend: Trend(12.5),
        total_purchases: 156,
        purchases_trend: Trend(8.3),
        total_views: 12450,
        views_trend: Trend(-2.1),
        conversion_rate: 8.2,
        conversion_trend: Trend(5.7),
        average_price: 18.25,
        weekly: [
            ("Lun", 65),
            ("Mar", 45),
            ("Mer", 80),
            ("Jeu", 55),
            ("Ven", 90),
            ("Sam", 70),
            ("Dim", 85),
        ],
        categories: vec![
            CategoryShare { name: "Vêtements".to_string(), share: 45 },
            CategoryShare { name: "Chaussures".to_string(), share: 30 },
            CategoryShare { name: "Accessoires".to_string(), share: 25 },
        ],
        recent_sales: vec![
            sale(15, "Nike Air Max", 85.0, 35.0),
            sale(14, "Ralph Lauren Polo", 25.0, 15.0),
            sale(13, "Adidas Hoodie", 45.0, 20.0),
            sale(12, "Levi's Jeans", 35.0, 18.0),
            sale(11, "Converse Sneakers", 40.0, 22.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_keys() {
        assert_eq!(TimeRange::default(), TimeRange::Week);
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_key(range.key()), Some(range));
        }
        assert_eq!(TimeRange::Year.label(), "Cette année");
        assert_eq!(TimeRange::from_key("2y"), None);
    }

    #[test]
    fn test_kpi_labels() {
        let stats = stats_snapshot(TimeRange::Week);
        assert_eq!(stats.range, TimeRange::Week);
        assert_eq!(stats.earnings_label(), "2\u{202f}847,50\u{a0}€");
        assert_eq!(stats.views_label(), "12\u{202f}450");
        assert_eq!(stats.purchases_label(), "156");
        assert_eq!(stats.conversion_label(), "8,2%");
        assert_eq!(stats.average_price_label(), "18,25\u{a0}€");
    }

    #[test]
    fn test_trends() {
        let stats = stats_snapshot(TimeRange::Month);
        assert_eq!(stats.earnings_trend.label(), "+12,5%");
        assert!(!stats.views_trend.is_up());
        assert_eq!(stats.views_trend.label(), "-2,1%");
    }

    #[test]
    fn test_margins() {
        let stats = stats_snapshot(TimeRange::Month);
        assert_eq!(stats.recent_sales[0].margin_label(), "41,2%");
        assert_eq!(stats.recent_sales[1].margin_label(), "60,0%");
        assert_eq!(stats.total_profit(), 110.0);
    }

    #[test]
    fn test_zero_price_margin() {
        let free = sale(1, "Cadeau", 0.0, 0.0);
        assert_eq!(free.margin(), 0.0);
    }

    #[test]
    fn test_category_shares_sum_to_100() {
        let stats = stats_snapshot(TimeRange::Year);
        let total: u32 = stats.categories.iter().map(|c| c.share as u32).sum();
        assert_eq!(total, 100);
    }
}
