//! Content of the public landing page.

use rand::Rng;

use crate::catalog::money::format_count;

/// Starting value of the "this month" earnings counter
pub const EARNINGS_START: u64 = 2500;
/// Seconds between two counter increments
pub const EARNINGS_TICK_SECS: u64 = 5;
/// Smallest increment
pub const EARNINGS_STEP_MIN: u64 = 50;
/// Largest increment
pub const EARNINGS_STEP_MAX: u64 = 150;

/// Section anchors reachable from the landing navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSection {
    Product,
    Pricing,
    Reviews,
}

impl LandingSection {
    pub const ALL: [LandingSection; 3] = [
        LandingSection::Product,
        LandingSection::Pricing,
        LandingSection::Reviews,
    ];

    /// Element id of the section
    pub fn anchor(&self) -> &'static str {
        match self {
            LandingSection::Product => "product",
            LandingSection::Pricing => "pricing",
            LandingSection::Reviews => "reviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LandingSection::Product => "Produit",
            LandingSection::Pricing => "Prix",
            LandingSection::Reviews => "Avis",
        }
    }

    /// Script scrolling the window to this section
    pub fn scroll_script(&self) -> String {
        format!(
            "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
            self.anchor()
        )
    }
}

/// Decorative "earned this month" counter of the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsCounter {
    value: u64,
}

impl Default for EarningsCounter {
    fn default() -> Self {
        Self {
            value: EARNINGS_START,
        }
    }
}

impl EarningsCounter {
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Add a random step in `EARNINGS_STEP_MIN..=EARNINGS_STEP_MAX`.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u64 {
        let step = rng.random_range(EARNINGS_STEP_MIN..=EARNINGS_STEP_MAX);
        self.value = self.value.saturating_add(step);
        step
    }

    /// `+2 500€`
    pub fn label(&self) -> String {
        format!("+{}€", format_count(self.value))
    }
}

/// Pricing tier
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    /// `/month`, or an unlock hint for the free tier
    pub period: &'static str,
    pub highlighted: bool,
    pub cta: &'static str,
    /// Feature line and whether the plan includes it
    pub features: Vec<(&'static str, bool)>,
}

const PLAN_FEATURES: [&str; 8] = [
    "Access to AUTOCOP ⚡",
    "Access to the fastest AUTOBUY on the market 🚀",
    "+15 guides (legit check, general tips, beginner guide etc..)",
    "+50 ultra fast sneakers, random resell and Shopify monitors",
    "Random resell guides (alcohol, watches,etc..)",
    "Weekly profitable niches analysis",
    "A strong, close-knit community, with ongoing support",
    "24/7 active staff",
];

fn features(included: [bool; 8]) -> Vec<(&'static str, bool)> {
    PLAN_FEATURES.into_iter().zip(included).collect()
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Free Plan",
            price: "FREE",
            period: "🔒 Invite to unlock",
            highlighted: false,
            cta: "Commencer Gratuitement",
            features: features([false, true, true, false, false, false, true, true]),
        },
        PricingPlan {
            name: "AutoBuy 🚀",
            price: "£24.99",
            period: "/month",
            highlighted: true,
            cta: "Choisir AutoBuy",
            features: features([false, true, true, true, true, true, true, true]),
        },
        PricingPlan {
            name: "AutoCop ⚡",
            price: "£34.99",
            period: "/month",
            highlighted: false,
            cta: "Choisir AutoCop",
            features: features([true; 8]),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

impl Testimonial {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Alexandre M.",
            role: "Revendeur Pro",
            text: "VinTrack a révolutionné mon business ! +3000€ en 2 mois grâce à l'autobuy.",
            rating: 5,
        },
        Testimonial {
            name: "Sophie L.",
            role: "Débutante",
            text: "L'autobuy est incroyable, je trouve des pépites en permanence. Interface très intuitive.",
            rating: 5,
        },
        Testimonial {
            name: "Thomas R.",
            role: "Expert Vinted",
            text: "Interface intuitive et résultats au rendez-vous. Le support Discord est top !",
            rating: 5,
        },
    ]
}

/// Listing shown in the phone mockup of the hero section
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseListing {
    pub title: &'static str,
    pub seller: &'static str,
    pub reviews: u32,
    pub price: u32,
    pub retail_price: u32,
    pub condition: &'static str,
    pub posted: &'static str,
    pub image: &'static str,
}

impl ShowcaseListing {
    /// Discount against retail, rounded to the nearest percent
    pub fn discount_percent(&self) -> u32 {
        if self.retail_price == 0 {
            return 0;
        }
        let saved = self.retail_price.saturating_sub(self.price) as f64;
        (saved / self.retail_price as f64 * 100.0).round() as u32
    }
}

pub fn showcase_listings() -> Vec<ShowcaseListing> {
    vec![
        ShowcaseListing {
            title: "Nike Air Max - S",
            seller: "sneakerhead",
            reviews: 12,
            price: 28,
            retail_price: 100,
            condition: "Neuf sans étiquette",
            posted: "il y a 2 minutes",
            image: "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg?auto=compress&cs=tinysrgb&w=80&h=80&fit=crop",
        },
        ShowcaseListing {
            title: "Dior - Sac à main",
            seller: "luxuryfashion",
            reviews: 3,
            price: 32,
            retail_price: 135,
            condition: "Neuf avec étiquette",
            posted: "il y a 1 minute",
            image: "https://images.pexels.com/photos/1040173/pexels-photo-1040173.jpeg?auto=compress&cs=tinysrgb&w=80&h=80&fit=crop",
        },
        ShowcaseListing {
            title: "Ralph Lauren - Pull",
            seller: "vintagestyle",
            reviews: 8,
            price: 15,
            retail_price: 65,
            condition: "Très bon état",
            posted: "il y a 5 minutes",
            image: "https://images.pexels.com/photos/297933/pexels-photo-297933.jpeg?auto=compress&cs=tinysrgb&w=80&h=80&fit=crop",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_counter_starts_at_2500() {
        let counter = EarningsCounter::default();
        assert_eq!(counter.value(), 2500);
        assert_eq!(counter.label(), "+2\u{202f}500€");
    }

    #[test]
    fn test_counter_steps_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counter = EarningsCounter::default();
        for _ in 0..200 {
            let before = counter.value();
            let step = counter.tick(&mut rng);
            assert!((EARNINGS_STEP_MIN..=EARNINGS_STEP_MAX).contains(&step));
            assert_eq!(counter.value(), before + step);
        }
    }

    #[test]
    fn test_sections() {
        let anchors: Vec<&str> = LandingSection::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["product", "pricing", "reviews"]);
        assert!(LandingSection::Pricing.scroll_script().contains("getElementById('pricing')"));
    }

    #[test]
    fn test_plans() {
        let plans = pricing_plans();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans.iter().filter(|p| p.highlighted).count(), 1);
        assert!(plans[2].features.iter().all(|(_, included)| *included));
        assert!(!plans[0].features[0].1);
    }

    #[test]
    fn test_showcase_discounts() {
        let discounts: Vec<u32> = showcase_listings().iter().map(|l| l.discount_percent()).collect();
        assert_eq!(discounts, vec![72, 76, 77]);
    }

    #[test]
    fn test_testimonial_initial() {
        assert_eq!(testimonials()[1].initial(), 'S');
    }
}
