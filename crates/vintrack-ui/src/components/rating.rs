//! Star rating display

use dioxus::prelude::*;

pub const MAX_STARS: u8 = 5;

/// Filled/empty flags for each of the five stars
pub fn star_states(rating: u8) -> [bool; MAX_STARS as usize] {
    let mut stars = [false; MAX_STARS as usize];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = (i as u8) < rating.min(MAX_STARS);
    }
    stars
}

#[component]
pub fn RatingStars(rating: u8, reviews: Option<u32>) -> Element {
    let stars = star_states(rating);
    rsx! {
        span { class: "rating",
            for (i, filled) in stars.into_iter().enumerate() {
                span {
                    key: "{i}",
                    class: if filled { "star filled" } else { "star" },
                    "\u{2605}"
                }
            }
            if let Some(count) = reviews {
                span { class: "rating-count", "({count})" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(star_states(4), [true, true, true, true, false]);
        assert_eq!(star_states(0), [false; 5]);
        assert_eq!(star_states(9), [true; 5]);
    }
}
