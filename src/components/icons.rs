//! Lucide icons as inline SVG.

use dioxus::prelude::*;
use vintrack_core::NavIcon;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Home,
    BarChart,
    Refresh,
    Filter,
    Shirt,
    ShoppingBag,
    Message,
    Help,
    Settings,
    Menu,
    Close,
    ArrowRight,
    TrendingUp,
    TrendingDown,
    Star,
    Shield,
    Zap,
    Bell,
    User,
    ChevronDown,
    LogOut,
    Search,
    Plus,
    Edit,
    Trash,
    Send,
    Eye,
    ExternalLink,
    Package,
    Truck,
    Check,
}

impl Glyph {
    /// Path data, drawn with a 2px round stroke on a 24x24 box
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            Glyph::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            Glyph::Refresh => &[
                "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
                "M21 3v5h-5",
                "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
                "M8 16H3v5",
            ],
            Glyph::Filter => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
            Glyph::Shirt => &["M20.38 3.46 16 2a4 4 0 0 1-8 0L3.62 3.46a2 2 0 0 0-1.34 2.23l.58 3.47a1 1 0 0 0 .99.84H6v10c0 1.1.9 2 2 2h8a2 2 0 0 0 2-2V10h2.15a1 1 0 0 0 .99-.84l.58-3.47a2 2 0 0 0-1.34-2.23z"],
            Glyph::ShoppingBag => &["M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z", "M3 6h18", "M16 10a4 4 0 0 1-8 0"],
            Glyph::Message => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Glyph::Help => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
                "M12 17h.01",
            ],
            Glyph::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            Glyph::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Glyph::TrendingDown => &["m22 17-8.5-8.5-5 5L2 7", "M16 17h6v-6"],
            Glyph::Star => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
            Glyph::Shield => &["M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"],
            Glyph::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Glyph::Bell => &["M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9", "M10.3 21a1.94 1.94 0 0 0 3.4 0"],
            Glyph::User => &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"],
            Glyph::ChevronDown => &["m6 9 6 6 6-6"],
            Glyph::LogOut => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"],
            Glyph::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "m21 21-4.3-4.3"],
            Glyph::Plus => &["M5 12h14", "M12 5v14"],
            Glyph::Edit => &["M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z", "m15 5 4 4"],
            Glyph::Trash => &["M3 6h18", "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6", "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"],
            Glyph::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Glyph::Eye => &["M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z", "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"],
            Glyph::ExternalLink => &["M15 3h6v6", "M10 14 21 3", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"],
            Glyph::Package => &[
                "m7.5 4.27 9 5.15",
                "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
                "m3.3 7 8.7 5 8.7-5",
                "M12 22V12",
            ],
            Glyph::Truck => &[
                "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
                "M15 18H9",
                "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
                "M7 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
                "M17 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ],
            Glyph::Check => &["M20 6 9 17l-5-5"],
        }
    }
}

/// Icon for a sidebar entry
pub fn nav_glyph(icon: NavIcon) -> Glyph {
    match icon {
        NavIcon::Home => Glyph::Home,
        NavIcon::BarChart => Glyph::BarChart,
        NavIcon::Refresh => Glyph::Refresh,
        NavIcon::Filter => Glyph::Filter,
        NavIcon::Shirt => Glyph::Shirt,
        NavIcon::ShoppingBag => Glyph::ShoppingBag,
        NavIcon::Message => Glyph::Message,
        NavIcon::Help => Glyph::Help,
        NavIcon::Settings => Glyph::Settings,
    }
}

/// Render `glyph` at `size` pixels, colored by `currentColor`
pub fn icon(glyph: Glyph, size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for (i, d) in glyph.paths().iter().enumerate() {
                path { key: "{i}", d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_icon_has_paths() {
        let all = [
            NavIcon::Home,
            NavIcon::BarChart,
            NavIcon::Refresh,
            NavIcon::Filter,
            NavIcon::Shirt,
            NavIcon::ShoppingBag,
            NavIcon::Message,
            NavIcon::Help,
            NavIcon::Settings,
        ];
        for nav in all {
            assert!(!nav_glyph(nav).paths().is_empty(), "{:?}", nav);
        }
    }
}
