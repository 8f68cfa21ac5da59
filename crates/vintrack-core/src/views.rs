//! View registry and sidebar layout.

use std::fmt;

/// A screen inside the authenticated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Feed,
    Autocoop,
    Filters,
    Stats,
    Orders,
    Messaging,
    Account,
}

impl View {
    /// Every view, in sidebar order (account last)
    pub const ALL: [View; 7] = [
        View::Feed,
        View::Stats,
        View::Autocoop,
        View::Filters,
        View::Orders,
        View::Messaging,
        View::Account,
    ];

    /// Stable key, used for element ids and logs
    pub fn key(&self) -> &'static str {
        match self {
            View::Feed => "feed",
            View::Autocoop => "autocoop",
            View::Filters => "filters",
            View::Stats => "stats",
            View::Orders => "orders",
            View::Messaging => "messaging",
            View::Account => "account",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            View::Feed => "Fil d'actualité",
            View::Autocoop => "Mon autocoop",
            View::Filters => "Mes filtres",
            View::Stats => "Mes stats",
            View::Orders => "Mes commandes",
            View::Messaging => "Messagerie",
            View::Account => "Mon compte",
        }
    }

    pub fn from_key(key: &str) -> Option<View> {
        View::ALL.iter().copied().find(|v| v.key() == key)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sidebar icon names (rendered as inline Lucide SVGs by the UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    BarChart,
    Refresh,
    Filter,
    Shirt,
    ShoppingBag,
    Message,
    Help,
    Settings,
}

/// What clicking a sidebar entry does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Switch the active view
    View(View),
    /// Open a URL in the system browser
    External(String),
    /// Placeholder entry without behaviour yet
    Inert,
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    pub target: NavTarget,
}

impl NavEntry {
    fn view(view: View, icon: NavIcon) -> Self {
        Self {
            key: view.key(),
            label: view.label(),
            icon,
            target: NavTarget::View(view),
        }
    }

    /// Whether this entry represents `view`
    pub fn is_active(&self, view: View) -> bool {
        self.target == NavTarget::View(view)
    }
}

/// A titled group of sidebar entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub entries: Vec<NavEntry>,
}

/// Sidebar layout. `discord_invite` is the community server link.
pub fn sidebar_sections(discord_invite: &str) -> Vec<NavSection> {
    vec![
        NavSection {
            title: "BOT VINTRACK",
            entries: vec![
                NavEntry::view(View::Feed, NavIcon::Home),
                NavEntry::view(View::Stats, NavIcon::BarChart),
                NavEntry::view(View::Autocoop, NavIcon::Refresh),
                NavEntry::view(View::Filters, NavIcon::Filter),
            ],
        },
        NavSection {
            title: "CRM VINTRACK",
            entries: vec![
                NavEntry {
                    key: "dressing",
                    label: "Mon dressing",
                    icon: NavIcon::Shirt,
                    target: NavTarget::Inert,
                },
                NavEntry::view(View::Orders, NavIcon::ShoppingBag),
                NavEntry::view(View::Messaging, NavIcon::Message),
            ],
        },
        NavSection {
            title: "LIENS UTILES",
            entries: vec![
                NavEntry {
                    key: "help",
                    label: "Aide",
                    icon: NavIcon::Help,
                    target: NavTarget::Inert,
                },
                NavEntry {
                    key: "discord",
                    label: "Serveur Discord",
                    icon: NavIcon::Settings,
                    target: NavTarget::External(discord_invite.to_string()),
                },
            ],
        },
    ]
}
