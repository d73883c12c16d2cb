/// Symbolic icon ids used by the sidebar.
///
/// Each id maps to a Font Awesome solid glyph; the hosting page is expected to
/// load the Font Awesome stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteIcon {
    House,
    ChartLine,
    ChartColumn,
    Wallet,
    ChartPie,
    Envelope,
    Sliders,
    PhoneVolume,
    AngleRight,
}

impl RouteIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteIcon::House => "house",
            RouteIcon::ChartLine => "chart-line",
            RouteIcon::ChartColumn => "chart-column",
            RouteIcon::Wallet => "wallet",
            RouteIcon::ChartPie => "chart-pie",
            RouteIcon::Envelope => "envelope",
            RouteIcon::Sliders => "sliders",
            RouteIcon::PhoneVolume => "phone-volume",
            RouteIcon::AngleRight => "angle-right",
        }
    }

    /// CSS classes rendering this glyph
    pub fn css_class(&self) -> &'static str {
        match self {
            RouteIcon::House => "fa-solid fa-house",
            RouteIcon::ChartLine => "fa-solid fa-chart-line",
            RouteIcon::ChartColumn => "fa-solid fa-chart-column",
            RouteIcon::Wallet => "fa-solid fa-wallet",
            RouteIcon::ChartPie => "fa-solid fa-chart-pie",
            RouteIcon::Envelope => "fa-solid fa-envelope",
            RouteIcon::Sliders => "fa-solid fa-sliders",
            RouteIcon::PhoneVolume => "fa-solid fa-phone-volume",
            RouteIcon::AngleRight => "fa-solid fa-angle-right",
        }
    }
}

/// A navigable destination shown in the sidebar.
///
/// `title` doubles as the render key. `path` is handed to the navigator as-is
/// and is never checked against a router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RouteEntry {
    pub title: &'static str,
    pub icon: RouteIcon,
    pub path: &'static str,
}

impl RouteEntry {
    pub const fn new(title: &'static str, icon: RouteIcon, path: &'static str) -> Self {
        Self { title, icon, path }
    }
}

pub const HOME_PATH: &str = "/";

pub const PRIMARY_ROUTES: [RouteEntry; 6] = [
    RouteEntry::new("Home", RouteIcon::House, HOME_PATH),
    RouteEntry::new("Sales", RouteIcon::ChartLine, "/sales"),
    RouteEntry::new("Costs", RouteIcon::ChartColumn, "/costs"),
    RouteEntry::new("Payments", RouteIcon::Wallet, "/payments"),
    RouteEntry::new("Finances", RouteIcon::ChartPie, "/finances"),
    RouteEntry::new("Messages", RouteIcon::Envelope, "/messages"),
];

pub const BOTTOM_ROUTES: [RouteEntry; 2] = [
    RouteEntry::new("Settings", RouteIcon::Sliders, "/settings"),
    RouteEntry::new("Support", RouteIcon::PhoneVolume, "/support"),
];

/// The two ordered groups drawn by the sidebar: primary routes under the logo,
/// utility routes pinned to the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteLists {
    pub primary: &'static [RouteEntry],
    pub bottom: &'static [RouteEntry],
}

impl Default for RouteLists {
    fn default() -> Self {
        Self {
            primary: &PRIMARY_ROUTES,
            bottom: &BOTTOM_ROUTES,
        }
    }
}

impl RouteLists {
    /// All entries, primary first
    pub fn iter(&self) -> impl Iterator<Item = &'static RouteEntry> {
        self.primary.iter().chain(self.bottom.iter())
    }

    pub fn find(&self, path: &str) -> Option<&'static RouteEntry> {
        self.iter().find(|entry| entry.path == path)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.find(path).is_some()
    }
}
