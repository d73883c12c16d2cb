use super::route::RouteEntry;

/// Everything the sidebar markup needs, already resolved against the current
/// state and theme. The component maps this one-to-one onto elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarView {
    pub is_open: bool,
    /// Panel width, animated by the stylesheet
    pub width: &'static str,
    pub state_class: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub hover_background: &'static str,
    pub hover_text: &'static str,
    pub logo_text: &'static str,
    pub primary: Vec<NavItemView>,
    pub bottom: Vec<NavItemView>,
    pub toggle: ToggleView,
}

impl SidebarView {
    /// Items flagged active across both groups
    pub fn active_items(&self) -> impl Iterator<Item = &NavItemView> {
        self.primary
            .iter()
            .chain(self.bottom.iter())
            .filter(|item| item.is_active)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemView {
    pub entry: RouteEntry,
    pub is_active: bool,
    pub background: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleView {
    pub left: &'static str,
    pub background: &'static str,
    pub color: &'static str,
    pub rotation: &'static str,
}
