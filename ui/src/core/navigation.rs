//! Sidebar menu entries and the active-entry model.

use std::fmt;

/// Identifier of a sidebar menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemId {
    Dashboard,
    Leaderboard,
    Order,
    Products,
    SalesReport,
    Messages,
    Settings,
    SignOut,
}

impl MenuItemId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Leaderboard => "leaderboard",
            Self::Order => "order",
            Self::Products => "products",
            Self::SalesReport => "salesReport",
            Self::Messages => "messages",
            Self::Settings => "settings",
            Self::SignOut => "signOut",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        MENU_ITEMS
            .iter()
            .map(|item| item.id)
            .find(|id| id.as_str() == raw)
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static sidebar entry. `label_key` is a Fluent message id resolved at
/// render time so labels follow the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub label_key: &'static str,
    pub icon: &'static str,
}

/// Display order of the sidebar.
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { id: MenuItemId::Dashboard, label_key: "nav-dashboard", icon: "▦" },
    MenuItem { id: MenuItemId::Leaderboard, label_key: "nav-leaderboard", icon: "▥" },
    MenuItem { id: MenuItemId::Order, label_key: "nav-order", icon: "🛒" },
    MenuItem { id: MenuItemId::Products, label_key: "nav-products", icon: "▤" },
    MenuItem { id: MenuItemId::SalesReport, label_key: "nav-sales-report", icon: "📈" },
    MenuItem { id: MenuItemId::Messages, label_key: "nav-messages", icon: "✉" },
    MenuItem { id: MenuItemId::Settings, label_key: "nav-settings", icon: "⚙" },
    MenuItem { id: MenuItemId::SignOut, label_key: "nav-sign-out", icon: "⎋" },
];

/// Menu entries plus the currently active one.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationModel {
    items: &'static [MenuItem],
    active: MenuItemId,
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new(MENU_ITEMS, MenuItemId::Dashboard)
    }
}

impl NavigationModel {
    pub fn new(items: &'static [MenuItem], active: MenuItemId) -> Self {
        Self { items, active }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    pub fn active(&self) -> MenuItemId {
        self.active
    }

    pub fn is_active(&self, id: MenuItemId) -> bool {
        self.active == id
    }

    pub fn select(&mut self, id: MenuItemId) {
        self.active = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_ids_are_unique_and_parse_back() {
        let mut seen = HashSet::new();
        for item in MENU_ITEMS {
            assert!(seen.insert(item.id), "duplicate id {}", item.id);
            assert_eq!(MenuItemId::parse(item.id.as_str()), Some(item.id));
        }
        assert_eq!(MenuItemId::parse("unknown"), None);
    }

    #[test]
    fn default_model_starts_on_dashboard() {
        let mut model = NavigationModel::default();
        assert_eq!(model.active(), MenuItemId::Dashboard);
        assert_eq!(model.items().first().map(|i| i.id), Some(MenuItemId::Dashboard));
        model.select(MenuItemId::Order);
        assert!(model.is_active(MenuItemId::Order));
    }
}
