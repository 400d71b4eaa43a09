use dioxus::prelude::*;

use crate::core::navigation::{MenuItemId, NavigationModel, MENU_ITEMS};
use crate::core::sidebar::SidebarController;
use crate::hooks::{use_language, use_scroll_lock, use_viewport_width, use_window_escape};
use crate::i18n::tr;
use crate::t;

/// Class list for the sidebar panel.
pub fn sidebar_classes(compact: bool, open: bool, rtl: bool) -> String {
    let mut classes = vec!["sidebar"];
    classes.push(if compact { "sidebar--compact" } else { "sidebar--wide" });
    if compact {
        classes.push(if open { "sidebar--open" } else { "sidebar--closed" });
    }
    if rtl {
        classes.push("sidebar--rtl");
    }
    classes.join(" ")
}

/// Responsive navigation sidebar. Docked on wide viewports, an overlay
/// drawer below the compact breakpoint.
#[component]
pub fn Sidebar() -> Element {
    let language = use_language();
    let width = use_viewport_width();
    let mut controller = use_signal(|| None::<SidebarController>);
    let mut active = try_use_context::<Signal<MenuItemId>>();

    use_effect(move || {
        let Some(width) = width() else {
            return;
        };
        let mut slot = controller.write();
        match slot.as_mut() {
            Some(sidebar) => {
                sidebar.resize(width);
            }
            None => {
                let current = active.map(|id| *id.peek()).unwrap_or(MenuItemId::Dashboard);
                let navigation = NavigationModel::new(MENU_ITEMS, current);
                *slot = Some(SidebarController::with_navigation(width, navigation));
            }
        }
    });

    let locked = use_memo(move || {
        controller
            .read()
            .as_ref()
            .is_some_and(|sidebar| sidebar.scroll_locked())
    });
    use_scroll_lock(locked);

    use_window_escape(move || {
        if let Some(sidebar) = controller.write().as_mut() {
            sidebar.escape();
        }
    });

    let Some(state) = controller() else {
        return rsx! {};
    };
    let compact = state.is_compact();
    let open = state.is_open();
    let rtl = language().direction.is_rtl();
    let classes = sidebar_classes(compact, open, rtl);
    let hidden = compact && !open;
    let toggle_label = if open { t!("close-menu") } else { t!("open-menu") };

    rsx! {
        if compact {
            button {
                class: "sidebar-toggle",
                r#type: "button",
                aria_controls: "sidebar",
                aria_expanded: "{open}",
                aria_label: toggle_label,
                onclick: move |_| {
                    if let Some(sidebar) = controller.write().as_mut() {
                        sidebar.toggle();
                    }
                },
                if open { "✕" } else { "☰" }
            }
        }

        if compact && open {
            div {
                class: "sidebar__backdrop",
                aria_hidden: "true",
                onclick: move |_| {
                    if let Some(sidebar) = controller.write().as_mut() {
                        sidebar.close();
                    }
                },
            }
        }

        aside {
            id: "sidebar",
            class: "{classes}",
            aria_label: t!("sidebar-navigation"),
            aria_hidden: "{hidden}",

            div { class: "sidebar__brand",
                span { class: "sidebar__logo", aria_hidden: "true", "D" }
                span { class: "sidebar__brand-name", {t!("logo-text")} }
                if compact {
                    button {
                        class: "sidebar__close",
                        r#type: "button",
                        aria_label: t!("close-menu"),
                        onclick: move |_| {
                            if let Some(sidebar) = controller.write().as_mut() {
                                sidebar.close();
                            }
                        },
                        "✕"
                    }
                }
            }

            nav { class: "sidebar__nav",
                ul { role: "menu",
                    for item in state.navigation().items().iter().copied() {
                        li { key: "{item.id}", role: "none",
                            SidebarItem {
                                id: item.id,
                                label: tr(item.label_key),
                                icon: item.icon,
                                active: state.navigation().is_active(item.id),
                                on_select: move |id: MenuItemId| {
                                    if let Some(sidebar) = controller.write().as_mut() {
                                        sidebar.select(id);
                                    }
                                    if let Some(active) = active.as_mut() {
                                        active.set(id);
                                    }
                                },
                            }
                        }
                    }
                }
            }

            div { class: "sidebar__promo",
                div { class: "sidebar__promo-logo", aria_hidden: "true", "D" }
                h3 { class: "sidebar__promo-title", {t!("dabang-pro")} }
                p { class: "sidebar__promo-text", {t!("get-access")} }
                button { class: "button button--light", r#type: "button", {t!("get-pro")} }
            }
        }
    }
}

#[component]
fn SidebarItem(
    id: MenuItemId,
    label: String,
    icon: &'static str,
    active: bool,
    on_select: EventHandler<MenuItemId>,
) -> Element {
    let current = if active { "page" } else { "false" };
    rsx! {
        button {
            class: if active { "sidebar__item sidebar__item--active" } else { "sidebar__item" },
            r#type: "button",
            role: "menuitem",
            aria_current: current,
            onclick: move |_| on_select.call(id),
            span { class: "sidebar__item-icon", aria_hidden: "true", "{icon}" }
            span { class: "sidebar__item-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_has_no_open_state_class() {
        assert_eq!(sidebar_classes(false, true, false), "sidebar sidebar--wide");
    }

    #[test]
    fn compact_rtl_drawer_classes() {
        assert_eq!(
            sidebar_classes(true, false, true),
            "sidebar sidebar--compact sidebar--closed sidebar--rtl"
        );
        assert_eq!(
            sidebar_classes(true, true, false),
            "sidebar sidebar--compact sidebar--open"
        );
    }
}
