use dioxus::prelude::*;

use super::language_menu::LanguageMenu;
use crate::core::breakpoint::is_compact;
use crate::core::search::{SearchFocus, SearchModal};
use crate::hooks::{
    request_focus, request_focus_after, use_localized, use_scroll_lock, use_viewport_width,
    ElementRef,
};
use crate::t;

/// Delay before focusing the modal input so it is mounted and visible.
const SEARCH_FOCUS_DELAY_MS: u32 = 100;

/// Top bar: page title, search, language picker, notifications and profile.
#[component]
pub fn Header() -> Element {
    use_localized();
    let mut modal = use_signal(SearchModal::default);
    let mut open_button: ElementRef = use_signal(|| None);
    let mut modal_input: ElementRef = use_signal(|| None);

    let locked = use_memo(move || modal.read().scroll_locked());
    use_scroll_lock(locked);

    let width = use_viewport_width();
    use_effect(move || {
        let Some(width) = width() else {
            return;
        };
        let mut next = modal.peek().clone();
        if next.fit_layout(is_compact(width)) {
            modal.set(next);
        }
    });

    let focus = move |target: Option<SearchFocus>| match target {
        Some(SearchFocus::Input) => request_focus_after(modal_input, SEARCH_FOCUS_DELAY_MS),
        Some(SearchFocus::OpenButton) => request_focus(open_button),
        None => {}
    };

    let state = modal.read().clone();

    rsx! {
        header { class: "header",
            h1 { class: "header__title", {t!("dashboard")} }

            div { class: "header__search",
                span { class: "header__search-icon", aria_hidden: "true", "⌕" }
                input {
                    class: "header__search-input",
                    r#type: "search",
                    placeholder: t!("search-placeholder"),
                    aria_label: t!("search"),
                }
            }

            div { class: "header__actions",
                button {
                    class: "header__icon-button header__search-button",
                    r#type: "button",
                    aria_label: t!("open-search"),
                    onmounted: move |evt| open_button.set(Some(evt.data())),
                    onclick: move |_| {
                        let target = modal.write().open();
                        focus(target);
                    },
                    "⌕"
                }

                LanguageMenu {}

                button {
                    class: "header__icon-button header__bell",
                    r#type: "button",
                    aria_label: t!("notifications"),
                    "🔔"
                    span { class: "header__bell-dot", aria_hidden: "true" }
                }

                div { class: "header__profile",
                    img {
                        class: "header__avatar",
                        src: "https://i.pravatar.cc/40",
                        alt: t!("profile-alt"),
                    }
                    div { class: "header__profile-text",
                        p { class: "header__profile-name", {t!("user-name")} }
                        p { class: "header__profile-role", {t!("admin")} }
                    }
                }
            }
        }

        if state.is_open() {
            div {
                class: "search-modal",
                role: "dialog",
                aria_modal: "true",
                aria_label: t!("search"),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        evt.prevent_default();
                        let target = modal.write().close();
                        focus(target);
                    }
                },
                div {
                    class: "search-modal__backdrop",
                    onclick: move |_| {
                        let target = modal.write().close();
                        focus(target);
                    },
                }
                div { class: "search-modal__panel",
                    input {
                        class: "search-modal__input",
                        r#type: "search",
                        placeholder: t!("search-placeholder"),
                        aria_label: t!("search"),
                        value: "{state.query()}",
                        onmounted: move |evt| modal_input.set(Some(evt.data())),
                        oninput: move |evt| modal.write().set_query(evt.value()),
                    }
                    button {
                        class: "header__icon-button",
                        r#type: "button",
                        aria_label: t!("close-search"),
                        onclick: move |_| {
                            let target = modal.write().close();
                            focus(target);
                        },
                        "✕"
                    }
                }
            }
        }
    }
}
