use dioxus::prelude::*;
use tracing::info;

use crate::core::dropdown::{CloseReason, DropdownEffect, DropdownKey, LanguageDropdown};
use crate::hooks::{request_focus, use_language, ElementRef};
use crate::i18n::{tr_or, FluentLocale, Language, LocaleSwitcher, LANGUAGES};
use crate::t;

pub fn dropdown_key(key: &Key) -> DropdownKey {
    match key {
        Key::ArrowDown => DropdownKey::ArrowDown,
        Key::ArrowUp => DropdownKey::ArrowUp,
        Key::Enter => DropdownKey::Enter,
        Key::Escape => DropdownKey::Escape,
        _ => DropdownKey::Other,
    }
}

/// Signals a dropdown effect may touch.
#[derive(Clone, Copy)]
struct MenuHandles {
    dropdown: Signal<LanguageDropdown>,
    language: Signal<&'static Language>,
    trigger: ElementRef,
    search: ElementRef,
    error: Signal<Option<String>>,
}

fn apply_effect(effect: DropdownEffect, handles: MenuHandles) {
    match effect {
        DropdownEffect::None => {}
        DropdownEffect::FocusSearch => request_focus(handles.search),
        DropdownEffect::FocusTrigger => request_focus(handles.trigger),
        DropdownEffect::Switch(target) => {
            let MenuHandles {
                mut dropdown,
                mut language,
                mut error,
                ..
            } = handles;
            spawn(async move {
                let outcome = FluentLocale.switch(target.code).await;
                let result = dropdown.write().finish_switch(outcome);
                match result {
                    Ok(next) => {
                        info!(lang = target.code, "language changed");
                        error.set(None);
                        language.set(target);
                        apply_effect(next, handles);
                    }
                    Err(_) => {
                        error.set(Some(tr_or(
                            "language-change-error",
                            "Failed to change language.",
                        )));
                    }
                }
            });
        }
    }
}

/// Searchable language picker in the header.
#[component]
pub fn LanguageMenu() -> Element {
    let language = use_language();
    let mut dropdown = use_signal(|| LanguageDropdown::new(LANGUAGES));
    let mut trigger: ElementRef = use_signal(|| None);
    let mut search: ElementRef = use_signal(|| None);
    let mut error = use_signal(|| None::<String>);

    let handles = MenuHandles {
        dropdown,
        language,
        trigger,
        search,
        error,
    };

    let current = language();
    let state = dropdown.read().clone();
    let filtered = state.filtered();
    let busy = state.pending().is_some();

    rsx! {
        div {
            class: "lang-menu",
            onkeydown: move |evt: KeyboardEvent| {
                let key = dropdown_key(&evt.key());
                if key == DropdownKey::Other || !dropdown.read().is_open() {
                    return;
                }
                evt.prevent_default();
                let effect = dropdown.write().key(key, language());
                apply_effect(effect, handles);
            },

            button {
                class: "lang-menu__trigger",
                r#type: "button",
                aria_haspopup: "listbox",
                aria_expanded: "{state.is_open()}",
                aria_label: t!("language-label"),
                onmounted: move |evt| trigger.set(Some(evt.data())),
                onclick: move |_| {
                    let effect = dropdown.write().toggle();
                    apply_effect(effect, handles);
                },
                img { class: "lang-menu__flag", src: current.flag, alt: "" }
                span { class: "lang-menu__label", "{current.label}" }
                span { class: "lang-menu__chevron", aria_hidden: "true", "▾" }
            }

            if state.is_open() {
                div {
                    class: "lang-menu__backdrop",
                    onclick: move |_| {
                        let effect = dropdown.write().close(CloseReason::OutsideClick);
                        apply_effect(effect, handles);
                    },
                }
                div { class: "lang-menu__panel",
                    input {
                        class: "lang-menu__search",
                        r#type: "text",
                        placeholder: t!("filter-languages"),
                        aria_label: t!("filter-languages"),
                        value: "{state.query()}",
                        onmounted: move |evt| search.set(Some(evt.data())),
                        oninput: move |evt| dropdown.write().set_query(evt.value()),
                    }
                    if filtered.is_empty() {
                        p { class: "lang-menu__empty", {t!("no-languages-found")} }
                    } else {
                        ul { class: "lang-menu__list", role: "listbox",
                            for (index, lang) in filtered.iter().copied().enumerate() {
                                li {
                                    key: "{lang.code}",
                                    role: "option",
                                    aria_selected: lang.code == current.code,
                                    class: if state.highlighted() == Some(index) {
                                        "lang-menu__option lang-menu__option--highlighted"
                                    } else {
                                        "lang-menu__option"
                                    },
                                    button {
                                        r#type: "button",
                                        disabled: busy,
                                        onclick: move |_| {
                                            let effect = dropdown.write().select(lang.code, language());
                                            apply_effect(effect, handles);
                                        },
                                        img { class: "lang-menu__flag", src: lang.flag, alt: "" }
                                        span { "{lang.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "toast toast--error", role: "alert",
                    span { "{message}" }
                    button {
                        class: "toast__dismiss",
                        r#type: "button",
                        onclick: move |_| error.set(None),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_mapping_covers_navigation_keys() {
        assert_eq!(dropdown_key(&Key::ArrowDown), DropdownKey::ArrowDown);
        assert_eq!(dropdown_key(&Key::ArrowUp), DropdownKey::ArrowUp);
        assert_eq!(dropdown_key(&Key::Enter), DropdownKey::Enter);
        assert_eq!(dropdown_key(&Key::Escape), DropdownKey::Escape);
        assert_eq!(dropdown_key(&Key::Tab), DropdownKey::Other);
        assert_eq!(
            dropdown_key(&Key::Character("a".to_string())),
            DropdownKey::Other
        );
    }
}
