use dioxus::prelude::*;

use crate::hooks::HeaderHandle;
use crate::i18n::{Language, LanguageStore};

/// `ES [switch] CA`. The switch is on when Catalan is active.
#[component]
pub fn LanguageToggle(header: HeaderHandle, class: String) -> Element {
    let current = header.language.current();
    let checked = current.is_switch_checked();

    let label_class = |lang: Language| {
        if lang == current {
            "lang-label lang-label-active"
        } else {
            "lang-label"
        }
    };

    rsx! {
        div { class: "lang-toggle {class}",
            span { class: label_class(Language::Es), {Language::Es.label()} }
            button {
                class: if checked { "switch switch-on" } else { "switch" },
                r#type: "button",
                role: "switch",
                aria_checked: "{checked}",
                aria_label: "ES / CA",
                onclick: move |_| {
                    let mut header = header;
                    header.change_language(Language::from_switch(!checked));
                },
                span { class: "switch-thumb" }
            }
            span { class: label_class(Language::Ca), {Language::Ca.label()} }
        }
    }
}
