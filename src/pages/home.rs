use dioxus::prelude::*;

use crate::hooks::use_site_config;
use crate::i18n::{use_language, LanguageStore};

/// Landing page. Renders one anchored section per menu item so the header
/// links always have a target.
#[component]
pub fn Home() -> Element {
    let config = use_site_config();
    let language = use_language();

    let section_ids: Vec<String> = config
        .read()
        .menu
        .iter()
        .map(|item| item.section_id.clone())
        .collect();

    rsx! {
        main { class: "page",
            for id in section_ids {
                {
                    let title = language.translate(&format!("{id}.title"));
                    let is_hero = id == "hero";
                    let subtitle = language.translate("hero.subtitle");

                    rsx! {
                        section {
                            key: "{id}",
                            id: "{id}",
                            class: if is_hero { "page-section page-hero" } else { "page-section" },
                            h2 { class: "section-title", "{title}" }
                            if is_hero {
                                p { class: "section-subtitle", "{subtitle}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
