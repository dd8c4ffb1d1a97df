use dioxus::prelude::*;

use crate::actions;
use crate::components::icons::{CloseIcon, MenuIcon};
use crate::components::navigation::{ApplyButton, LanguageToggle, NavLinks, SocialLinks};
use crate::hooks::{use_header_state, use_site_config, HeaderHandle};
use crate::i18n::{use_language, LanguageStore};
use crate::types::{NavEntry, SocialLink};

/// Fixed top bar: brand, section links, language switch, socials and the apply button.
///
/// Below the desktop breakpoint everything but the brand collapses behind a
/// toggle button into [`MobileMenu`].
#[component]
pub fn NavigationHeader() -> Element {
    let config = use_site_config();
    let language = use_language();
    let mut header = use_header_state(language, config);

    let (brand, entries, social_links) = {
        let cfg = config.read();
        (
            cfg.brand.clone(),
            actions::nav_entries(&cfg.menu, &language),
            cfg.social_links.clone(),
        )
    };
    let apply_label = language.translate("header.apply");
    let is_open = header.is_menu_open();

    rsx! {
        header { class: "site-header",
            div { class: "site-header-inner",
                div { class: "site-header-bar",
                    // Logo
                    div { class: "brand",
                        h1 { class: "brand-title", "{brand}" }
                    }

                    // Desktop navigation
                    nav { class: "desktop-only nav-desktop",
                        NavLinks {
                            entries: entries.clone(),
                            header,
                            link_class: "nav-link",
                        }
                    }

                    // Language switch, socials & CTA
                    div { class: "desktop-only header-actions",
                        LanguageToggle { header, class: "" }
                        SocialLinks { links: social_links.clone() }
                        ApplyButton { header, label: apply_label.clone(), class: "" }
                    }

                    button {
                        class: "mobile-only menu-toggle",
                        r#type: "button",
                        aria_label: "Toggle menu",
                        aria_expanded: "{is_open}",
                        onclick: move |_| header.toggle_mobile_menu(),
                        if is_open {
                            CloseIcon {}
                        } else {
                            MenuIcon {}
                        }
                    }
                }

                if is_open {
                    MobileMenu {
                        header,
                        entries: entries.clone(),
                        social_links: social_links.clone(),
                        apply_label: apply_label.clone(),
                    }
                }
            }
        }
    }
}

/// Collapsible panel shown under the bar on narrow viewports
#[component]
pub fn MobileMenu(
    header: HeaderHandle,
    entries: Vec<NavEntry>,
    social_links: Vec<SocialLink>,
    apply_label: String,
) -> Element {
    rsx! {
        div { class: "mobile-only mobile-menu",
            nav { class: "mobile-menu-nav",
                LanguageToggle { header, class: "lang-toggle-mobile" }

                NavLinks {
                    entries,
                    header,
                    link_class: "nav-link nav-link-mobile",
                }

                div { class: "mobile-menu-socials",
                    SocialLinks { links: social_links }
                }

                ApplyButton { header, label: apply_label, class: "btn-apply-mobile" }
            }
        }
    }
}
