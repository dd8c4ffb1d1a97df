//! Server-side renders of the header components.

use dioxus::prelude::*;

use future_tech_site::actions;
use future_tech_site::browser::SectionScroller;
use future_tech_site::components::navigation::{LanguageToggle, MobileMenu, NavigationHeader};
use future_tech_site::hooks::{use_site_config_provider, HeaderHandle};
use future_tech_site::i18n::{I18nProvider, LanguageContext};
use future_tech_site::{HeaderState, Language, LanguageStore, MenuState, NavError};

const CONFIGURED_ORDER: [&str; 7] = [
    "hero", "about", "target", "benefits", "catalunya", "dates", "contact",
];

fn render(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// `data-section` values of the rendered nav buttons, in document order
fn section_order(html: &str) -> Vec<&str> {
    html.split("data-section=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

fn use_handle(menu: MenuState, lang: Language) -> HeaderHandle {
    let config = use_site_config_provider();
    let language = LanguageContext::new(use_signal(|| lang));
    let state = use_signal(|| HeaderState { menu });
    HeaderHandle { state, language, config }
}

struct PageWithHero;

impl SectionScroller for PageWithHero {
    fn scroll_to(&self, section_id: &str) -> Result<(), NavError> {
        if section_id == "hero" {
            Ok(())
        } else {
            Err(NavError::SectionNotFound(section_id.to_string()))
        }
    }
}

#[component]
fn HeaderShell() -> Element {
    use_site_config_provider();
    rsx! {
        I18nProvider {
            NavigationHeader {}
        }
    }
}

#[component]
fn MobileMenuFixture(menu: MenuState, lang: Language) -> Element {
    let header = use_handle(menu, lang);
    let entries = actions::nav_entries(&header.config.read().menu, &header.language);
    let social_links = header.config.read().social_links.clone();
    let apply_label = header.language.translate("header.apply");

    rsx! {
        if header.is_menu_open() {
            MobileMenu { header, entries, social_links, apply_label }
        }
    }
}

#[component]
fn ToggleFixture(lang: Language) -> Element {
    let header = use_handle(MenuState::Closed, lang);
    rsx! {
        LanguageToggle { header, class: "" }
    }
}

#[component]
fn ResizeFixture(width: f64) -> Element {
    let mut header = use_handle(MenuState::Open, Language::Es);
    let closed = use_hook(|| header.apply_viewport_width(width));
    let open = header.is_menu_open();

    rsx! {
        span { id: "result", "closed={closed} open={open}" }
    }
}

#[component]
fn NavigateFixture(section: String) -> Element {
    let mut header = use_handle(MenuState::Open, Language::Es);
    let found = use_hook(|| header.navigate_with(&PageWithHero, &section));
    let open = header.is_menu_open();

    rsx! {
        span { id: "result", "found={found} open={open}" }
    }
}

#[test]
fn header_renders_configured_links_in_order() {
    let html = render(VirtualDom::new(HeaderShell));

    assert_eq!(section_order(&html), CONFIGURED_ORDER);
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"aria-label="Toggle menu""#));
    assert!(!html.contains("mobile-menu"));
    assert!(html.contains("Inscríbete"));
    assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 3);
}

#[test]
fn mobile_menu_renders_only_when_open() {
    let closed = render(VirtualDom::new_with_props(
        MobileMenuFixture,
        MobileMenuFixtureProps { menu: MenuState::Closed, lang: Language::Es },
    ));
    assert!(!closed.contains("mobile-menu"));
    assert!(section_order(&closed).is_empty());

    let open = render(VirtualDom::new_with_props(
        MobileMenuFixture,
        MobileMenuFixtureProps { menu: MenuState::Open, lang: Language::Es },
    ));
    assert!(open.contains("mobile-menu"));
    assert_eq!(section_order(&open), CONFIGURED_ORDER);
    assert!(open.contains("lang-toggle-mobile"));
}

#[test]
fn mobile_menu_follows_language() {
    let ca = render(VirtualDom::new_with_props(
        MobileMenuFixture,
        MobileMenuFixtureProps { menu: MenuState::Open, lang: Language::Ca },
    ));
    assert!(ca.contains("Inici"));
    assert!(ca.contains("Inscriu-te"));
    assert!(!ca.contains("Inscríbete"));
}

#[test]
fn language_switch_checked_for_catalan() {
    let ca = render(VirtualDom::new_with_props(
        ToggleFixture,
        ToggleFixtureProps { lang: Language::Ca },
    ));
    assert!(ca.contains(r#"aria-checked="true""#));
    assert!(ca.contains("switch switch-on"));

    let es = render(VirtualDom::new_with_props(
        ToggleFixture,
        ToggleFixtureProps { lang: Language::Es },
    ));
    assert!(es.contains(r#"aria-checked="false""#));
    assert!(!es.contains("switch-on"));
}

#[test]
fn resize_to_desktop_closes_menu() {
    let wide = render(VirtualDom::new_with_props(
        ResizeFixture,
        ResizeFixtureProps { width: 1280.0 },
    ));
    assert!(wide.contains("closed=true open=false"));

    let narrow = render(VirtualDom::new_with_props(
        ResizeFixture,
        ResizeFixtureProps { width: 800.0 },
    ));
    assert!(narrow.contains("closed=false open=true"));
}

#[test]
fn navigation_through_handle_closes_only_on_hit() {
    let hit = render(VirtualDom::new_with_props(
        NavigateFixture,
        NavigateFixtureProps { section: "hero".to_string() },
    ));
    assert!(hit.contains("found=true open=false"));

    let miss = render(VirtualDom::new_with_props(
        NavigateFixture,
        NavigateFixtureProps { section: "pricing".to_string() },
    ));
    assert!(miss.contains("found=false open=true"));
}
