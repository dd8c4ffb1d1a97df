//! Header actions, written against the bridge traits so they run without a DOM.
//!
//! Every action is best-effort: failures are logged and swallowed here, so the
//! event handlers in the components never see an error.

use crate::browser::{ExternalOpener, SectionScroller};
use crate::config::SiteConfig;
use crate::error::NavError;
use crate::i18n::{Language, LanguageStore};
use crate::state::{HeaderEvent, HeaderState, MenuState};
use crate::types::{MenuItem, NavEntry};

pub fn toggle_mobile_menu(state: &mut HeaderState) -> MenuState {
    state.apply(HeaderEvent::ToggleMenu);
    tracing::debug!(open = state.is_menu_open(), "Mobile menu toggled");
    state.menu
}

/// Scroll to `section_id` and close the menu. Returns `true` if the anchor was found.
///
/// A missing anchor leaves the state untouched.
pub fn navigate_to_section(
    scroller: &impl SectionScroller,
    state: &mut HeaderState,
    section_id: &str,
    config: &SiteConfig,
) -> bool {
    match scroller.scroll_to(section_id) {
        Ok(()) => {
            state.apply(HeaderEvent::SectionReached);
            true
        }
        Err(NavError::SectionNotFound(id)) => {
            if config.report_missing_anchors {
                tracing::warn!("No anchor with id '{}' on the page", id);
            } else {
                tracing::debug!("No anchor with id '{}' on the page", id);
            }
            false
        }
        Err(e) => {
            tracing::warn!("Could not scroll to '{}': {}", section_id, e);
            false
        }
    }
}

pub fn change_language(store: &mut impl LanguageStore, next: Language) {
    store.set(next);
}

/// Change language from a raw code, clamping unsupported codes to the default.
pub fn change_language_code(store: &mut impl LanguageStore, code: &str) -> Language {
    let next = Language::from_code(code);
    store.set(next);
    next
}

pub fn open_application_form(opener: &impl ExternalOpener, config: &SiteConfig) {
    let url = &config.application_form_url;
    match opener.open_in_new_tab(url) {
        Ok(()) => tracing::info!("Opened application form"),
        Err(e) => tracing::warn!("Could not open application form: {}", e),
    }
}

/// Translated menu entries in configured order
pub fn nav_entries(menu: &[MenuItem], store: &impl LanguageStore) -> Vec<NavEntry> {
    menu.iter()
        .map(|item| NavEntry {
            label: store.translate(&item.label_key),
            section_id: item.section_id.clone(),
        })
        .collect()
}
