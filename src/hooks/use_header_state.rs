use dioxus::prelude::*;

use crate::actions;
use crate::browser::{BrowserWindow, SectionScroller};
use crate::config::SiteConfig;
use crate::hooks::use_viewport_width;
use crate::i18n::{Language, LanguageContext};
use crate::state::{HeaderEvent, HeaderState};

/// Header state plus the handles its event handlers need.
///
/// Cheap to copy into `onclick` closures.
#[derive(Clone, Copy, PartialEq)]
pub struct HeaderHandle {
    pub state: Signal<HeaderState>,
    pub language: LanguageContext,
    pub config: ReadOnlySignal<SiteConfig>,
}

/// Create the header state for this mount. The menu closes when the
/// window grows to desktop width.
pub fn use_header_state(language: LanguageContext, config: ReadOnlySignal<SiteConfig>) -> HeaderHandle {
    let state = use_signal(HeaderState::default);
    let width = use_viewport_width();
    let mut header = HeaderHandle { state, language, config };

    use_effect(move || {
        if let Some(w) = width() {
            header.apply_viewport_width(w);
        }
    });

    header
}

impl HeaderHandle {
    pub fn is_menu_open(&self) -> bool {
        self.state.read().is_menu_open()
    }

    /// Run `f` on a copy of the state; the signal is only written when it changed.
    fn update(&mut self, f: impl FnOnce(&mut HeaderState)) -> bool {
        let current = *self.state.peek();
        let mut next = current;
        f(&mut next);
        if next != current {
            self.state.set(next);
            true
        } else {
            false
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.update(|state| {
            actions::toggle_mobile_menu(state);
        });
    }

    pub fn navigate_to_section(&mut self, section_id: &str) {
        self.navigate_with(&BrowserWindow, section_id);
    }

    pub fn navigate_with(&mut self, scroller: &impl SectionScroller, section_id: &str) -> bool {
        let config = self.config;
        let mut found = false;
        self.update(|state| {
            found = actions::navigate_to_section(scroller, state, section_id, &config.read());
        });
        found
    }

    /// Close the menu once the window reaches desktop width. Returns `true` if it closed.
    pub fn apply_viewport_width(&mut self, width: f64) -> bool {
        let desktop = self.config.read().is_desktop_width(width);
        let closed = self.update(|state| {
            state.apply(HeaderEvent::ViewportResized { desktop });
        });
        if closed {
            tracing::debug!(width, "Closed mobile menu on resize to desktop width");
        }
        closed
    }

    pub fn change_language(&mut self, next: Language) {
        actions::change_language(&mut self.language, next);
    }

    pub fn open_application_form(&self) {
        actions::open_application_form(&BrowserWindow, &self.config.read());
    }
}
