//! Language context shared by the header and the page sections.
//!
//! The current language lives in a `Signal` installed by [`I18nProvider`].
//! Components never touch it directly: they go through [`LanguageStore`],
//! which only exposes a read, a change request and the translation lookup.

use dioxus::prelude::*;

pub mod catalog;

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Es,
    Ca,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::Ca];

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::Ca => "ca",
        }
    }

    /// Short label shown next to the language switch
    pub fn label(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::Ca => "CA",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" => Some(Language::Es),
            "ca" | "ca-es" => Some(Language::Ca),
            _ => None,
        }
    }

    /// Like [`Language::parse`], but unknown codes clamp to the default language.
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or_else(|| {
            tracing::debug!("Unsupported language code '{}', using {}", code, Language::default().code());
            Language::default()
        })
    }

    /// The language switch is a two-position toggle: checked means Catalan.
    pub fn from_switch(checked: bool) -> Self {
        if checked {
            Language::Ca
        } else {
            Language::Es
        }
    }

    pub fn is_switch_checked(self) -> bool {
        self == Language::Ca
    }
}

/// Read access and change requests for the active language.
pub trait LanguageStore {
    fn current(&self) -> Language;
    fn set(&mut self, lang: Language);

    fn translate(&self, key: &str) -> String {
        catalog::translate(self.current(), key)
    }
}

/// Signal-backed language store handed down the component tree
#[derive(Clone, Copy, PartialEq)]
pub struct LanguageContext {
    lang: Signal<Language>,
}

impl LanguageContext {
    pub fn new(lang: Signal<Language>) -> Self {
        Self { lang }
    }
}

impl LanguageStore for LanguageContext {
    fn current(&self) -> Language {
        *self.lang.read()
    }

    fn set(&mut self, lang: Language) {
        if *self.lang.peek() != lang {
            tracing::info!("Language changed to {}", lang.code());
            self.lang.set(lang);
        }
    }
}

/// Provide a [`LanguageContext`] to the component tree, starting in Spanish.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(Language::default);
    use_context_provider(|| LanguageContext::new(lang));

    rsx! { {children} }
}

pub fn use_language() -> LanguageContext {
    if let Some(ctx) = try_use_context::<LanguageContext>() {
        return ctx;
    }

    // Rendered outside the provider: keep working with a local signal.
    tracing::warn!("Missing I18nProvider context, using a local language signal");
    LanguageContext::new(use_signal(Language::default))
}
