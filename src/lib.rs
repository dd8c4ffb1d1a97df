//! Future Tech landing page
//!
//! A Dioxus web app whose only moving part is the navigation header:
//! section links that smooth-scroll to anchors, an ES/CA language switch,
//! social links and an apply button that opens the external form.
//!
//! The header logic (`state`, `actions`) is written against the traits in
//! `browser` and `i18n`, so it runs and is tested without a DOM.

pub mod actions;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod types;

pub use app::App;
pub use config::SiteConfig;
pub use error::{ConfigError, NavError, NavResult};
pub use i18n::{Language, LanguageStore};
pub use state::{HeaderEvent, HeaderState, MenuState};
