//! Application shell

use dioxus::prelude::*;

use crate::components::NavigationHeader;
use crate::hooks::use_site_config_provider;
use crate::i18n::I18nProvider;
use crate::pages::Home;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Install the console logger. Returns `false` if one was already installed;
/// the site runs either way.
pub fn init_logging() -> bool {
    match dioxus::logger::init(tracing::Level::INFO) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Logger not installed: {}", e);
            false
        }
    }
}

#[component]
pub fn App() -> Element {
    use_site_config_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        I18nProvider {
            NavigationHeader {}
            Home {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_logger_init_does_not_panic() {
        init_logging();
        assert!(!init_logging());
    }
}
