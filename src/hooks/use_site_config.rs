use dioxus::prelude::*;

use crate::config::SiteConfig;

/// Load the site configuration once and share it with the tree.
pub fn use_site_config_provider() -> ReadOnlySignal<SiteConfig> {
    let config = use_signal(SiteConfig::load);
    use_context_provider(|| ReadOnlySignal::new(config))
}

pub fn use_site_config() -> ReadOnlySignal<SiteConfig> {
    if let Some(config) = try_use_context::<ReadOnlySignal<SiteConfig>>() {
        return config;
    }

    tracing::warn!("Missing site configuration context, using built-in defaults");
    ReadOnlySignal::new(use_signal(SiteConfig::default))
}
