//! Static site configuration: menu, social links and the application form.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{MenuItem, SocialLink, SocialPlatform};

/// Embedded at build time; edited by hand when the landing page changes.
pub const EMBEDDED_CONFIG: &str = include_str!("../assets/site.json");

/// Tailwind `lg` breakpoint. Must match the `@media` query in `assets/main.css`.
pub const DESKTOP_BREAKPOINT_PX: u32 = 1024;

pub const DEFAULT_APPLICATION_FORM_URL: &str = "https://forms.gle/9BWufxkJmet4Rt9C9";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub brand: String,
    pub menu: Vec<MenuItem>,
    pub social_links: Vec<SocialLink>,
    pub application_form_url: String,
    /// Log missing scroll targets at `warn` instead of `debug`.
    pub report_missing_anchors: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Future Tech".to_string(),
            menu: vec![
                MenuItem::new("nav.inicio", "hero"),
                MenuItem::new("nav.que-es", "about"),
                MenuItem::new("nav.dirigido", "target"),
                MenuItem::new("nav.beneficios", "benefits"),
                MenuItem::new("nav.catalunya", "catalunya"),
                MenuItem::new("nav.fechas", "dates"),
                MenuItem::new("nav.contacto", "contact"),
            ],
            social_links: vec![
                SocialLink::new(SocialPlatform::LinkedIn, "https://linkedin.com", "LinkedIn"),
                SocialLink::new(SocialPlatform::Instagram, "https://instagram.com", "Instagram"),
                SocialLink::new(SocialPlatform::Facebook, "https://facebook.com", "Facebook"),
            ],
            application_form_url: DEFAULT_APPLICATION_FORM_URL.to_string(),
            report_missing_anchors: false,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded configuration, falling back to the built-in one
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => {
                tracing::debug!(items = config.menu.len(), "Loaded site configuration");
                config
            }
            Err(e) => {
                tracing::warn!("Invalid site configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.menu.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }

        let mut seen = HashSet::new();
        for item in &self.menu {
            if !seen.insert(item.section_id.as_str()) {
                return Err(ConfigError::DuplicateSection(item.section_id.clone()));
            }
        }

        let urls = std::iter::once(&self.application_form_url)
            .chain(self.social_links.iter().map(|link| &link.href));
        for url in urls {
            if !is_http_url(url) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }

        Ok(())
    }

    pub fn is_desktop_width(&self, width: f64) -> bool {
        width >= f64::from(DESKTOP_BREAKPOINT_PX)
    }
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.menu.len(), 7);
        assert_eq!(config.application_form_url, DEFAULT_APPLICATION_FORM_URL);
    }

    #[test]
    fn test_embedded_config_matches_default() {
        assert_eq!(SiteConfig::load(), SiteConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SiteConfig::from_json(r#"{ "brand": "Other" }"#).unwrap();
        assert_eq!(config.brand, "Other");
        assert_eq!(config.menu.len(), 7);
        assert!(!config.report_missing_anchors);
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let mut config = SiteConfig::default();
        config.menu.push(MenuItem::new("nav.inicio", "hero"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateSection(id)) if id == "hero"
        ));
    }

    #[test]
    fn test_empty_menu_rejected() {
        let config = SiteConfig {
            menu: Vec::new(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyMenu)));
    }

    #[test]
    fn test_non_http_url_rejected() {
        let config = SiteConfig {
            application_form_url: "javascript:alert(1)".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));

        let mut config = SiteConfig::default();
        config.social_links[0].href = "https://".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_breakpoint_not_configurable() {
        // Fixed by the media query in main.css
        let json = r#"{ "desktop_breakpoint_px": 1280 }"#;
        assert!(matches!(SiteConfig::from_json(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "brnad": "Typo" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_breakpoint_matches_stylesheet() {
        let css = include_str!("../assets/main.css");
        let query = format!("@media (min-width: {}px)", DESKTOP_BREAKPOINT_PX);
        assert!(css.contains(&query), "main.css has no `{}`", query);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_desktop_width() {
        let config = SiteConfig::default();
        assert!(config.is_desktop_width(1024.0));
        assert!(config.is_desktop_width(1440.0));
        assert!(!config.is_desktop_width(1023.0));
    }
}
