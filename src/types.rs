use serde::{Deserialize, Serialize};

/// One entry of the header navigation.
///
/// `label_key` is looked up in the translation catalog at render time,
/// `section_id` must match the `id` of an anchor on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label_key: String,
    pub section_id: String,
}

impl MenuItem {
    pub fn new(label_key: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            section_id: section_id.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    LinkedIn,
    Instagram,
    Facebook,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: String,
    pub label: String, // accessible name
}

impl SocialLink {
    pub fn new(platform: SocialPlatform, href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            platform,
            href: href.into(),
            label: label.into(),
        }
    }
}

/// A menu item with its label already translated, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub section_id: String,
}
