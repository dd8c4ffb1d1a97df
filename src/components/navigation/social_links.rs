use dioxus::prelude::*;

use crate::components::icons::SocialIcon;
use crate::types::SocialLink;

#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> Element {
    rsx! {
        for link in links {
            a {
                key: "{link.label}",
                class: "social-link",
                href: "{link.href}",
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "{link.label}",
                SocialIcon { platform: link.platform }
            }
        }
    }
}
