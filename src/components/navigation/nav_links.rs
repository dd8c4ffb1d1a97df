use dioxus::prelude::*;

use crate::hooks::HeaderHandle;
use crate::types::NavEntry;

/// One button per menu entry, in configured order
#[component]
pub fn NavLinks(entries: Vec<NavEntry>, header: HeaderHandle, link_class: String) -> Element {
    rsx! {
        for entry in entries {
            {
                let section_id = entry.section_id.clone();
                let mut header = header;

                rsx! {
                    button {
                        key: "{entry.section_id}",
                        class: "{link_class}",
                        r#type: "button",
                        "data-section": "{entry.section_id}",
                        onclick: move |_| header.navigate_to_section(&section_id),
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
