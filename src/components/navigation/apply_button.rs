use dioxus::prelude::*;

use crate::hooks::HeaderHandle;

/// Call-to-action that opens the application form in a new tab
#[component]
pub fn ApplyButton(header: HeaderHandle, label: String, class: String) -> Element {
    rsx! {
        button {
            class: "btn-apply {class}",
            r#type: "button",
            onclick: move |_| header.open_application_form(),
            "{label}"
        }
    }
}
