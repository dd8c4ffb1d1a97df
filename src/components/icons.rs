//! Inline SVG glyphs (Lucide outlines) used by the header.

use dioxus::prelude::*;

use crate::types::SocialPlatform;

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-lg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M4 6h16M4 12h16M4 18h16" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-lg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18M6 6l12 12" }
        }
    }
}

#[component]
pub fn SocialIcon(platform: SocialPlatform) -> Element {
    let shapes = match platform {
        SocialPlatform::LinkedIn => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        SocialPlatform::Instagram => rsx! {
            rect { x: "2", y: "2", width: "20", height: "20", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", y1: "6.5", x2: "17.51", y2: "6.5" }
        },
        SocialPlatform::Facebook => rsx! {
            path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
        },
    };

    rsx! {
        svg {
            class: "icon",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {shapes}
        }
    }
}
