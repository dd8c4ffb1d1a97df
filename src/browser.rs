//! Thin bridge to the browser: anchor scrolling, new tabs and the window width.
//!
//! Everything here goes through `web-sys` on wasm32. On other targets the
//! calls report [`NavError::Unsupported`] so the pure header logic can still be
//! compiled and tested natively.

use crate::error::{NavError, NavResult};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Finds an on-page anchor and brings it into view
pub trait SectionScroller {
    fn scroll_to(&self, section_id: &str) -> NavResult<()>;
}

/// Opens a URL in a new, unlinked browsing context
pub trait ExternalOpener {
    fn open_in_new_tab(&self, url: &str) -> NavResult<()>;
}

/// The real browser window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserWindow;

impl SectionScroller for BrowserWindow {
    #[cfg(target_arch = "wasm32")]
    fn scroll_to(&self, section_id: &str) -> NavResult<()> {
        let window = web_sys::window().ok_or(NavError::NoWindow)?;
        let document = window.document().ok_or(NavError::NoDocument)?;
        let element = document
            .get_element_by_id(section_id)
            .ok_or_else(|| NavError::SectionNotFound(section_id.to_string()))?;

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn scroll_to(&self, _section_id: &str) -> NavResult<()> {
        Err(NavError::Unsupported("Section scrolling"))
    }
}

impl ExternalOpener for BrowserWindow {
    #[cfg(target_arch = "wasm32")]
    fn open_in_new_tab(&self, url: &str) -> NavResult<()> {
        let window = web_sys::window().ok_or(NavError::NoWindow)?;
        // With `noopener` the browser hands back null even on success, so only
        // a thrown exception counts as a refusal.
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|e| {
                tracing::debug!("window.open threw: {:?}", e);
                NavError::PopupBlocked(url.to_string())
            })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_in_new_tab(&self, _url: &str) -> NavResult<()> {
        Err(NavError::Unsupported("Opening new tabs"))
    }
}

/// Current `window.innerWidth` in CSS pixels
#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<f64> {
    None
}

/// A `resize` listener on the window. Call [`ResizeListener::detach`] to remove it.
#[cfg(target_arch = "wasm32")]
pub struct ResizeListener {
    callback: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl ResizeListener {
    pub fn attach(mut on_resize: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(width) = viewport_width() {
                on_resize(width);
            }
        });

        if let Err(e) =
            window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to register resize listener: {:?}", e);
            return None;
        }
        Some(Self { callback })
    }

    pub fn detach(self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct ResizeListener;

#[cfg(not(target_arch = "wasm32"))]
impl ResizeListener {
    pub fn attach(_on_resize: impl FnMut(f64) + 'static) -> Option<Self> {
        None
    }

    pub fn detach(self) {}
}
