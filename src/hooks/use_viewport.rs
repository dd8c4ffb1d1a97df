use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::browser::{self, ResizeListener};

/// Window width, kept current by a `resize` listener that lives as long as the component.
///
/// `None` outside a browser.
pub fn use_viewport_width() -> Signal<Option<f64>> {
    let mut width = use_signal(browser::viewport_width);

    let listener = use_hook(|| {
        let listener = ResizeListener::attach(move |w| width.set(Some(w)));
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        if let Some(listener) = listener.borrow_mut().take() {
            listener.detach();
        }
    });

    width
}
