//! Host surface the header needs: scroll offset, scroll events, element
//! lookup and scroll-into-view.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollMode {
    #[default]
    Smooth,
    Instant,
}

impl ScrollMode {
    fn behavior(self) -> ScrollBehavior {
        match self {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        }
    }
}

/// Live scroll listener. Dropping it removes the listener from the host.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

pub trait Viewport {
    type Element;

    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Fire-and-forget; completion of the animation is never observed.
    fn scroll_into_view(&self, element: &Self::Element, mode: ScrollMode);

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Result<ScrollSubscription, SiteError>;
}

#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn current() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        Ok(Self { window })
    }
}

impl Viewport for BrowserViewport {
    type Element = Element;

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.window.document()?.get_element_by_id(id)
    }

    fn scroll_into_view(&self, element: &Element, mode: ScrollMode) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(mode.behavior());
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Result<ScrollSubscription, SiteError> {
        let callback = Closure::wrap(handler);
        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;

        let window = self.window.clone();
        Ok(ScrollSubscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove scroll listener: {:?}", err);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn subscription_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = ScrollSubscription::new(move || counter.set(counter.get() + 1));
        subscription.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn subscription_releases_on_drop() {
        let released = Rc::new(Cell::new(false));
        let flag = released.clone();
        {
            let _subscription = ScrollSubscription::new(move || flag.set(true));
            assert!(!released.get());
        }
        assert!(released.get());
    }
}
