//! In-memory viewport for exercising the header logic off the browser.

use std::cell::RefCell;
use std::rc::Rc;

use super::viewport::{ScrollMode, ScrollSubscription, Viewport};
use crate::error::SiteError;

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct Page {
    offset_y: f64,
    sections: Vec<String>,
    listeners: Vec<(u64, Handler)>,
    next_listener: u64,
    scroll_requests: Vec<(String, ScrollMode)>,
}

#[derive(Clone, Default)]
pub struct FakeViewport {
    page: Rc<RefCell<Page>>,
}

impl FakeViewport {
    pub fn with_sections(ids: &[&str]) -> Self {
        let viewport = Self::default();
        viewport.page.borrow_mut().sections = ids.iter().map(|id| id.to_string()).collect();
        viewport
    }

    /// Moves the page and dispatches a scroll event to every live listener.
    pub fn scroll_to(&self, offset_y: f64) {
        let handlers: Vec<Handler> = {
            let mut page = self.page.borrow_mut();
            page.offset_y = offset_y;
            page.listeners.iter().map(|(_, handler)| handler.clone()).collect()
        };
        for handler in handlers {
            let mut callback = handler.borrow_mut();
            (*callback)();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.page.borrow().listeners.len()
    }

    pub fn scroll_requests(&self) -> Vec<(String, ScrollMode)> {
        self.page.borrow().scroll_requests.clone()
    }
}

impl Viewport for FakeViewport {
    type Element = String;

    fn scroll_y(&self) -> f64 {
        self.page.borrow().offset_y
    }

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.page.borrow().sections.iter().find(|section| *section == id).cloned()
    }

    fn scroll_into_view(&self, element: &String, mode: ScrollMode) {
        self.page.borrow_mut().scroll_requests.push((element.clone(), mode));
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Result<ScrollSubscription, SiteError> {
        let id = {
            let mut page = self.page.borrow_mut();
            let id = page.next_listener;
            page.next_listener += 1;
            page.listeners.push((id, Rc::new(RefCell::new(handler))));
            id
        };
        let page = self.page.clone();
        Ok(ScrollSubscription::new(move || {
            page.borrow_mut().listeners.retain(|(listener, _)| *listener != id);
        }))
    }
}
