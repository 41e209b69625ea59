//! Collapsible navigation menu and scroll-to-section activation.

use log::{debug, warn};

use super::viewport::{ScrollMode, Viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Scrolled,
    MissingSection,
}

/// Requests a scroll to the element with `section_id`. Unknown ids do nothing.
pub fn scroll_to_section<V>(viewport: &V, section_id: &str, mode: ScrollMode) -> Navigation
where
    V: Viewport + ?Sized,
{
    match viewport.element_by_id(section_id) {
        Some(element) => {
            debug!("Scrolling to section {}", section_id);
            viewport.scroll_into_view(&element, mode);
            Navigation::Scrolled
        }
        None => {
            warn!("No section with id {:?}, ignoring navigation", section_id);
            Navigation::MissingSection
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuController {
    state: MenuState,
    mode: ScrollMode,
}

impl MenuController {
    pub fn new(mode: ScrollMode) -> Self {
        Self {
            state: MenuState::Closed,
            mode,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle_open(&mut self) {
        self.state = self.state.toggled();
    }

    /// Scrolls to the section and closes the menu. A stale id leaves the
    /// menu as it was.
    pub fn activate<V>(&mut self, viewport: &V, section_id: &str) -> Navigation
    where
        V: Viewport + ?Sized,
    {
        let navigation = scroll_to_section(viewport, section_id, self.mode);
        if navigation == Navigation::Scrolled {
            self.state = MenuState::Closed;
        }
        navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCROLL_THRESHOLD_PX;
    use crate::nav::scroll::ScrollMonitor;
    use crate::nav::sections::SectionAnchor;
    use crate::nav::testing::FakeViewport;
    use std::cell::Cell;
    use std::rc::Rc;

    fn page() -> FakeViewport {
        FakeViewport::with_sections(&SectionAnchor::MENU.map(SectionAnchor::id))
    }

    #[test]
    fn starts_closed() {
        assert_eq!(MenuController::default().state(), MenuState::Closed);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for start in [MenuState::Closed, MenuState::Open] {
            assert_eq!(start.toggled().toggled(), start);
        }

        let mut controller = MenuController::new(ScrollMode::Smooth);
        controller.toggle_open();
        assert!(controller.is_open());
        controller.toggle_open();
        assert!(!controller.is_open());
    }

    #[test]
    fn activate_known_section_scrolls_and_closes() {
        let viewport = page();
        let mut controller = MenuController::new(ScrollMode::Smooth);
        controller.toggle_open();

        assert_eq!(controller.activate(&viewport, "features"), Navigation::Scrolled);
        assert!(!controller.is_open());
        assert_eq!(
            viewport.scroll_requests(),
            vec![("features".to_string(), ScrollMode::Smooth)]
        );
    }

    #[test]
    fn activate_from_closed_stays_closed() {
        let viewport = page();
        let mut controller = MenuController::new(ScrollMode::Instant);

        assert_eq!(controller.activate(&viewport, "audience"), Navigation::Scrolled);
        assert_eq!(controller.state(), MenuState::Closed);
        assert_eq!(
            viewport.scroll_requests(),
            vec![("audience".to_string(), ScrollMode::Instant)]
        );
    }

    #[test]
    fn activate_unknown_section_is_noop() {
        let viewport = page();
        let mut controller = MenuController::new(ScrollMode::Smooth);
        controller.toggle_open();

        assert_eq!(
            controller.activate(&viewport, "nonexistent"),
            Navigation::MissingSection
        );
        assert!(controller.is_open());
        assert!(viewport.scroll_requests().is_empty());
    }

    #[test]
    fn scroll_and_menu_flow() {
        let viewport = page();
        let scrolled = Rc::new(Cell::new(false));
        let flag = scrolled.clone();
        let _monitor =
            ScrollMonitor::attach(&viewport, SCROLL_THRESHOLD_PX, move |past| flag.set(past))
                .unwrap();
        let mut controller = MenuController::new(ScrollMode::Smooth);
        assert!(!scrolled.get());
        assert!(!controller.is_open());

        viewport.scroll_to(50.0);
        assert!(scrolled.get());

        controller.toggle_open();
        assert!(controller.is_open());

        assert_eq!(controller.activate(&viewport, "team"), Navigation::Scrolled);
        assert!(!controller.is_open());
        assert_eq!(
            viewport.scroll_requests(),
            vec![("team".to_string(), ScrollMode::Smooth)]
        );
        // Navigation never touches the scroll flag.
        assert!(scrolled.get());
    }
}
