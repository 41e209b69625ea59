use std::cell::Cell;
use std::rc::Rc;

use super::viewport::{ScrollSubscription, Viewport};
use crate::error::SiteError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    past_threshold: bool,
}

impl ScrollState {
    pub fn is_past_threshold(self) -> bool {
        self.past_threshold
    }

    /// Recomputes the flag for a new offset. Returns whether it flipped.
    pub fn observe(&mut self, offset_y: f64, threshold: f64) -> bool {
        let past_threshold = offset_y > threshold;
        let changed = past_threshold != self.past_threshold;
        self.past_threshold = past_threshold;
        changed
    }
}

/// Tracks whether the page is scrolled past a fixed offset for as long as it
/// is alive.
pub struct ScrollMonitor {
    state: Rc<Cell<ScrollState>>,
    _subscription: ScrollSubscription,
}

impl ScrollMonitor {
    /// Starts unscrolled and only reports flips, not every scroll event.
    pub fn attach<V>(
        viewport: &V,
        threshold: f64,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, SiteError>
    where
        V: Viewport + Clone + 'static,
    {
        let state = Rc::new(Cell::new(ScrollState::default()));

        let handler = {
            let state = state.clone();
            let viewport = viewport.clone();
            move || {
                let mut current = state.get();
                if current.observe(viewport.scroll_y(), threshold) {
                    state.set(current);
                    on_change(current.is_past_threshold());
                }
            }
        };
        let subscription = viewport.on_scroll(Box::new(handler))?;

        Ok(Self {
            state,
            _subscription: subscription,
        })
    }

    pub fn is_past_threshold(&self) -> bool {
        self.state.get().is_past_threshold()
    }

    pub fn detach(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCROLL_THRESHOLD_PX;
    use crate::nav::testing::FakeViewport;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |flag| sink.borrow_mut().push(flag))
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        for (offset, expected) in [(0.0, false), (10.0, false), (11.0, true), (1000.0, true)] {
            let mut state = ScrollState::default();
            state.observe(offset, SCROLL_THRESHOLD_PX);
            assert_eq!(state.is_past_threshold(), expected, "offset {offset}");
        }
    }

    #[test]
    fn observe_reports_only_flips() {
        let mut state = ScrollState::default();
        assert!(!state.observe(5.0, 10.0));
        assert!(state.observe(50.0, 10.0));
        assert!(!state.observe(80.0, 10.0));
        assert!(state.observe(0.0, 10.0));
    }

    #[test]
    fn monitor_starts_unscrolled_even_mid_page() {
        let viewport = FakeViewport::default();
        viewport.scroll_to(300.0);
        let (seen, on_change) = recorder();
        let monitor = ScrollMonitor::attach(&viewport, SCROLL_THRESHOLD_PX, on_change).unwrap();

        assert!(!monitor.is_past_threshold());
        assert!(seen.borrow().is_empty());
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn monitor_publishes_changes() {
        let viewport = FakeViewport::default();
        let (seen, on_change) = recorder();
        let monitor = ScrollMonitor::attach(&viewport, SCROLL_THRESHOLD_PX, on_change).unwrap();

        viewport.scroll_to(50.0);
        viewport.scroll_to(400.0);
        assert!(monitor.is_past_threshold());
        viewport.scroll_to(3.0);
        assert!(!monitor.is_past_threshold());

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn detach_removes_listener() {
        let viewport = FakeViewport::default();
        let (seen, on_change) = recorder();
        let monitor = ScrollMonitor::attach(&viewport, SCROLL_THRESHOLD_PX, on_change).unwrap();

        monitor.detach();
        assert_eq!(viewport.listener_count(), 0);

        viewport.scroll_to(500.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn threshold_is_configurable() {
        let viewport = FakeViewport::default();
        let (seen, on_change) = recorder();
        let _monitor = ScrollMonitor::attach(&viewport, 600.0, on_change).unwrap();

        viewport.scroll_to(50.0);
        assert!(seen.borrow().is_empty());
        viewport.scroll_to(601.0);
        assert_eq!(*seen.borrow(), vec![true]);
    }
}
