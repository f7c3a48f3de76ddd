//! Scoped page scroll locking
//!
//! Holding a [`ScrollLock`] keeps the page frozen at the offset it had when
//! the lock was acquired. Dropping it, on any path, unfreezes the page and
//! puts the scroll offset back exactly where it was.

/// A scrollable page the lock can freeze
pub trait ScrollSurface {
    /// Current vertical scroll offset in pixels
    fn scroll_offset(&self) -> f64;
    /// Stop the page from scrolling while keeping it visually at `offset`
    fn freeze(&self, offset: f64);
    /// Undo [`ScrollSurface::freeze`]
    fn thaw(&self);
    /// Jump straight to `offset`, ignoring any smooth-scroll styling
    fn scroll_to(&self, offset: f64);
}

/// Guard that keeps a [`ScrollSurface`] frozen until dropped
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
    saved_offset: f64,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn acquire(surface: S) -> Self {
        let saved_offset = surface.scroll_offset();
        surface.freeze(saved_offset);
        Self {
            surface,
            saved_offset,
        }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.surface.thaw();
        self.surface.scroll_to(self.saved_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Page {
        offset: f64,
        frozen_at: Option<f64>,
        calls: Vec<&'static str>,
        /// Every offset passed to `scroll_to`
        jumps: Vec<f64>,
    }

    #[derive(Clone, Default)]
    struct FakeSurface(Rc<RefCell<Page>>);

    impl ScrollSurface for FakeSurface {
        fn scroll_offset(&self) -> f64 {
            self.0.borrow().offset
        }
        fn freeze(&self, offset: f64) {
            let mut page = self.0.borrow_mut();
            page.frozen_at = Some(offset);
            // A fixed-position body reports zero scroll
            page.offset = 0.0;
            page.calls.push("freeze");
        }
        fn thaw(&self) {
            let mut page = self.0.borrow_mut();
            page.frozen_at = None;
            page.calls.push("thaw");
        }
        fn scroll_to(&self, offset: f64) {
            let mut page = self.0.borrow_mut();
            page.offset = offset;
            page.jumps.push(offset);
            page.calls.push("scroll_to");
        }
    }

    #[test]
    fn test_lock_freezes_at_current_offset() {
        let surface = FakeSurface::default();
        surface.0.borrow_mut().offset = 420.0;
        let _lock = ScrollLock::acquire(surface.clone());
        let page = surface.0.borrow();
        assert_eq!(page.frozen_at, Some(420.0));
        assert!(page.jumps.is_empty());
    }

    #[test]
    fn test_release_is_a_single_jump_to_saved_offset() {
        let surface = FakeSurface::default();
        surface.0.borrow_mut().offset = 2400.0;
        let lock = ScrollLock::acquire(surface.clone());
        // Frozen body reports the top of the page
        assert_eq!(surface.scroll_offset(), 0.0);
        drop(lock);
        let page = surface.0.borrow();
        assert_eq!(page.jumps, vec![2400.0]);
        assert_eq!(page.offset, 2400.0);
    }

    #[test]
    fn test_drop_restores_offset_exactly() {
        let surface = FakeSurface::default();
        surface.0.borrow_mut().offset = 1337.5;
        let lock = ScrollLock::acquire(surface.clone());
        drop(lock);
        let page = surface.0.borrow();
        assert_eq!(page.offset, 1337.5);
        assert_eq!(page.frozen_at, None);
        assert_eq!(page.calls, vec!["freeze", "thaw", "scroll_to"]);
    }

    #[test]
    fn test_released_when_unwinding() {
        let surface = FakeSurface::default();
        surface.0.borrow_mut().offset = 90.0;
        let inner = surface.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _lock = ScrollLock::acquire(inner);
            panic!("unmounted mid-view");
        }));
        assert!(result.is_err());
        let page = surface.0.borrow();
        assert_eq!(page.frozen_at, None);
        assert_eq!(page.offset, 90.0);
    }
}
