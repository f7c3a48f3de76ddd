//! Focus trapping over an ordered set of focusable elements
//!
//! A [`FocusScope`] knows only the activation order of its elements. The
//! host asks it what to do with a Tab press; it answers with the element to
//! focus when the press has to be intercepted, or `None` when the browser's
//! default tab order already does the right thing.

/// Ordered set of focusable elements that focus must not leave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusScope<T> {
    order: Vec<T>,
}

impl<T: PartialEq + Clone> FocusScope<T> {
    pub fn new(order: Vec<T>) -> Self {
        Self { order }
    }

    fn first(&self) -> Option<&T> {
        self.order.first()
    }

    fn last(&self) -> Option<&T> {
        self.order.last()
    }

    fn contains(&self, item: &T) -> bool {
        self.order.contains(item)
    }

    /// Resolve a Tab (or Shift+Tab when `backward`) press.
    ///
    /// Returns the element that should receive focus if the press must be
    /// intercepted: forward from the last element wraps to the first,
    /// backward from the first wraps to the last, and focus outside the scope
    /// is pulled back in. Inner moves return `None`.
    pub fn on_tab(&self, current: Option<&T>, backward: bool) -> Option<T> {
        let (first, last) = (self.first()?, self.last()?);
        let entry = if backward { last } else { first };

        let Some(current) = current.filter(|c| self.contains(c)) else {
            return Some(entry.clone());
        };

        if self.order.len() == 1 {
            return Some(first.clone());
        }

        match (backward, current == first, current == last) {
            (false, _, true) => Some(first.clone()),
            (true, true, _) => Some(last.clone()),
            _ => None,
        }
    }
}
