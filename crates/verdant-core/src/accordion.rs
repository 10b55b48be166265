//! Single-open-panel disclosure widget.

use std::time::Duration;

/// Default wait before checking whether an opened item needs scrolling
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(300);

/// Result of a toggle
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AccordionChange {
    pub closed: Option<usize>,
    pub opened: Option<usize>,
}

/// Accordion over `len` items; at most one is open.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Close every item, then open `index` unless it was the open one.
    pub fn toggle(&mut self, index: usize) -> AccordionChange {
        if index >= self.len {
            return AccordionChange::default();
        }
        let was_open = self.is_open(index);
        let closed = self.open.take();
        if !was_open {
            self.open = Some(index);
        }
        AccordionChange {
            closed,
            opened: self.open,
        }
    }
}

/// Keys that activate a header like a click
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_second_closes_first() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(0);
        let change = accordion.toggle(1);
        assert_eq!(change.closed, Some(0));
        assert_eq!(change.opened, Some(1));
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(1));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(1);
        let change = accordion.toggle(1);
        assert_eq!(change.closed, Some(1));
        assert_eq!(change.opened, None);
        assert_eq!(accordion.open_item(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(0);
        assert_eq!(accordion.toggle(5), AccordionChange::default());
        assert!(accordion.is_open(0));
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
