//! Scroll behavior: same-page anchor routing and the header watcher.

/// Default height of the fixed header that anchored sections clear
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;

/// Default scroll distance after which the header is marked `scrolled`
pub const DEFAULT_HEADER_THRESHOLD: f64 = 50.0;

/// Fragments that mean "top of the page"
const TOP_FRAGMENTS: [&str; 2] = ["", "home"];

/// Destination of a same-page link
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ScrollTarget {
    Top,
    /// Element id, without the leading `#`
    Anchor(String),
}

impl ScrollTarget {
    /// Classify an `href`. Links that are not fragment-only are left to
    /// the browser.
    pub fn from_href(href: &str) -> Option<Self> {
        let fragment = href.strip_prefix('#')?;
        if TOP_FRAGMENTS.contains(&fragment) {
            Some(ScrollTarget::Top)
        } else {
            Some(ScrollTarget::Anchor(fragment.to_string()))
        }
    }
}

/// Document offset that puts an element's top `header_offset` below the
/// viewport top.
///
/// `element_top` is viewport-relative (a bounding rect), `page_y` the
/// current scroll position.
pub fn anchor_offset(element_top: f64, page_y: f64, header_offset: f64) -> f64 {
    (element_top + page_y - header_offset).max(0.0)
}

/// Viewport-relative vertical extent of an element
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VerticalRect {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalRect {
    pub fn is_fully_visible(&self, viewport_height: f64) -> bool {
        self.top >= 0.0 && self.bottom <= viewport_height
    }
}

/// Toggles the header's `scrolled` marker, at most once per frame.
///
/// Scroll events only request a frame; the marker is recomputed when the
/// frame runs. Bursts of scroll events between two frames collapse into a
/// single recomputation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeaderWatcher {
    threshold: f64,
    frame_pending: bool,
    scrolled: bool,
}

impl Default for HeaderWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_THRESHOLD)
    }
}

impl HeaderWatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            frame_pending: false,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// A scroll event arrived. Returns true when the caller must request
    /// an animation frame.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// The requested frame runs. Returns the new marker if it changed.
    pub fn on_frame(&mut self, scroll_y: f64) -> Option<bool> {
        self.frame_pending = false;
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }

    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "header scrolled"
        } else {
            "header"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_fragments() {
        assert_eq!(ScrollTarget::from_href("#"), Some(ScrollTarget::Top));
        assert_eq!(ScrollTarget::from_href("#home"), Some(ScrollTarget::Top));
        assert_eq!(
            ScrollTarget::from_href("#care-guide"),
            Some(ScrollTarget::Anchor("care-guide".to_string()))
        );
    }

    #[test]
    fn non_fragment_links_are_not_intercepted() {
        assert_eq!(ScrollTarget::from_href("/about"), None);
        assert_eq!(ScrollTarget::from_href("https://example.com/#x"), None);
        assert_eq!(ScrollTarget::from_href(""), None);
    }

    #[test]
    fn anchor_offset_clears_header() {
        assert_eq!(anchor_offset(300.0, 1000.0, 80.0), 1220.0);
        assert_eq!(anchor_offset(-200.0, 250.0, 80.0), 0.0);
    }

    #[test]
    fn rect_visibility() {
        let rect = VerticalRect { top: 10.0, bottom: 400.0 };
        assert!(rect.is_fully_visible(800.0));
        assert!(!rect.is_fully_visible(300.0));
        assert!(!VerticalRect { top: -1.0, bottom: 100.0 }.is_fully_visible(800.0));
    }

    #[test]
    fn scroll_bursts_request_one_frame() {
        let mut watcher = HeaderWatcher::default();
        assert!(watcher.on_scroll());
        assert!(!watcher.on_scroll());
        assert!(!watcher.on_scroll());
        assert_eq!(watcher.on_frame(120.0), Some(true));
        assert!(watcher.on_scroll());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut watcher = HeaderWatcher::default();
        assert_eq!(watcher.on_frame(50.0), None);
        assert!(!watcher.is_scrolled());
        assert_eq!(watcher.on_frame(50.5), Some(true));
        assert_eq!(watcher.class(), "header scrolled");
        assert_eq!(watcher.on_frame(80.0), None);
        assert_eq!(watcher.on_frame(50.0), Some(false));
        assert_eq!(watcher.class(), "header");
    }
}
