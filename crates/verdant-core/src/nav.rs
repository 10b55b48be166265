//! Collapsible mobile navigation.

/// Where a click landed, relative to the navigation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickTarget {
    /// The hamburger toggle button
    Toggle,
    /// One of the navigation links
    NavLink,
    /// Inside the nav, but not on a link
    InsideNav,
    /// Anywhere else on the page
    Outside,
}

/// Open/closed state of the mobile menu.
///
/// Mirrored into `aria-expanded` on the toggle and a scroll lock on the
/// body while open.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// React to a click anywhere on the page. Returns the new state.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Toggle => {
                self.toggle();
            }
            ClickTarget::NavLink | ClickTarget::Outside => self.close(),
            ClickTarget::InsideNav => {}
        }
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Inline `overflow` for the body element
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }

    pub fn class(&self) -> &'static str {
        if self.open {
            "nav nav--open"
        } else {
            "nav"
        }
    }
}
