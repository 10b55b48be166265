//! One-shot entrance animations triggered by visibility.
//!
//! Each target starts with its animation paused and is registered with a
//! visibility observer. The first intersecting notification resumes the
//! animation and the element is deregistered; it never re-triggers.

/// Default fraction of the element that must be visible
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Default shrink of the viewport's bottom edge, in pixels
pub const DEFAULT_BOTTOM_MARGIN: f64 = 80.0;

/// Observer settings
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealOptions {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
        }
    }
}

impl RevealOptions {
    /// CSS-style `rootMargin` for the observer
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

/// Per-element reveal state
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealState {
    /// Registered, animation paused
    #[default]
    Pending,
    /// Animation running, no longer observed
    Triggered,
}

impl RevealState {
    /// Handle a visibility notification. Returns true exactly once: when
    /// the element must start animating and be deregistered.
    pub fn notify(&mut self, intersecting: bool) -> bool {
        if *self == RevealState::Pending && intersecting {
            *self = RevealState::Triggered;
            return true;
        }
        false
    }

    /// Value for the inline `animation-play-state` style
    pub fn play_state(&self) -> &'static str {
        match self {
            RevealState::Pending => "paused",
            RevealState::Triggered => "running",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_shrinks_bottom_edge() {
        assert_eq!(RevealOptions::default().root_margin(), "0px 0px -80px 0px");
    }

    #[test]
    fn triggers_once() {
        let mut state = RevealState::default();
        assert_eq!(state.play_state(), "paused");
        assert!(!state.notify(false));
        assert!(state.notify(true));
        assert_eq!(state.play_state(), "running");
        assert!(!state.notify(true));
        assert!(!state.notify(false));
        assert_eq!(state, RevealState::Triggered);
    }
}
