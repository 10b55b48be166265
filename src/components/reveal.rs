//! Reveal Component
//!
//! Wraps an element whose entrance animation waits until it scrolls into
//! view. The animation starts paused, runs on the first intersecting
//! notification, and the element is then no longer observed.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use verdant_core::RevealState;

use crate::context::use_site_config;
use crate::dom::{self, VisibilityObserver};

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    /// Classes of the wrapped element (the animation lives in the CSS)
    #[props(into)]
    pub class: String,
    #[props(default)]
    pub id: Option<String>,
    /// Removes the element from layout without unmounting it
    #[props(default = false)]
    pub hidden: bool,
    pub children: Element,
}

/// Element with a one-shot, visibility-gated entrance animation.
///
/// Without an intersection observer the element renders untouched.
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let options = use_site_config().reveal_options();
    let mut state: Signal<Option<RevealState>> = use_signal(initial_state);
    // Dropped with the component, which disconnects the observer
    let observer: Rc<RefCell<Option<VisibilityObserver>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    let style = reveal_style(*state.read(), props.hidden);

    rsx! {
        div {
            id: props.id,
            class: "{props.class}",
            style: "{style}",
            onmounted: move |e| {
                let Some(element) = e.data().downcast::<web_sys::Element>().cloned() else {
                    state.set(None);
                    return;
                };
                let handle = dom::observe_visibility(&element, options, move |intersecting| {
                    if !intersecting {
                        return false;
                    }
                    match state.write().as_mut() {
                        Some(reveal) => reveal.notify(true),
                        None => true,
                    }
                });
                if handle.is_none() {
                    state.set(None);
                }
                *observer.borrow_mut() = handle;
            },
            {props.children}
        }
    }
}

/// Paused from the first render; dropped to `None` once mounting finds no
/// observer.
fn initial_state() -> Option<RevealState> {
    Some(RevealState::Pending)
}

/// Inline style for a reveal target. `None` means no observer, so the
/// animation is left alone.
fn reveal_style(state: Option<RevealState>, hidden: bool) -> String {
    let mut parts = Vec::new();
    if let Some(state) = state {
        parts.push(format!("animation-play-state: {}", state.play_state()));
    }
    if hidden {
        parts.push("display: none".to_string());
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_without_observer_is_untouched() {
        assert_eq!(reveal_style(None, false), "");
    }

    #[test]
    fn test_first_render_is_paused() {
        assert_eq!(
            reveal_style(initial_state(), false),
            "animation-play-state: paused"
        );
    }

    #[test]
    fn test_style_pending_and_triggered() {
        assert_eq!(
            reveal_style(Some(RevealState::Pending), false),
            "animation-play-state: paused"
        );
        assert_eq!(
            reveal_style(Some(RevealState::Triggered), false),
            "animation-play-state: running"
        );
    }

    #[test]
    fn test_style_hidden() {
        assert_eq!(reveal_style(None, true), "display: none");
        assert_eq!(
            reveal_style(Some(RevealState::Pending), true),
            "animation-play-state: paused; display: none"
        );
    }
}
