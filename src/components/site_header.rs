//! Site Header Component
//!
//! Fixed header with the brand, the collapsible navigation and its toggle.
//! Picks up a `scrolled` marker once the page is scrolled past the
//! configured threshold.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use verdant_core::{ClickTarget, HeaderWatcher, NavMenu};

use crate::components::SmoothLink;
use crate::context::use_site_config;
use crate::dom::{self, FrameScheduler};

pub const NAV_ID: &str = "site-nav";
pub const TOGGLE_ID: &str = "nav-toggle";

/// In-page sections reachable from the navigation
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#plants", "Plants"),
    ("#care", "Care Guide"),
    ("#seasons", "Seasons"),
    ("#newsletter", "Newsletter"),
];

/// Page header with navigation toggle and scroll watcher
#[component]
pub fn SiteHeader() -> Element {
    let threshold = use_site_config().header_threshold;
    let mut nav = use_signal(NavMenu::default);
    let watcher = use_hook(|| Rc::new(RefCell::new(HeaderWatcher::new(threshold))));
    // Re-rendered only when the watcher's marker flips
    let initial_class = watcher.borrow().class();
    let mut header_class = use_signal(|| initial_class);

    // Body scroll lock follows the menu
    use_effect(move || dom::set_body_overflow(nav.read().body_overflow()));

    // Page may load already scrolled
    let initial = watcher.clone();
    use_effect(move || {
        let changed = initial.borrow_mut().on_frame(dom::scroll_y());
        if changed.is_some() {
            header_class.set(initial.borrow().class());
        }
    });

    // Document listeners, removed with the header
    let frame_watcher = watcher.clone();
    use_hook(move || {
        let frames = FrameScheduler::default();
        let on_scroll = dom::on_window_scroll(move || {
            if !frame_watcher.borrow_mut().on_scroll() {
                return;
            }
            let watcher = frame_watcher.clone();
            frames.request(move || {
                let changed = watcher.borrow_mut().on_frame(dom::scroll_y());
                if let Some(marker) = changed {
                    tracing::debug!(scrolled = marker, "Header marker changed");
                    header_class.set(watcher.borrow().class());
                }
            });
        });
        // The toggle handles its own clicks
        let on_click = dom::on_document_click(NAV_ID, TOGGLE_ID, move |target| {
            if target != ClickTarget::Toggle && nav.peek().is_open() {
                nav.write().on_click(target);
            }
        });
        Rc::new((on_scroll, on_click))
    });

    let menu = *nav.read();

    rsx! {
        header { class: header_class(),
            div { class: "header__inner container",
                SmoothLink { href: "#home", class: "header__brand",
                    span { class: "header__logo", "🌿" }
                    "Verdant"
                }

                button {
                    id: TOGGLE_ID,
                    class: "nav__toggle",
                    r#type: "button",
                    "aria-controls": NAV_ID,
                    "aria-expanded": menu.aria_expanded(),
                    "aria-label": "Toggle navigation",
                    onclick: move |_| {
                        let open = nav.write().toggle();
                        tracing::debug!(open, "Navigation toggled");
                    },
                    span { class: "nav__toggle-bar" }
                    span { class: "nav__toggle-bar" }
                    span { class: "nav__toggle-bar" }
                }

                nav { id: NAV_ID, class: menu.class(), "aria-label": "Main",
                    ul { class: "nav__list",
                        for (href, label) in NAV_LINKS {
                            li {
                                key: "{href}",
                                class: "nav__item",
                                onclick: move |_| {
                                    nav.write().on_click(ClickTarget::NavLink);
                                },
                                SmoothLink { href, class: "nav__link", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
