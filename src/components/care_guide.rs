//! Care Guide Accordion
//!
//! Only one answer is open at a time. After an item opens and its panel has
//! had time to expand, it is scrolled into view if it ended up partly
//! off-screen.

use dioxus::prelude::*;
use verdant_core::{is_activation_key, Accordion, Timer, CARE_GUIDE};

use crate::components::Reveal;
use crate::context::use_site_config;
use crate::dom::{self, GlooTimer};

fn item_id(index: usize) -> String {
    format!("care-item-{}", index)
}

fn panel_id(index: usize) -> String {
    format!("care-panel-{}", index)
}

fn item_class(open: bool) -> &'static str {
    if open {
        "care-item accordion__item accordion__item--open"
    } else {
        "care-item accordion__item"
    }
}

#[component]
pub fn CareGuide() -> Element {
    let settle = use_site_config().accordion_settle();
    let mut accordion = use_signal(|| Accordion::new(CARE_GUIDE.len()));

    let mut activate = move |index: usize| {
        let change = accordion.write().toggle(index);
        tracing::debug!(closed = ?change.closed, opened = ?change.opened, "Accordion toggled");
        let Some(opened) = change.opened else {
            return;
        };
        spawn(async move {
            GlooTimer.sleep(settle).await;
            let id = item_id(opened);
            if let Some(rect) = dom::element_rect(&id) {
                if !rect.is_fully_visible(dom::viewport_height()) {
                    dom::scroll_into_view_nearest(&id);
                }
            }
        });
    };

    let current = *accordion.read();
    if current.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "accordion",
            for (index, topic) in CARE_GUIDE.iter().take(current.len()).enumerate() {
                Reveal {
                    key: "{index}",
                    id: item_id(index),
                    class: item_class(current.is_open(index)),
                    div {
                        class: "accordion__header",
                        role: "button",
                        tabindex: "0",
                        "aria-expanded": if current.is_open(index) { "true" } else { "false" },
                        "aria-controls": panel_id(index),
                        onclick: move |_| activate(index),
                        onkeydown: move |evt: KeyboardEvent| {
                            if is_activation_key(&evt.key().to_string()) {
                                evt.prevent_default();
                                activate(index);
                            }
                        },
                        span { class: "accordion__title", "{topic.title}" }
                        span { class: "accordion__icon", "aria-hidden": "true", "+" }
                    }
                    div {
                        id: panel_id(index),
                        class: "accordion__panel",
                        role: "region",
                        hidden: !current.is_open(index),
                        p { "{topic.body}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_distinct() {
        let ids: Vec<String> = (0..CARE_GUIDE.len()).map(item_id).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
        }
        assert_ne!(item_id(0), panel_id(0));
    }

    #[test]
    fn test_open_class() {
        assert!(item_class(true).contains("accordion__item--open"));
        assert!(!item_class(false).contains("--open"));
        assert!(item_class(false).starts_with("care-item"));
    }
}
