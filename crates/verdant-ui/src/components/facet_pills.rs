//! Facet Pills Component
//!
//! One group of filter buttons with radio semantics. The group identifier is
//! rendered as `data-facet-group` and sent back with every click, so the
//! page never has to work out the dimension from the heading text.

use dioxus::prelude::*;
use verdant_core::FacetGroup;

/// Properties for the FacetPills component
#[derive(Clone, PartialEq, Props)]
pub struct FacetPillsProps {
    /// Which facet this group filters on
    pub group: FacetGroup,
    /// Value of the active button
    pub active: String,
    /// Called with the group and the clicked button's value
    pub on_select: EventHandler<(FacetGroup, String)>,
}

/// A labelled row of facet buttons; exactly one carries `active`.
///
/// # Example
///
/// ```rust,ignore
/// let mut selection = use_signal(FilterSelection::default);
///
/// rsx! {
///     FacetPills {
///         group: FacetGroup::Type,
///         active: selection().active(FacetGroup::Type).to_string(),
///         on_select: move |(group, value): (FacetGroup, String)| {
///             if let Ok(next) = selection().select(group, &value) {
///                 selection.set(next);
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn FacetPills(props: FacetPillsProps) -> Element {
    let group = props.group;
    let options = group.options();

    rsx! {
        div {
            class: "filter-group",
            "data-facet-group": group.as_str(),
            role: "group",
            "aria-label": group.label(),
            span { class: "filter-group__label", "{group.label()}" }
            div { class: "filter-group__buttons",
                for option in options.iter() {
                    {
                        let is_active = props.active == option.value;
                        let value = option.value;
                        let on_select = props.on_select;
                        rsx! {
                            button {
                                key: "{value}",
                                class: pill_class(is_active),
                                r#type: "button",
                                "data-filter": value,
                                "aria-pressed": if is_active { "true" } else { "false" },
                                onclick: move |_| on_select.call((group, value.to_string())),
                                "{option.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}
