//! Same-page anchor link with smooth scrolling.

use dioxus::prelude::*;
use verdant_core::{anchor_offset, ScrollTarget};

use crate::context::use_site_config;
use crate::dom;

#[derive(Props, Clone, PartialEq)]
pub struct SmoothLinkProps {
    #[props(into)]
    pub href: String,
    #[props(into, default)]
    pub class: String,
    pub children: Element,
}

/// Anchor that scrolls smoothly to its in-page target, leaving room for the
/// fixed header. Links whose fragment names no element keep the browser's
/// default behavior.
#[component]
pub fn SmoothLink(props: SmoothLinkProps) -> Element {
    let header_offset = use_site_config().header_offset;
    let target = ScrollTarget::from_href(&props.href);

    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick: move |evt| {
                let top = match &target {
                    Some(ScrollTarget::Top) => 0.0,
                    Some(ScrollTarget::Anchor(id)) => match dom::element_rect(id) {
                        Some(rect) => anchor_offset(rect.top, dom::scroll_y(), header_offset),
                        None => return,
                    },
                    None => return,
                };
                evt.prevent_default();
                dom::smooth_scroll_to(top);
            },
            {props.children}
        }
    }
}
