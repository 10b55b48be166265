use dioxus::prelude::*;
use verdant_ui::{Button, ButtonVariant};

use crate::app::Route;

/// Any path other than `/`
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No page at {}", path);

    rsx! {
        main { class: "not-found",
            div { class: "container not-found__inner",
                h1 { class: "not-found__title", "Nothing growing here" }
                p { class: "not-found__path", "{path}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "Back to the catalog"
                }
            }
        }
    }
}
