use dioxus::prelude::*;

use crate::context::SiteContext;
use crate::pages::{Home, NotFound};
use crate::theme::global_styles;

/// Application routes.
///
/// - `/` - The catalog page
/// - anything else - Not-found page with a link home
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, site context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(SiteContext::load);
    let styles = use_hook(global_styles);

    rsx! {
        style { {styles} }
        Router::<Route> {}
    }
}
