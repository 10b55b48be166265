//! The catalog page: hero, plant grid, care guide, seasons, newsletter.

use dioxus::prelude::*;

use verdant_ui::ButtonVariant;

use crate::components::{
    CareGuide, NewsletterSignup, PlantGrid, SeasonCards, SiteHeader, SmoothLink,
};
use crate::context::use_catalog;

#[component]
pub fn Home() -> Element {
    let plant_count = use_catalog().len();

    rsx! {
        SiteHeader {}

        main { class: "page",
            section { id: "home", class: "hero",
                div { class: "container hero__inner",
                    h1 { class: "hero__title", "Grow a greener home" }
                    p { class: "hero__lead",
                        "Find houseplants that suit your light, your schedule and your patience, "
                        "then keep them thriving all year."
                    }
                    div { class: "hero__actions",
                        SmoothLink { href: "#plants", class: ButtonVariant::Primary.class(),
                            "Browse {plant_count} plants"
                        }
                        SmoothLink { href: "#care", class: ButtonVariant::Outline.class(), "Care basics" }
                    }
                }
            }

            section { id: "plants", class: "section",
                div { class: "container",
                    h2 { class: "section__title", "Find your plant" }
                    p { class: "section__lead",
                        "Filter by plant type and by how much care you can give."
                    }
                    PlantGrid {}
                }
            }

            section { id: "care", class: "section section--alt",
                div { class: "container",
                    h2 { class: "section__title", "Care guide" }
                    CareGuide {}
                }
            }

            section { id: "seasons", class: "section",
                div { class: "container",
                    h2 { class: "section__title", "Through the seasons" }
                    SeasonCards {}
                }
            }

            section { id: "newsletter", class: "section section--newsletter",
                div { class: "container newsletter",
                    h2 { class: "section__title", "Seasonal tips, once a month" }
                    p { class: "section__lead",
                        "No spam. Just what to water, feed and repot as the year turns."
                    }
                    NewsletterSignup {}
                }
            }
        }

        footer { class: "footer",
            div { class: "container footer__inner",
                p { "© Verdant plant care" }
                SmoothLink { href: "#", class: ButtonVariant::Ghost.class(), "Back to top ↑" }
            }
        }
    }
}
