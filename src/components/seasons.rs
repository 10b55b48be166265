//! Seasonal care cards.

use dioxus::prelude::*;
use verdant_core::SEASONS;

use crate::components::Reveal;

#[component]
pub fn SeasonCards() -> Element {
    rsx! {
        div { class: "season-grid",
            for tip in SEASONS.iter() {
                Reveal { key: "{tip.season}", class: "season-card",
                    h3 { class: "season-card__title", "{tip.season}" }
                    p { class: "season-card__tip", "{tip.tip}" }
                }
            }
        }
    }
}
