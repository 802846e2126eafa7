use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Spinner() -> Element {
    let label = t!("spinner-loading");

    rsx! {
        div { class: "spinner", role: "status", aria_live: "polite",
            span { class: "spinner__ring", aria_hidden: "true" }
            span { class: "visually-hidden", "{label}" }
        }
    }
}
