use dioxus::prelude::*;

/// Standard page frame: heading block followed by the page body.
#[component]
pub fn Page(
    title: String,
    #[props(default)] subtitle: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section { class: "page {class}",
            header { class: "page__header",
                h1 { class: "page__title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "page__subtitle", "{subtitle}" }
                }
            }
            div { class: "page__body", {children} }
        }
    }
}
