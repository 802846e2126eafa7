use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Alert,
    Empty,
}

impl MessageKind {
    fn css_class(self) -> &'static str {
        match self {
            Self::Alert => "message message--alert",
            Self::Empty => "message message--empty",
        }
    }

    fn role(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Empty => "note",
        }
    }
}

/// Centered notice used where a view has nothing (or nothing good) to show.
#[component]
pub fn Message(kind: MessageKind, title: String, #[props(default)] detail: String) -> Element {
    rsx! {
        div { class: kind.css_class(), role: kind.role(),
            p { class: "message__title", "{title}" }
            if !detail.is_empty() {
                p { class: "message__detail", "{detail}" }
            }
        }
    }
}
