use dioxus::prelude::*;

use crate::core::format::{format_percent, format_start_time};
use crate::core::task::{StateTone, TaskCardInput, TaskKind};
use crate::t;

/// Summary card for one task (currently always an experiment).
#[component]
pub fn TaskCard(task: TaskCardInput) -> Element {
    let kind_label = match task.kind {
        TaskKind::Experiment => t!("task-card-kind-experiment"),
    };
    let state_class = StateTone::of(&task.state).css_class();
    let started = format_start_time(&task.start_time);
    let progress = task
        .progress
        .filter(|value| value.is_finite())
        .map(|value| (format_percent(value), value.clamp(0.0, 1.0) * 100.0));

    rsx! {
        article { class: "task-card",
            div { class: "task-card__header",
                span { class: "task-card__kind", "{kind_label}" }
                span { class: "task-card__state {state_class}", "{task.state}" }
                if task.archived {
                    span { class: "task-card__archived", {t!("task-card-archived")} }
                }
            }

            h3 { class: "task-card__name",
                a { href: "{task.url}", "{task.name}" }
            }

            dl { class: "task-card__meta",
                dt { {t!("task-card-id")} }
                dd { "{task.id}" }
                if !task.username.is_empty() {
                    dt { {t!("task-card-owner")} }
                    dd { "{task.username}" }
                }
                dt { {t!("task-card-started")} }
                dd { "{started}" }
                if !task.resource_pool.is_empty() {
                    dt { {t!("task-card-pool")} }
                    dd { "{task.resource_pool}" }
                }
            }

            if let Some((label, width)) = progress {
                div { class: "task-card__progress",
                    span { class: "task-card__progress-label",
                        {t!("task-card-progress")}
                        " {label}"
                    }
                    div { class: "task-card__progress-track",
                        div {
                            class: "task-card__progress-bar",
                            style: "width: {width:.0}%",
                        }
                    }
                }
            }
        }
    }
}
