use dioxus::prelude::*;

use crate::components::ServerSettingsPanel;
use crate::core::report::ReportDefinition;
use crate::{i18n, t};

#[component]
pub fn Home() -> Element {
    i18n::init();
    // Re-render on language change when the shell provides the global signal.
    let _lang = try_use_context::<Signal<String>>().map(|code| code());

    let reports = ReportDefinition::catalog();

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            h2 { {t!("home-reports-heading")} }
            ul { class: "page-home__reports",
                for report in reports {
                    li { key: "{report.slug}", class: "page-home__report",
                        strong { "{report.title}" }
                        span { class: "page-home__report-byline",
                            {t!("home-report-byline", author = report.author.clone())}
                        }
                        span { class: "page-home__report-targets",
                            {t!("home-report-targets", ids = target_list(&report))}
                        }
                    }
                }
            }

            ServerSettingsPanel {}
        }
    }
}

fn target_list(report: &ReportDefinition) -> String {
    report
        .target_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
