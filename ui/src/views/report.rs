use api::{ExperimentApi, ExperimentId, HttpClient};
use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::components::{Message, MessageKind, Page, Spinner, TaskCard};
use crate::core::lookup::{fetch_lookup, ExperimentLookup};
use crate::core::report::{ReportDefinition, ReportSection};
use crate::core::settings::ServerSettings;
use crate::core::task::{experiment_details_to_task, TaskCardInput};
use crate::{i18n, t};

/// Route target for the built-in CycleGAN write-up.
#[component]
pub fn CycleGanReport() -> Element {
    rsx! {
        Report { definition: ReportDefinition::cyclegan() }
    }
}

/// A report backed by live experiment data.
///
/// Details for every target experiment are requested once, when the view is
/// first rendered. Until the lead experiment is available only the loading
/// indicator is shown.
#[component]
pub fn Report(definition: ReportDefinition) -> Element {
    let lookup = use_signal(ExperimentLookup::default);
    let failed = use_signal(|| false);
    let server_address = use_hook(|| ServerSettings::load().server_address);

    use_hook(|| {
        if definition.target_ids.is_empty() {
            warn!(report = %definition.slug, "report has no target experiments");
        }
        let client = HttpClient::new(server_address.clone());
        spawn(load_lookup(client, definition.target_ids.clone(), lookup, failed))
    });

    rsx! {
        ReportBody {
            definition: definition,
            lookup: lookup(),
            failed: failed(),
            server_address: server_address,
        }
    }
}

/// Fetch every target and commit the lookup only if all of them arrived.
async fn load_lookup<A: ExperimentApi>(
    api: A,
    ids: Vec<ExperimentId>,
    mut lookup: Signal<ExperimentLookup>,
    mut failed: Signal<bool>,
) {
    match fetch_lookup(&api, &ids).await {
        Ok(fetched) => {
            info!(count = fetched.len(), "experiment lookup ready");
            lookup.set(fetched);
        }
        Err(err) => {
            error!(id = %err.id, error = %err, "failed to fetch experiment details");
            failed.set(true);
        }
    }
}

/// Task card input for the experiment leading the report, once it is loaded.
pub fn lead_task(definition: &ReportDefinition, lookup: &ExperimentLookup) -> Option<TaskCardInput> {
    definition
        .lead_id()
        .and_then(|id| lookup.get(id))
        .map(experiment_details_to_task)
}

#[derive(Props, Clone, PartialEq)]
pub struct ReportBodyProps {
    pub definition: ReportDefinition,
    pub lookup: ExperimentLookup,
    /// The fetch gave up; only rendered when the report opts in.
    #[props(default)]
    pub failed: bool,
    #[props(default)]
    pub server_address: String,
}

/// Stateless rendering of a report for a given lookup.
///
/// A report without target experiments can never load, so it says so instead
/// of showing the loading indicator.
#[allow(non_snake_case)]
pub fn ReportBody(props: ReportBodyProps) -> Element {
    i18n::init();

    let ReportBodyProps {
        definition,
        lookup,
        failed,
        server_address,
    } = props;

    if definition.target_ids.is_empty() {
        return rsx! {
            Message { kind: MessageKind::Empty, title: t!("report-no-targets") }
        };
    }

    let Some(task) = lead_task(&definition, &lookup) else {
        return if failed && definition.show_fetch_errors {
            rsx! {
                Message {
                    kind: MessageKind::Alert,
                    title: t!("report-fetch-failed"),
                    detail: t!("report-fetch-hint", server = server_address),
                }
            }
        } else {
            rsx! { Spinner {} }
        };
    };

    let byline = t!("report-byline", author = definition.author.clone());

    rsx! {
        Page {
            class: "page-report",
            title: definition.title.clone(),
            subtitle: byline,

            for paragraph in definition.intro.iter() {
                p { class: "report__intro", "{paragraph}" }
            }

            p { class: "report__state",
                span { class: "visually-hidden", {t!("report-state-label")} }
                "{task.state}"
            }

            TaskCard { task: task.clone() }

            for (index, section) in definition.sections.iter().enumerate() {
                {render_section(index, section)}
            }
        }
    }
}

fn render_section(index: usize, section: &ReportSection) -> Element {
    rsx! {
        div { class: "report__section", "data-index": "{index}",
            p { "{section.body}" }
            if let Some(src) = section.image.as_ref() {
                img { class: "report__image", src: "{src}", alt: "" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::ExperimentDetails;
    use futures::executor::block_on;

    use super::*;
    use crate::core::stub_api::StubApi;

    fn empty_root() -> Element {
        rsx! {}
    }

    /// Run the mount-time fetch against `api` and return what it committed.
    fn run_load(api: StubApi, ids: &[ExperimentId]) -> (ExperimentLookup, bool) {
        let dom = VirtualDom::new(empty_root);
        // Signals need an owning scope; the root one exists from construction.
        dom.in_runtime(|| {
            ScopeId::ROOT.in_runtime(|| {
                let lookup = Signal::new(ExperimentLookup::default());
                let failed = Signal::new(false);
                block_on(load_lookup(api, ids.to_vec(), lookup, failed));
                (lookup.cloned(), failed.cloned())
            })
        })
    }

    /// Inner text of the first element carrying `class`.
    fn element_text<'a>(html: &'a str, class: &str) -> Option<&'a str> {
        let start = html.find(&format!("class=\"{class}\""))?;
        let open_end = start + html[start..].find('>')? + 1;
        let close = open_end + html[open_end..].find("</p>")?;
        Some(&html[open_end..close])
    }

    fn render(props: ReportBodyProps) -> String {
        let mut dom = VirtualDom::new_with_props(ReportBody, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn props(lookup: ExperimentLookup) -> ReportBodyProps {
        ReportBodyProps {
            definition: ReportDefinition::cyclegan(),
            lookup,
            failed: false,
            server_address: "http://localhost:8080".into(),
        }
    }

    fn scenario_lookup() -> ExperimentLookup {
        [
            (ExperimentId(1), ExperimentDetails::new(1, "COMPLETED")),
            (ExperimentId(2), ExperimentDetails::new(2, "ACTIVE")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_lookup_renders_only_the_spinner() {
        let html = render(props(ExperimentLookup::default()));

        assert!(html.contains("spinner"));
        assert!(!html.contains("Training CycleGAN"));
        assert!(!html.contains("report__intro"));
        assert!(!html.contains("task-card"));
    }

    #[test]
    fn lookup_without_lead_still_loads() {
        let lookup: ExperimentLookup = [(ExperimentId(2), ExperimentDetails::new(2, "ACTIVE"))]
            .into_iter()
            .collect();

        let html = render(props(lookup));

        assert!(html.contains("spinner"));
        assert!(!html.contains("ACTIVE"));
    }

    #[test]
    fn loaded_report_shows_lead_state_verbatim() {
        let html = render(props(scenario_lookup()));

        assert!(html.contains("Training CycleGAN using Determined"));
        let state = element_text(&html, "report__state").unwrap();
        assert!(state.ends_with("COMPLETED"), "{state}");
        assert!(!html.contains("ACTIVE"));
        assert!(!html.contains("spinner"));
        assert_eq!(html.matches("report__section").count(), 7);
        assert_eq!(html.matches("next message").count(), 7);
    }

    #[test]
    fn card_input_matches_adapter_output() {
        let lookup = scenario_lookup();
        let definition = ReportDefinition::cyclegan();

        let task = lead_task(&definition, &lookup).unwrap();

        let record = lookup.get(ExperimentId(1)).unwrap();
        assert_eq!(task, experiment_details_to_task(record));
        assert_eq!(task.state, "COMPLETED");
    }

    #[test]
    fn failure_is_silent_by_default() {
        let mut silent = props(ExperimentLookup::default());
        silent.failed = true;

        let html = render(silent);

        assert!(html.contains("spinner"));
        assert!(!html.contains("message--alert"));
    }

    #[test]
    fn failure_can_be_surfaced() {
        let mut loud = props(ExperimentLookup::default());
        loud.definition.show_fetch_errors = true;
        loud.failed = true;

        let html = render(loud);

        assert!(html.contains("message--alert"));
        assert!(!html.contains("spinner"));
    }

    #[test]
    fn sections_render_images_when_present() {
        let mut with_image = props(scenario_lookup());
        with_image.definition.sections = vec![ReportSection {
            body: "Generator loss flattened after 40k batches.".into(),
            image: Some("/assets/reports/cyclegan-loss.png".into()),
        }];

        let html = render(with_image);

        assert!(html.contains("Generator loss flattened"));
        assert!(html.contains("cyclegan-loss.png"));
    }

    #[test]
    fn state_paragraph_keeps_unusual_states_verbatim() {
        let lookup: ExperimentLookup = [(
            ExperimentId(1),
            ExperimentDetails::new(1, "STOPPING_CANCELED"),
        )]
        .into_iter()
        .collect();

        let html = render(props(lookup));

        let state = element_text(&html, "report__state").unwrap();
        assert!(state.ends_with("STOPPING_CANCELED"), "{state}");
    }

    #[test]
    fn report_without_targets_says_so() {
        let mut unconfigured = props(ExperimentLookup::default());
        unconfigured.definition.target_ids.clear();

        let html = render(unconfigured);

        assert!(html.contains("message--empty"));
        assert!(!html.contains("spinner"));
        assert!(!html.contains("report__intro"));
    }

    #[test]
    fn successful_load_commits_the_full_lookup() {
        let api = StubApi::with(&[
            ExperimentDetails::new(1, "COMPLETED"),
            ExperimentDetails::new(2, "ACTIVE"),
        ]);

        let (lookup, failed) = run_load(api, &[ExperimentId(1), ExperimentId(2)]);

        assert_eq!(lookup, scenario_lookup());
        assert!(!failed);
    }

    #[test]
    fn partial_failure_commits_nothing() {
        let api = StubApi::with(&[ExperimentDetails::new(1, "COMPLETED")]);

        let (lookup, failed) = run_load(api, &[ExperimentId(1), ExperimentId(2)]);

        assert!(lookup.is_empty());
        assert!(failed);
    }
}
