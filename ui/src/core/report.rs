//! Report content: narrative, target experiments and the sections between them.

use api::ExperimentId;
use serde::{Deserialize, Serialize};

const PLACEHOLDER_SECTIONS: usize = 7;

/// One block of narrative following the summary card, optionally illustrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ReportSection {
    pub fn text<S: Into<String>>(body: S) -> Self {
        Self {
            body: body.into(),
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDefinition {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub intro: Vec<String>,
    /// Experiments fetched for this report. The first one drives the page.
    pub target_ids: Vec<ExperimentId>,
    #[serde(default)]
    pub sections: Vec<ReportSection>,
    /// Render fetch failures instead of staying on the loading indicator.
    #[serde(default)]
    pub show_fetch_errors: bool,
}

impl ReportDefinition {
    /// Built-in write-up of the CycleGAN batch-size experiments.
    pub fn cyclegan() -> Self {
        Self {
            slug: "cyclegan".into(),
            title: "Training CycleGAN using Determined".into(),
            author: "Shiyuan Zhu".into(),
            intro: vec![
                "CycleGAN is a technique that can be used to do image-to-image translation. \
                 In this report, I've outlined how I trained CycleGAN using Determined."
                    .into(),
                "The first step is to try to optimize for the maximum batch size, \
                 which I did in this experiment:"
                    .into(),
            ],
            target_ids: vec![ExperimentId(1), ExperimentId(2)],
            sections: (0..PLACEHOLDER_SECTIONS)
                .map(|_| ReportSection::text("next message"))
                .collect(),
            show_fetch_errors: false,
        }
    }

    /// Reports shipped with the app.
    pub fn catalog() -> Vec<Self> {
        vec![Self::cyclegan()]
    }

    pub fn lead_id(&self) -> Option<ExperimentId> {
        self.target_ids.first().copied()
    }

    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclegan_targets_first_two_experiments() {
        let report = ReportDefinition::cyclegan();
        assert_eq!(report.target_ids, vec![ExperimentId(1), ExperimentId(2)]);
        assert_eq!(report.lead_id(), Some(ExperimentId(1)));
        assert_eq!(report.sections.len(), 7);
        assert!(!report.show_fetch_errors);
    }

    #[test]
    fn definition_loads_from_json_with_defaults() {
        let report = ReportDefinition::from_json(
            r#"{
                "slug": "bs-sweep",
                "title": "Batch size sweep",
                "author": "Ops",
                "intro": ["Sweep results."],
                "target_ids": [5]
            }"#,
        )
        .unwrap();

        assert_eq!(report.lead_id(), Some(ExperimentId(5)));
        assert!(report.sections.is_empty());
        assert!(!report.show_fetch_errors);
    }

    #[test]
    fn empty_target_list_has_no_lead() {
        let report = ReportDefinition {
            target_ids: Vec::new(),
            ..ReportDefinition::cyclegan()
        };
        assert_eq!(report.lead_id(), None);
    }
}
