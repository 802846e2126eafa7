//! Adapter from experiment records to the summary card's input.

use api::ExperimentDetails;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Experiment,
}

/// Everything the task card needs to render one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCardInput {
    pub id: String,
    pub kind: TaskKind,
    pub name: String,
    pub state: String,
    pub archived: bool,
    pub username: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub progress: Option<f64>,
    pub resource_pool: String,
    pub url: String,
}

pub fn experiment_details_to_task(experiment: &ExperimentDetails) -> TaskCardInput {
    let id = experiment.id.to_string();
    let name = if experiment.name.trim().is_empty() {
        format!("Experiment {id}")
    } else {
        experiment.name.clone()
    };

    TaskCardInput {
        url: format!("/experiments/{id}"),
        id,
        kind: TaskKind::Experiment,
        name,
        state: experiment.state.clone(),
        archived: experiment.archived,
        username: experiment.username.clone(),
        start_time: experiment.start_time.clone(),
        end_time: experiment.end_time.clone(),
        progress: experiment.progress,
        resource_pool: experiment.resource_pool.clone(),
    }
}

/// Coarse grouping of run states, used for badge colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTone {
    Active,
    Success,
    Failure,
    Neutral,
}

impl StateTone {
    pub fn of(state: &str) -> Self {
        match state {
            "ACTIVE" | "RUNNING" | "QUEUED" | "PULLING" | "STARTING" | "STOPPING_COMPLETED"
            | "STOPPING_CANCELED" | "DELETING" => Self::Active,
            "COMPLETED" => Self::Success,
            "ERROR" | "STOPPING_ERROR" | "DELETE_FAILED" => Self::Failure,
            _ => Self::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Active => "task-card__state--active",
            Self::Success => "task-card__state--success",
            Self::Failure => "task-card__state--failure",
            Self::Neutral => "task-card__state--neutral",
        }
    }
}
