use std::future::Future;

use serde::Deserialize;
use tracing::debug;

use crate::{ApiError, ExperimentDetails, ExperimentId};

/// Read access to experiment records.
///
/// Implementations are driven from a single-threaded UI runtime, so the
/// returned futures are not required to be `Send`.
pub trait ExperimentApi {
    fn experiment_details(
        &self,
        id: ExperimentId,
    ) -> impl Future<Output = Result<ExperimentDetails, ApiError>>;
}

/// HTTP implementation talking to `{server}/api/v1`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    server_address: String,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new<S: Into<String>>(server_address: S) -> Self {
        Self {
            server_address: server_address.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    pub fn details_url(&self, id: ExperimentId) -> String {
        format!(
            "{}/api/v1/experiments/{id}",
            self.server_address.trim_end_matches('/')
        )
    }

    async fn fetch_details(&self, id: ExperimentId) -> Result<ExperimentDetails, ApiError> {
        let url = self.details_url(id);
        debug!(%url, "requesting experiment details");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode_details(&body)
    }
}

impl ExperimentApi for HttpClient {
    fn experiment_details(
        &self,
        id: ExperimentId,
    ) -> impl Future<Output = Result<ExperimentDetails, ApiError>> {
        self.fetch_details(id)
    }
}

// The service answers either with the bare record or wrapped as
// `{ "experiment": { ... } }` (v1 envelope).
#[derive(Deserialize)]
#[serde(untagged)]
enum DetailsEnvelope {
    Wrapped { experiment: ExperimentDetails },
    Bare(ExperimentDetails),
}

/// Decode a details response body.
pub fn decode_details(body: &str) -> Result<ExperimentDetails, ApiError> {
    let envelope: DetailsEnvelope = serde_json::from_str(body)?;
    let details = match envelope {
        DetailsEnvelope::Wrapped { experiment } => experiment,
        DetailsEnvelope::Bare(experiment) => experiment,
    };
    Ok(details)
}
