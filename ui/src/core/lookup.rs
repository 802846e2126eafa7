//! Fetch-and-index: request every target experiment at once and index the
//! results by id, committing nothing unless all of them arrive.

use std::collections::BTreeMap;

use api::{ApiError, ExperimentApi, ExperimentDetails, ExperimentId};
use futures::future::try_join_all;
use futures::TryFutureExt;
use thiserror::Error;
use tracing::{debug, warn};

/// Experiments fetched for a report, keyed by the id they were requested under.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentLookup {
    records: BTreeMap<ExperimentId, ExperimentDetails>,
}

impl ExperimentLookup {
    pub fn get(&self, id: ExperimentId) -> Option<&ExperimentDetails> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: ExperimentId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ExperimentId> + '_ {
        self.records.keys().copied()
    }
}

impl FromIterator<(ExperimentId, ExperimentDetails)> for ExperimentLookup {
    fn from_iter<I: IntoIterator<Item = (ExperimentId, ExperimentDetails)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// The one way a report fetch fails: some experiment could not be loaded.
#[derive(Debug, Error)]
#[error("couldn't load experiment {id}: {source}")]
pub struct FetchError {
    pub id: ExperimentId,
    #[source]
    pub source: ApiError,
}

/// Fetch details for every id concurrently.
///
/// Returns the full lookup only when every request succeeds; the first
/// failure is returned instead and no partial lookup is produced. Nothing is
/// cached, so calling this again issues every request again.
pub async fn fetch_lookup<A>(api: &A, ids: &[ExperimentId]) -> Result<ExperimentLookup, FetchError>
where
    A: ExperimentApi,
{
    debug!(count = ids.len(), "fetching experiment details");

    let requests = ids.iter().map(|&id| {
        api.experiment_details(id)
            .map_ok(move |record| (id, record))
            .map_err(move |source| FetchError { id, source })
    });
    let fetched = try_join_all(requests).await?;

    for (id, record) in &fetched {
        if record.id != *id {
            warn!(requested = %id, returned = %record.id, "experiment id mismatch in response");
        }
    }

    Ok(fetched.into_iter().collect())
}
