//! In-memory `ExperimentApi` for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use api::{ApiError, ExperimentApi, ExperimentDetails, ExperimentId};

/// Canned responses; ids without an entry answer with HTTP 500.
#[derive(Default)]
pub(crate) struct StubApi {
    pub(crate) records: HashMap<ExperimentId, ExperimentDetails>,
    pub(crate) calls: RefCell<Vec<ExperimentId>>,
}

impl StubApi {
    pub(crate) fn with(records: &[ExperimentDetails]) -> Self {
        Self {
            records: records.iter().map(|r| (r.id, r.clone())).collect(),
            calls: RefCell::default(),
        }
    }
}

impl ExperimentApi for StubApi {
    fn experiment_details(
        &self,
        id: ExperimentId,
    ) -> impl Future<Output = Result<ExperimentDetails, ApiError>> {
        self.calls.borrow_mut().push(id);
        let outcome = self
            .records
            .get(&id)
            .cloned()
            .ok_or(ApiError::Status { status: 500 });
        async move { outcome }
    }
}
