//! Typed client for the experiment service consumed by the report views.

mod client;
mod error;
mod types;

pub use client::{decode_details, ExperimentApi, HttpClient};
pub use error::ApiError;
pub use types::{ExperimentDetails, ExperimentId};
