//! Platform-agnostic logic behind the report views.

pub mod format;
pub mod lookup;
pub mod report;
pub mod settings;
pub mod task;

#[cfg(test)]
pub(crate) mod stub_api;
