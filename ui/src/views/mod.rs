mod home;
pub use home::Home;

mod report;
pub use report::{lead_task, CycleGanReport, Report, ReportBody, ReportBodyProps};
