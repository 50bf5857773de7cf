pub mod presenter;
pub mod report;

pub use presenter::{OutputActions, ResultPresenter};
pub use report::{ProcessingReport, SourceInfo};
