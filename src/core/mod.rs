pub mod engine;
pub mod fold;
pub mod pipeline;
pub mod scan;

pub use crate::domain::model::{FoldReport, RejectedToken, ScanOutcome};
pub use crate::domain::ports::{ConfigProvider, InputSource, OutputSink, Pipeline};
pub use crate::utils::error::Result;
