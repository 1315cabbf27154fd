use crate::domain::model::{FoldReport, ScanOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait InputSource: Send + Sync {
    fn read_all(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn report_format(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ScanOutcome>;
    async fn transform(&self, outcome: ScanOutcome) -> Result<FoldReport>;
    async fn load(&self, report: FoldReport) -> Result<String>;
}
