use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct SolverEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> SolverEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            #[cfg(feature = "cli")]
            monitor: None,
        }
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: enabled.then(|| SystemMonitor::new(true)),
        }
    }

    /// Runs extract → transform → load and returns the rendered result line.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Extracting integers from input...");
        let outcome = self.pipeline.extract().await?;
        tracing::info!("Extracted {} values", outcome.values.len());

        tracing::info!("Folding...");
        let report = self.pipeline.transform(outcome).await?;
        tracing::info!(
            "Fold complete: value={} from {} values",
            report.value,
            report.values_read
        );

        tracing::info!("Writing result...");
        let rendered = self.pipeline.load(report).await?;

        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_summary();
        }

        Ok(rendered)
    }
}
