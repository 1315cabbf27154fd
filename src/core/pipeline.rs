use crate::core::scan::scan_integers;
use crate::core::{fold, ConfigProvider, FoldReport, InputSource, OutputSink, Pipeline, ScanOutcome};
use crate::utils::error::Result;

pub struct StreamPipeline<I: InputSource, O: OutputSink, C: ConfigProvider> {
    input: I,
    output: O,
    config: C,
}

impl<I: InputSource, O: OutputSink, C: ConfigProvider> StreamPipeline<I, O, C> {
    pub fn new(input: I, output: O, config: C) -> Self {
        Self {
            input,
            output,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<I: InputSource, O: OutputSink, C: ConfigProvider> Pipeline for StreamPipeline<I, O, C> {
    async fn extract(&self) -> Result<ScanOutcome> {
        let raw = self.input.read_all().await?;
        tracing::debug!("Read {} bytes from input", raw.len());

        let outcome = scan_integers(&raw);

        // 遇到壞 token 就停，照原始行為不當成錯誤
        if let Some(rejected) = &outcome.rejected {
            tracing::warn!(
                "⚠️ Stopped reading at malformed token '{}' (position {}); {} values kept",
                rejected.token,
                rejected.position,
                outcome.values.len()
            );
        }

        Ok(outcome)
    }

    async fn transform(&self, outcome: ScanOutcome) -> Result<FoldReport> {
        let value = fold::xor_fold(&outcome.values);

        Ok(FoldReport {
            value,
            values_read: outcome.values.len(),
            truncated: outcome.truncated(),
            finished_at: chrono::Utc::now(),
        })
    }

    async fn load(&self, report: FoldReport) -> Result<String> {
        let line = match self.config.report_format() {
            "json" => serde_json::to_string(&report)?,
            _ => report.render_plain(),
        };

        self.output.write_line(&line).await?;

        Ok(line)
    }
}
