pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod pipeline;
pub mod report;

pub use client::*;
pub use config::*;
pub use error::*;
pub use matcher::*;
pub use pipeline::*;
pub use report::*;

use std::time::Instant;
use tokio::sync::mpsc;
use tracing::info;

/// Facade over the pipeline for the common case: run a set of jobs and get
/// the finished CSV bytes back, with optional progress forwarding.
pub struct PdfScout {
    pipeline: Pipeline,
}

impl PdfScout {
    pub fn new() -> Result<Self> {
        Self::with_config(ScoutConfig::default())
    }

    pub fn with_config(config: ScoutConfig) -> Result<Self> {
        Ok(Self {
            pipeline: Pipeline::new(config)?,
        })
    }

    /// Raw event stream for callers that own their report format.
    pub fn run(&self, jobs: Vec<SearchJob>) -> Result<mpsc::Receiver<ScoutEvent>> {
        self.pipeline.run(jobs)
    }

    /// Drive the pipeline to completion and return the CSV export.
    ///
    /// Progress milestones are forwarded to `progress` fire-and-forget; a
    /// dropped receiver does not stop the run.
    pub async fn export_csv(
        &self,
        jobs: Vec<SearchJob>,
        progress: Option<mpsc::Sender<ProgressEvent>>,
    ) -> Result<Vec<u8>> {
        let start = Instant::now();

        let mut rx = self.pipeline.run(jobs)?;
        let mut report = CsvReport::new(Vec::new())?;

        while let Some(event) = rx.recv().await {
            match event {
                ScoutEvent::Outcome(outcome) => report.write_row(&outcome)?,
                ScoutEvent::Progress(milestone) => {
                    if let Some(progress) = &progress {
                        let _ = progress.send(milestone).await;
                    }
                }
            }
        }

        let rows = report.rows_written();
        let bytes = report.finish()?;

        info!("Exported {} rows in {:?}", rows, start.elapsed());
        Ok(bytes)
    }
}
