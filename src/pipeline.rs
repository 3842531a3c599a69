use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tracing::{info, warn};
use url::Url;

use crate::{discovery, extractor, matcher, HttpClient, Result, ScoutConfig, ScoutError};

/// One unit of externally supplied work: a directory listing to expand and
/// the keyword to search its documents for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchJob {
    pub source_url: Url,
    pub keyword: String,
}

impl SearchJob {
    pub fn new(source_url: Url, keyword: impl Into<String>) -> Self {
        Self {
            source_url,
            keyword: keyword.into(),
        }
    }
}

/// Hit statistics for one discovered document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub document_url: Url,
    pub keyword: String,
    pub matched_pages: Vec<u32>,
    pub occurrence_count: usize,
    pub found: bool,
}

impl SearchOutcome {
    fn not_found(document_url: Url, keyword: String) -> Self {
        Self {
            document_url,
            keyword,
            matched_pages: Vec::new(),
            occurrence_count: 0,
            found: false,
        }
    }
}

/// Percentage milestone, non-decreasing across a run, terminating at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub percent: u8,
}

#[derive(Debug)]
pub enum ScoutEvent {
    Outcome(SearchOutcome),
    Progress(ProgressEvent),
}

/// Threshold accounting for progress milestones.
///
/// The watermark of the last emitted percentage carries across job batches,
/// so the emitted sequence never decreases even though the computed
/// percentage is per-batch.
#[derive(Debug)]
struct ProgressGauge {
    step: u8,
    last: u8,
}

impl ProgressGauge {
    fn new(step: u8) -> Self {
        Self { step, last: 0 }
    }

    fn advance(&mut self, drained: usize, total: usize) -> Option<ProgressEvent> {
        let percent = (drained * 100 / total) as u8;

        if percent >= self.last + self.step {
            self.last = percent;
            Some(ProgressEvent { percent })
        } else {
            None
        }
    }

    /// The terminal 100% milestone, emitted once per run regardless of where
    /// the last natural crossing landed.
    fn finish(&mut self) -> ProgressEvent {
        self.last = 100;
        ProgressEvent { percent: 100 }
    }
}

/// Fan-out/fan-in engine: expands each job into document tasks bounded by a
/// shared worker pool and streams outcomes plus progress milestones.
#[derive(Clone)]
pub struct Pipeline {
    config: Arc<ScoutConfig>,
    client: Arc<HttpClient>,
    semaphore: Arc<Semaphore>,
}

impl Pipeline {
    pub fn new(config: ScoutConfig) -> Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(HttpClient::new(config.clone())?);
        let semaphore = Arc::new(Semaphore::new(config.worker_count));

        Ok(Self {
            config,
            client,
            semaphore,
        })
    }

    /// Validate the jobs, then run them on a background task, returning the
    /// event stream. The stream is finite and not restartable.
    pub fn run(&self, jobs: Vec<SearchJob>) -> Result<mpsc::Receiver<ScoutEvent>> {
        for job in &jobs {
            if job.keyword.is_empty() {
                return Err(ScoutError::EmptyKeyword(job.source_url.to_string()));
            }
        }

        let (tx, rx) = mpsc::channel(self.config.channel_capacity);

        let pipeline = self.clone();
        tokio::spawn(async move {
            if let Err(e) = pipeline.run_internal(jobs, tx).await {
                warn!("Pipeline stopped early: {}", e);
            }
        });

        Ok(rx)
    }

    async fn run_internal(
        &self,
        jobs: Vec<SearchJob>,
        tx: mpsc::Sender<ScoutEvent>,
    ) -> Result<()> {
        let mut gauge = ProgressGauge::new(10);

        for job in jobs {
            // Discovery is sequential per job; a failed listing skips the
            // job without aborting the run.
            let links = match discovery::discover(&self.client, &job.source_url).await {
                Ok(links) => links,
                Err(e) => {
                    warn!("Skipping job for {}: {}", job.source_url, e);
                    continue;
                }
            };

            info!(
                "Scheduling {} documents from {} for keyword {:?}",
                links.len(),
                job.source_url,
                job.keyword
            );

            let mut batch = Vec::with_capacity(links.len());
            for url in links {
                let client = self.client.clone();
                let semaphore = self.semaphore.clone();
                let keyword = job.keyword.clone();
                let task_url = url.clone();

                let handle = tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.unwrap();
                    search_document(&client, task_url, keyword).await
                });

                batch.push((url, handle));
            }

            // Batch barrier: every document task for this job is submitted
            // before any of its results are delivered, and delivery follows
            // submission order.
            let total = batch.len();
            for (index, (url, handle)) in batch.into_iter().enumerate() {
                let outcome = match handle.await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!("Search task for {} failed: {}", url, e);
                        SearchOutcome::not_found(url, job.keyword.clone())
                    }
                };

                if tx.send(ScoutEvent::Outcome(outcome)).await.is_err() {
                    return Err(ScoutError::ChannelClosed);
                }

                if let Some(event) = gauge.advance(index + 1, total) {
                    if tx.send(ScoutEvent::Progress(event)).await.is_err() {
                        return Err(ScoutError::ChannelClosed);
                    }
                }
            }
        }

        // Milestone delivery is fire-and-forget
        let _ = tx.send(ScoutEvent::Progress(gauge.finish())).await;

        Ok(())
    }
}

/// One worker unit: download, extract and match a single document.
async fn search_document(client: &HttpClient, url: Url, keyword: String) -> SearchOutcome {
    let pages = extractor::fetch_pages(client, &url).await;
    let hits = matcher::match_keyword(&pages, &keyword);
    let found = !hits.matched_pages.is_empty();

    SearchOutcome {
        document_url: url,
        keyword,
        matched_pages: hits.matched_pages,
        occurrence_count: hits.occurrence_count,
        found,
    }
}
