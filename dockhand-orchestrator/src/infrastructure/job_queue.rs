//! Background job queue and worker pool
//!
//! HTTP handlers push jobs through [`JobQueueHandle`]; a worker pool with
//! bounded concurrency consumes them. Jobs are retried a fixed number of
//! times with exponential backoff; each retry starts the workflow over from
//! its first step.

use std::sync::Arc;
use std::time::Duration;

use dockhand_core::config::QueueConfig;
use tokio::sync::Semaphore;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::dockerization::DockerizationWorkflow;

/// Message delivered to the worker pool when a dockerization job is queued.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct QueuedDockerizationJob {
    pub task_id: Uuid,
    pub repo_url: String,
    pub github_token: String,
    pub analysis_id: Uuid,
}

/// Errors that can occur when enqueuing a job.
#[derive(Debug, thiserror::Error)]
pub enum JobQueueError {
    #[error("Failed to enqueue job: {0}")]
    EnqueueFailed(String),
}

/// Handle that allows HTTP handlers to push jobs into the background worker
/// queue.
#[derive(Clone)]
pub struct JobQueueHandle {
    tx: UnboundedSender<QueuedDockerizationJob>,
}

impl JobQueueHandle {
    pub fn new() -> (Self, UnboundedReceiver<QueuedDockerizationJob>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn enqueue(&self, job: QueuedDockerizationJob) -> Result<(), JobQueueError> {
        self.tx.send(job).map_err(|e| {
            error!("Failed to enqueue job: {}", e);
            JobQueueError::EnqueueFailed(e.to_string())
        })
    }
}

/// Shared dependencies required by the job workers.
#[derive(Clone)]
pub struct JobWorkerContext {
    pub workflow: Arc<DockerizationWorkflow>,
    pub queue: QueueConfig,
}

/// Spawn a worker pool that consumes queued jobs and processes them in the
/// background.
pub fn spawn_job_worker_pool(
    context: JobWorkerContext,
    mut receiver: UnboundedReceiver<QueuedDockerizationJob>,
    shutdown_token: CancellationToken,
) {
    let concurrency = context.queue.max_workers.max(1);
    let semaphore = Arc::new(Semaphore::new(concurrency));

    tokio::spawn(async move {
        info!("Job worker pool started with concurrency: {}", concurrency);

        loop {
            // Wait for a permit before polling for a job
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(err) => {
                    error!(error = %err, "Failed to acquire concurrency permit for job processing");
                    break;
                }
            };

            tokio::select! {
                job = receiver.recv() => {
                    match job {
                        Some(job) => {
                            let ctx = context.clone();
                            tokio::spawn(async move {
                                process_job(ctx, job).await;
                                drop(permit);
                            });
                        }
                        None => {
                            info!("Job queue closed, worker pool stopping");
                            break;
                        }
                    }
                }
                _ = shutdown_token.cancelled() => {
                    info!("Job worker pool shutting down gracefully");
                    break;
                }
            }
        }

        warn!("Job worker pool exiting");
    });
}

async fn process_job(ctx: JobWorkerContext, job: QueuedDockerizationJob) {
    let task_id = job.task_id;
    info!(task_id = %task_id, "Processing dockerization job");

    let max_attempts = ctx.queue.max_attempts.max(1);
    let mut delay = Duration::from_millis(ctx.queue.backoff_initial_ms);

    for attempt in 1..=max_attempts {
        match ctx.workflow.execute(&job).await {
            Ok(pr_url) => {
                info!(task_id = %task_id, pr_url = %pr_url, "Dockerization job finished successfully");
                return;
            }
            Err(err) => {
                warn!(task_id = %task_id, attempt, error = %err, "Dockerization attempt failed");
                if attempt < max_attempts {
                    tokio::time::sleep(delay).await;
                    delay = delay.mul_f64(ctx.queue.backoff_multiplier);
                }
            }
        }
    }

    error!(
        task_id = %task_id,
        "Dockerization job failed after {} attempts",
        max_attempts
    );
}
