//! Single-lane background job queue.
//!
//! Bitmap work (filters on a loaded image) runs off the event thread. Jobs
//! are executed strictly one at a time in submission order; a job only starts
//! after the previous one has signalled completion. Each submission returns a
//! [`JobHandle`] that resolves exactly once.
//!
//! The queue must be created inside a Tokio runtime.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Identifier assigned to each submitted job, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Job({})", self.0)
    }
}

/// Error types for job queue operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobError {
    /// The queue was shut down before the job produced a result
    #[error("Job cancelled")]
    Cancelled,
    /// The queue no longer accepts work
    #[error("Job queue is shut down")]
    QueueClosed,
    /// The job panicked while running
    #[error("Job {0} failed")]
    Failed(JobId),
}

type Work<T> = Box<dyn FnOnce() -> T + Send + 'static>;

struct QueuedJob<T> {
    id: JobId,
    work: Work<T>,
    done: oneshot::Sender<Result<T, JobError>>,
}

/// Completion handle for one submitted job.
pub struct JobHandle<T> {
    id: JobId,
    done: oneshot::Receiver<Result<T, JobError>>,
}

impl<T> JobHandle<T> {
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Waits for the job's single completion signal.
    pub async fn wait(self) -> Result<T, JobError> {
        self.done.await.map_err(|_| JobError::Cancelled)?
    }
}

/// FIFO queue running at most one job at a time.
pub struct JobQueue<T> {
    sender: Option<mpsc::UnboundedSender<QueuedJob<T>>>,
    worker: Option<JoinHandle<()>>,
    next_id: AtomicU64,
}

impl<T: Send + 'static> JobQueue<T> {
    /// Starts the worker task on the current runtime.
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(receiver));
        Self {
            sender: Some(sender),
            worker: Some(worker),
            next_id: AtomicU64::new(1),
        }
    }

    /// Queues `work` behind every job submitted before it.
    pub fn submit<F>(&self, work: F) -> Result<JobHandle<T>, JobError>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let sender = self.sender.as_ref().ok_or(JobError::QueueClosed)?;
        let id = JobId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (done, receiver) = oneshot::channel();
        sender
            .send(QueuedJob {
                id,
                work: Box::new(work),
                done,
            })
            .map_err(|_| JobError::QueueClosed)?;
        tracing::debug!("Queued {}", id);
        Ok(JobHandle { id, done: receiver })
    }

    /// Stops accepting work and cancels queued jobs. Handles still waiting
    /// resolve to [`JobError::Cancelled`].
    pub async fn shutdown(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            worker.abort();
            // An aborted task reports a cancellation error; nothing to recover.
            let _ = worker.await;
        }
        tracing::debug!("Job queue shut down");
    }

    pub fn is_running(&self) -> bool {
        self.sender.is_some()
    }
}

impl<T> Drop for JobQueue<T> {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
    }
}

async fn run_worker<T: Send + 'static>(mut receiver: mpsc::UnboundedReceiver<QueuedJob<T>>) {
    while let Some(job) = receiver.recv().await {
        let QueuedJob { id, work, done } = job;
        tracing::debug!("Starting {}", id);
        match tokio::task::spawn_blocking(work).await {
            Ok(output) => {
                if done.send(Ok(output)).is_err() {
                    tracing::debug!("{} finished but nobody is waiting", id);
                }
            }
            Err(e) => {
                tracing::warn!("{} did not complete: {}", id, e);
                let _ = done.send(Err(JobError::Failed(id)));
            }
        }
    }
}
