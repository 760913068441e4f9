use crate::utils::error::{CatalogError, Result};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, Mutex};

type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Fixed-size worker pool with a bounded submission queue.
///
/// Constructed once at startup and shared process-wide; the workers live for
/// the lifetime of the process. Excess submissions queue up to
/// `queue_capacity`; a full queue blocks the submitter up to
/// `submit_timeout` and then rejects. Every accepted job either runs to
/// completion or its handle observes the closed channel.
pub struct WorkerPool {
    queue: mpsc::Sender<Job>,
    submit_timeout: Duration,
}

/// Handle to one in-flight job, owned by the submitter until joined.
pub struct PoolHandle<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> PoolHandle<T> {
    /// Waits for the job to finish. `None` means the pool dropped the job
    /// without running it (shutdown), never a panic.
    pub async fn join(self) -> Option<T> {
        self.rx.await.ok()
    }
}

impl WorkerPool {
    pub fn new(workers: usize, queue_capacity: usize, submit_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<Job>(queue_capacity.max(1));
        let rx = Arc::new(Mutex::new(rx));

        for n in 0..workers.max(1) {
            let rx = Arc::clone(&rx);
            tokio::spawn(async move {
                tracing::debug!("worker {} started", n);
                loop {
                    // The guard is released before the job runs, so workers
                    // only contend while idle.
                    let job = rx.lock().await.recv().await;
                    match job {
                        Some(job) => job.await,
                        None => break,
                    }
                }
                tracing::debug!("worker {} stopped", n);
            });
        }

        Self {
            queue: tx,
            submit_timeout,
        }
    }

    /// Enqueues a future for execution on the pool. Blocks up to the
    /// configured admission timeout when the queue is full.
    pub async fn submit<F, T>(&self, fut: F) -> Result<PoolHandle<T>>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let job: Job = Box::pin(async move {
            // The receiver may have been dropped; the job result is then
            // simply discarded.
            let _ = tx.send(fut.await);
        });

        match self.queue.send_timeout(job, self.submit_timeout).await {
            Ok(()) => Ok(PoolHandle { rx }),
            Err(mpsc::error::SendTimeoutError::Timeout(_)) => Err(CatalogError::PoolSaturated),
            Err(mpsc::error::SendTimeoutError::Closed(_)) => Err(CatalogError::PoolClosed),
        }
    }
}
