// File: crates/sweep-core/src/loader.rs
// Summary: Background file loading; every request runs on its own worker thread and reports over its own channel.
// Notes:
// - Starting a request drops the receiver of the previous one, so a newer load always wins.
// - Only the worker holds the sender; a worker that dies without reporting shows up as `LoaderGone`.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::ColumnNames;
use crate::error::{SweepError, SweepResult};
use crate::import::{self, ImportReport};

struct Request {
    generation: u64,
    rx: Receiver<SweepResult<ImportReport>>,
}

#[derive(Default)]
pub struct FileLoader {
    current: Option<Request>,
    generation: u64,
}

impl FileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Start loading `path`, superseding any request still in flight.
    pub fn begin(&mut self, path: PathBuf, columns: ColumnNames) -> u64 {
        info!(path = %path.display(), generation = self.generation + 1, "loading file");
        self.spawn(move || import::load_csv(&path, &columns))
    }

    fn spawn<F>(&mut self, job: F) -> u64
    where
        F: FnOnce() -> SweepResult<ImportReport> + Send + 'static,
    {
        self.generation += 1;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The request may have been superseded; nobody is listening then.
            let _ = tx.send(job());
        });
        self.current = Some(Request { generation: self.generation, rx });
        self.generation
    }

    /// Forget the in-flight request; its result will be discarded.
    pub fn cancel(&mut self) {
        self.current = None;
    }

    /// Non-blocking: the result of the current request, if it has arrived.
    pub fn poll(&mut self) -> Option<SweepResult<ImportReport>> {
        let outcome = self.current.as_ref()?.rx.try_recv();
        match outcome {
            Ok(result) => self.finish(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => self.finish(Err(SweepError::LoaderGone)),
        }
    }

    /// Blocking variant of `poll` for headless callers.
    pub fn wait(&mut self, timeout: Duration) -> Option<SweepResult<ImportReport>> {
        let outcome = self.current.as_ref()?.rx.recv_timeout(timeout);
        match outcome {
            Ok(result) => self.finish(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => self.finish(Err(SweepError::LoaderGone)),
        }
    }

    fn finish(&mut self, result: SweepResult<ImportReport>) -> Option<SweepResult<ImportReport>> {
        let request = self.current.take()?;
        if let Err(SweepError::LoaderGone) = &result {
            warn!(generation = request.generation, "load worker exited without a result");
        }
        Some(result)
    }
}
