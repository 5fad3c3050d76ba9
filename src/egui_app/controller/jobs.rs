//! Background fetch worker for the manifest and facility details.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::facility::{Facility, FacilityFetcher, FetchError, ManifestEntry};

pub(crate) type RequestId = u64;

/// Called from the worker thread after each finished fetch, so the UI can repaint.
pub type Waker = Box<dyn Fn() + Send>;

pub(crate) enum FetchJob {
    Manifest {
        request_id: RequestId,
    },
    Facility {
        request_id: RequestId,
        entry: ManifestEntry,
    },
}

pub(crate) enum FetchMessage {
    Manifest {
        request_id: RequestId,
        result: Result<Vec<ManifestEntry>, FetchError>,
    },
    Facility {
        request_id: RequestId,
        facility_id: String,
        result: Result<Facility, FetchError>,
    },
}

/// Handle to the fetch thread. Dropping it closes the job channel and ends the thread.
pub struct FetchWorker {
    job_tx: Sender<FetchJob>,
    message_rx: Receiver<FetchMessage>,
}

impl FetchWorker {
    pub fn spawn(fetcher: Arc<dyn FacilityFetcher>) -> Self {
        Self::spawn_with_waker(fetcher, Box::new(|| {}))
    }

    pub fn spawn_with_waker(fetcher: Arc<dyn FacilityFetcher>, waker: Waker) -> Self {
        let (job_tx, job_rx) = std::sync::mpsc::channel::<FetchJob>();
        let (message_tx, message_rx) = std::sync::mpsc::channel::<FetchMessage>();
        thread::spawn(move || {
            while let Ok(job) = job_rx.recv() {
                let message = run_job(fetcher.as_ref(), job);
                if message_tx.send(message).is_err() {
                    break;
                }
                waker();
            }
        });
        Self { job_tx, message_rx }
    }

    /// Queue a job. Returns false when the worker thread is gone.
    pub(crate) fn submit(&self, job: FetchJob) -> bool {
        self.job_tx.send(job).is_ok()
    }

    pub(crate) fn try_recv(&self) -> Result<FetchMessage, TryRecvError> {
        self.message_rx.try_recv()
    }
}

fn run_job(fetcher: &dyn FacilityFetcher, job: FetchJob) -> FetchMessage {
    match job {
        FetchJob::Manifest { request_id } => {
            tracing::debug!(request_id, "fetching facility manifest");
            FetchMessage::Manifest {
                request_id,
                result: fetcher.fetch_manifest(),
            }
        }
        FetchJob::Facility { request_id, entry } => {
            tracing::debug!(request_id, facility = %entry.id, "fetching facility");
            FetchMessage::Facility {
                request_id,
                result: fetcher.fetch_facility(&entry),
                facility_id: entry.id,
            }
        }
    }
}

/// Requests whose answers are still wanted. Anything else that arrives is stale.
#[derive(Debug, Default)]
pub(crate) struct PendingFetches {
    next_request_id: RequestId,
    pub(crate) manifest: Option<RequestId>,
    pub(crate) facility: Option<(RequestId, String)>,
}

impl PendingFetches {
    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        self.next_request_id
    }

    pub(crate) fn any(&self) -> bool {
        self.manifest.is_some() || self.facility.is_some()
    }

    pub(crate) fn take_manifest(&mut self, request_id: RequestId) -> bool {
        if self.manifest == Some(request_id) {
            self.manifest = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn take_facility(&mut self, request_id: RequestId, facility_id: &str) -> bool {
        let wanted = self
            .facility
            .as_ref()
            .is_some_and(|(id, facility)| *id == request_id && facility == facility_id);
        if wanted {
            self.facility = None;
        }
        wanted
    }
}
