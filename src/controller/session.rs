//! One page's state plus its single in-flight request.
//!
//! Every submission runs under a child of the page's lifetime token. A new
//! capture cancels the in-flight request; unmounting cancels everything.
//! A cancelled or superseded request never touches the snapshot. A
//! submission whose future is dropped mid-request settles as `Cancelled`.

use crate::controller::state::{
    transition, PageEvent, PageSnapshot, ResultPolicy, StateError,
};
use crate::error::{AppError, AppResult, ErrorKind};
use crate::i18n::PageId;
use crate::media::CapturedImage;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

struct Inner<R> {
    snapshot: PageSnapshot<R>,
    in_flight: Option<CancellationToken>,
}

pub(crate) struct Session<R> {
    page: PageId,
    inner: Mutex<Inner<R>>,
    lifetime: CancellationToken,
}

impl<R: Clone> Session<R> {
    pub(crate) fn new(page: PageId, policy: ResultPolicy) -> Self {
        Self {
            page,
            inner: Mutex::new(Inner {
                snapshot: PageSnapshot::new(policy),
                in_flight: None,
            }),
            lifetime: CancellationToken::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn apply(&self, inner: &mut Inner<R>, event: PageEvent<R>) -> Result<(), StateError> {
        let event_name = event.name();
        let from = inner.snapshot.phase;
        let next = transition(&inner.snapshot, event)?;
        debug!(page = %self.page, from = ?from, to = ?next.phase, event = event_name, "page transition");
        inner.snapshot = next;
        Ok(())
    }

    pub(crate) fn snapshot(&self) -> PageSnapshot<R> {
        self.lock().snapshot.clone()
    }

    pub(crate) fn is_unmounted(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    /// Store a new image, superseding any in-flight request.
    pub(crate) fn capture(&self, image: CapturedImage) {
        let mut inner = self.lock();
        if let Some(token) = inner.in_flight.take() {
            info!(page = %self.page, "New image supersedes in-flight request");
            token.cancel();
        }
        if let Err(e) = self.apply(&mut inner, PageEvent::ImageCaptured(image)) {
            warn!(page = %self.page, "Failed to store captured image: {}", e);
        }
    }

    /// Record an error for a user action that never reached the backend.
    pub(crate) fn reject(&self, error: ErrorKind) {
        let mut inner = self.lock();
        if let Err(e) = self.apply(&mut inner, PageEvent::Rejected { error }) {
            debug!(page = %self.page, "Rejection not recorded: {}", e);
        }
    }

    /// Record an error for a refused page setting, keeping the phase.
    pub(crate) fn note_error(&self, error: ErrorKind) {
        let mut inner = self.lock();
        if let Err(e) = self.apply(&mut inner, PageEvent::ErrorNoted { error }) {
            debug!(page = %self.page, "Error not recorded: {}", e);
        }
    }

    pub(crate) fn load_history(&self, results: Vec<R>) {
        let mut inner = self.lock();
        if let Err(e) = self.apply(&mut inner, PageEvent::HistoryLoaded(results)) {
            warn!(page = %self.page, "Failed to load history: {}", e);
        }
    }

    /// Submit the held image through `call`.
    ///
    /// Exactly one terminal state per accepted submission: `Resolved` on
    /// success, `Idle` with an error otherwise. Submissions made while another
    /// one is processing are refused with `RequestInFlight` and change nothing.
    pub(crate) async fn submit<F, Fut>(&self, call: F) -> AppResult<R>
    where
        F: FnOnce(CapturedImage) -> Fut,
        Fut: Future<Output = AppResult<R>>,
    {
        if self.is_unmounted() {
            return Err(AppError::Cancelled);
        }

        let (image, generation, token) = {
            let mut inner = self.lock();
            let attempt = transition(&inner.snapshot, PageEvent::Submitted);
            let next = match attempt {
                Ok(next) => next,
                Err(StateError::NoImage) => {
                    drop(inner);
                    self.reject(ErrorKind::NoImageSelected);
                    return Err(AppError::NoImageSelected);
                }
                Err(e) => {
                    debug!(page = %self.page, "Submit refused: {}", e);
                    return Err(AppError::RequestInFlight);
                }
            };
            let Some(image) = next.image.clone() else {
                return Err(AppError::NoImageSelected);
            };
            let generation = next.generation;
            debug!(page = %self.page, generation, "page transition to Processing");
            inner.snapshot = next;

            let token = self.lifetime.child_token();
            inner.in_flight = Some(token.clone());
            (image, generation, token)
        };

        let mut pending = PendingSubmission {
            session: self,
            generation,
            armed: true,
        };

        let outcome = tokio::select! {
            _ = token.cancelled() => {
                pending.disarm();
                debug!(page = %self.page, generation, "Request cancelled");
                return Err(AppError::Cancelled);
            }
            outcome = call(image) => outcome,
        };
        pending.disarm();

        let mut inner = self.lock();
        if inner.snapshot.generation != generation {
            debug!(
                page = %self.page,
                generation,
                current = inner.snapshot.generation,
                "Discarding stale response"
            );
            return Err(AppError::Cancelled);
        }
        inner.in_flight = None;

        match outcome {
            Ok(result) => {
                self.apply(
                    &mut inner,
                    PageEvent::Succeeded {
                        generation,
                        result: result.clone(),
                    },
                )
                .map_err(|e| {
                    warn!(page = %self.page, "Could not record result: {}", e);
                    AppError::Cancelled
                })?;
                Ok(result)
            }
            Err(err) => {
                warn!(page = %self.page, "Request failed: {}", err);
                if let Err(e) = self.apply(
                    &mut inner,
                    PageEvent::Failed {
                        generation,
                        error: err.kind(),
                    },
                ) {
                    warn!(page = %self.page, "Could not record failure: {}", e);
                }
                Err(err)
            }
        }
    }

    /// Cancel any in-flight request and discard the page state.
    pub(crate) fn unmount(&self) {
        self.lifetime.cancel();
        let mut inner = self.lock();
        inner.in_flight = None;
        if let Err(e) = self.apply(&mut inner, PageEvent::Unmounted) {
            warn!(page = %self.page, "Unmount transition failed: {}", e);
        }
        info!(page = %self.page, "Page unmounted");
    }
}

/// Settles a submission whose future is dropped while awaiting the backend,
/// so the page does not stay in `Processing`.
struct PendingSubmission<'a, R: Clone> {
    session: &'a Session<R>,
    generation: u64,
    armed: bool,
}

impl<R: Clone> PendingSubmission<'_, R> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<R: Clone> Drop for PendingSubmission<'_, R> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let session = self.session;
        let mut inner = session.lock();
        if inner.snapshot.generation != self.generation {
            return;
        }
        if let Some(token) = inner.in_flight.take() {
            token.cancel();
        }
        info!(page = %session.page, generation = self.generation, "Submission dropped before completion");
        let event = PageEvent::Failed {
            generation: self.generation,
            error: ErrorKind::Cancelled,
        };
        if let Err(e) = session.apply(&mut inner, event) {
            warn!(page = %session.page, "Could not settle dropped submission: {}", e);
        }
    }
}

impl<R> Drop for Session<R> {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::state::Phase;
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn image() -> CapturedImage {
        CapturedImage::from_bytes(b"GIF89a", "image/gif")
    }

    fn session() -> Session<String> {
        Session::new(PageId::Translate, ResultPolicy::Replace)
    }

    #[tokio::test]
    async fn test_submit_without_image_records_error() {
        let session = session();
        let result = session.submit(|_| async { Ok("unused".to_string()) }).await;

        assert!(matches!(result, Err(AppError::NoImageSelected)));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.error, Some(ErrorKind::NoImageSelected));
    }

    #[tokio::test]
    async fn test_submit_success_resolves() {
        let session = session();
        session.capture(image());

        let result = session
            .submit(|image| async move {
                assert!(image.data_uri().starts_with("data:image/gif"));
                Ok("Bonjour".to_string())
            })
            .await
            .expect("submit should succeed");

        assert_eq!(result, "Bonjour");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::Resolved);
        assert_eq!(snapshot.latest().map(String::as_str), Some("Bonjour"));
    }

    #[tokio::test]
    async fn test_submit_failure_returns_to_idle() {
        let session = session();
        session.capture(image());

        let result = session
            .submit(|_| async { Err(AppError::MalformedResponse("no field".to_string())) })
            .await;

        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.error, Some(ErrorKind::MalformedResponse));
    }

    #[tokio::test]
    async fn test_second_submit_while_processing_is_refused() {
        let session = session();
        session.capture(image());
        let (release, wait) = oneshot::channel::<()>();

        let first = session.submit(|_| async move {
            let _ = wait.await;
            Ok("first".to_string())
        });
        let second = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            let refused = session.submit(|_| async { Ok("second".to_string()) }).await;
            let _ = release.send(());
            refused
        };

        let (first, second) = tokio::join!(first, second);
        assert_eq!(first.expect("first completes"), "first");
        assert!(matches!(second, Err(AppError::RequestInFlight)));
        assert_eq!(session.snapshot().results, vec!["first".to_string()]);
    }

    #[tokio::test]
    async fn test_new_capture_cancels_in_flight_request() {
        let session = session();
        session.capture(image());

        let pending = session.submit(|_| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("late".to_string())
        });
        let supersede = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            session.capture(image());
        };

        let (pending, _) = tokio::join!(pending, supersede);
        assert!(matches!(pending, Err(AppError::Cancelled)));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::ImageSelected);
        assert!(snapshot.results.is_empty());
    }

    #[tokio::test]
    async fn test_unmount_cancels_and_blocks_further_submits() {
        let session = session();
        session.capture(image());

        let pending = session.submit(|_| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("late".to_string())
        });
        let unmount = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            session.unmount();
        };

        let (pending, _) = tokio::join!(pending, unmount);
        assert!(matches!(pending, Err(AppError::Cancelled)));
        assert!(session.snapshot().image.is_none());

        session.capture(image());
        let after = session.submit(|_| async { Ok("x".to_string()) }).await;
        assert!(matches!(after, Err(AppError::Cancelled)));
    }

    #[tokio::test]
    async fn test_dropped_submit_settles_and_allows_retry() {
        let session = session();
        session.capture(image());

        let timed_out = tokio::time::timeout(
            Duration::from_millis(20),
            session.submit(|_| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok("late".to_string())
            }),
        )
        .await;
        assert!(timed_out.is_err());

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.error, Some(ErrorKind::Cancelled));
        assert!(snapshot.image.is_some());

        let retry = session.submit(|_| async { Ok("again".to_string()) }).await;
        assert_eq!(retry.expect("retry should be accepted"), "again");
        assert_eq!(session.snapshot().phase, Phase::Resolved);
    }

    #[tokio::test]
    async fn test_history_fills_results() {
        let session: Session<String> = Session::new(PageId::Health, ResultPolicy::Append);
        session.load_history(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(session.snapshot().results.len(), 2);
    }
}
