//! Page lifecycle as a pure transition function.
//!
//! `transition` takes a snapshot and an event and returns the next snapshot;
//! the input is never modified.

use crate::error::ErrorKind;
use crate::media::CapturedImage;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageSelected,
    Processing,
    Resolved,
}

/// How a successful result is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPolicy {
    /// Single slot: each result replaces the previous one.
    Replace,
    /// Ordered history, most recent last.
    Append,
}

#[derive(Debug, Clone)]
pub struct PageSnapshot<R> {
    pub phase: Phase,
    pub image: Option<CapturedImage>,
    pub results: Vec<R>,
    pub error: Option<ErrorKind>,
    /// Incremented by every capture and submission; responses carry the
    /// generation they were issued under.
    pub generation: u64,
    pub policy: ResultPolicy,
}

impl<R> PageSnapshot<R> {
    pub fn new(policy: ResultPolicy) -> Self {
        Self {
            phase: Phase::Idle,
            image: None,
            results: Vec::new(),
            error: None,
            generation: 0,
            policy,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    pub fn latest(&self) -> Option<&R> {
        self.results.last()
    }
}

#[derive(Debug, Clone)]
pub enum PageEvent<R> {
    ImageCaptured(CapturedImage),
    Submitted,
    Succeeded { generation: u64, result: R },
    Failed { generation: u64, error: ErrorKind },
    /// A user action failed before any request was issued.
    Rejected { error: ErrorKind },
    /// A page setting was refused; the phase and held image are unchanged.
    ErrorNoted { error: ErrorKind },
    HistoryLoaded(Vec<R>),
    Unmounted,
}

impl<R> PageEvent<R> {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::ImageCaptured(_) => "image_captured",
            PageEvent::Submitted => "submitted",
            PageEvent::Succeeded { .. } => "succeeded",
            PageEvent::Failed { .. } => "failed",
            PageEvent::Rejected { .. } => "rejected",
            PageEvent::ErrorNoted { .. } => "error_noted",
            PageEvent::HistoryLoaded(_) => "history_loaded",
            PageEvent::Unmounted => "unmounted",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("invalid state transition: from {from:?} using event {event}")]
    InvalidTransition { from: Phase, event: &'static str },

    #[error("cannot submit without a captured image")]
    NoImage,

    #[error("stale response for generation {received}, current generation is {current}")]
    StaleResponse { received: u64, current: u64 },
}

pub fn transition<R: Clone>(
    snapshot: &PageSnapshot<R>,
    event: PageEvent<R>,
) -> StateResult<PageSnapshot<R>> {
    let event_name = event.name();
    let mut next = snapshot.clone();

    match event {
        PageEvent::ImageCaptured(image) => {
            next.phase = Phase::ImageSelected;
            next.image = Some(image);
            next.error = None;
            next.generation += 1;
        }
        PageEvent::Submitted => {
            if snapshot.is_processing() {
                return Err(StateError::InvalidTransition {
                    from: snapshot.phase,
                    event: event_name,
                });
            }
            if snapshot.image.is_none() {
                return Err(StateError::NoImage);
            }
            next.phase = Phase::Processing;
            next.error = None;
            next.generation += 1;
        }
        PageEvent::Succeeded { generation, result } => {
            check_response(snapshot, generation, event_name)?;
            next.phase = Phase::Resolved;
            if snapshot.policy == ResultPolicy::Replace {
                next.results.clear();
            }
            next.results.push(result);
        }
        PageEvent::Failed { generation, error } => {
            check_response(snapshot, generation, event_name)?;
            next.phase = Phase::Idle;
            next.error = Some(error);
        }
        PageEvent::Rejected { error } => {
            if snapshot.is_processing() {
                return Err(StateError::InvalidTransition {
                    from: snapshot.phase,
                    event: event_name,
                });
            }
            next.phase = Phase::Idle;
            next.error = Some(error);
        }
        PageEvent::ErrorNoted { error } => {
            if snapshot.is_processing() {
                return Err(StateError::InvalidTransition {
                    from: snapshot.phase,
                    event: event_name,
                });
            }
            next.error = Some(error);
        }
        PageEvent::HistoryLoaded(results) => {
            next.results = match snapshot.policy {
                ResultPolicy::Append => results,
                ResultPolicy::Replace => results.into_iter().last().into_iter().collect(),
            };
        }
        PageEvent::Unmounted => {
            next = PageSnapshot::new(snapshot.policy);
            next.generation = snapshot.generation + 1;
        }
    }

    Ok(next)
}

fn check_response<R>(
    snapshot: &PageSnapshot<R>,
    generation: u64,
    event: &'static str,
) -> StateResult<()> {
    if generation != snapshot.generation {
        return Err(StateError::StaleResponse {
            received: generation,
            current: snapshot.generation,
        });
    }
    if !snapshot.is_processing() {
        return Err(StateError::InvalidTransition {
            from: snapshot.phase,
            event,
        });
    }
    Ok(())
}
