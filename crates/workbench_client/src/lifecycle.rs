//! Request lifecycle state machine shared by every dashboard screen.
//!
//! One instance per screen. Submitting allocates a monotonically increasing
//! sequence number and moves the screen to `InFlight`, discarding any prior
//! result so the view renders a loading state instead of stale data. A
//! completion is applied only when its sequence number still matches the most
//! recently issued submission; anything older is a stale response from a
//! superseded submit and is dropped.

use crate::response::ApiResponse;

pub type RequestSeq = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<E> {
    Idle,
    InFlight { seq: RequestSeq },
    Succeeded { seq: RequestSeq, response: ApiResponse },
    Failed { seq: RequestSeq, error: E },
}

#[derive(Debug)]
pub struct RequestLifecycle<E> {
    state: RequestState<E>,
    last_issued: RequestSeq,
}

impl<E> Default for RequestLifecycle<E> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            last_issued: 0,
        }
    }
}

impl<E> RequestLifecycle<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new submission: allocates the next sequence number and enters
    /// `InFlight`, superseding any outstanding request.
    pub fn begin(&mut self) -> RequestSeq {
        self.last_issued += 1;
        self.state = RequestState::InFlight {
            seq: self.last_issued,
        };
        self.last_issued
    }

    /// Applies a completed request's outcome. Returns `false` when the
    /// completion was stale (a newer submission has been issued since).
    pub fn complete(&mut self, seq: RequestSeq, outcome: Result<ApiResponse, E>) -> bool {
        if seq != self.last_issued {
            return false;
        }
        self.state = match outcome {
            Ok(response) => RequestState::Succeeded { seq, response },
            Err(error) => RequestState::Failed { seq, error },
        };
        true
    }

    pub fn state(&self) -> &RequestState<E> {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, RequestState::InFlight { .. })
    }

    /// Clears a rendered result or error back to the idle form.
    pub fn dismiss(&mut self) {
        if !self.is_in_flight() {
            self.state = RequestState::Idle;
        }
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
