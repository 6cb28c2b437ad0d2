//! Submission lifecycle: owns the canonical record and decides what to show.

use salp_client::{PredictError, Predictor};
use salp_core::{InputRecord, PredictionResult};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a prediction is already in flight")]
    Busy,
    #[error("the session has been closed")]
    Closed,
}

/// How a finished submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(PredictionResult),
    /// Display message of the failure.
    Failure(String),
}

impl From<Result<PredictionResult, PredictError>> for Outcome {
    fn from(result: Result<PredictionResult, PredictError>) -> Self {
        match result {
            Ok(prediction) => Self::Success(prediction),
            Err(error) => Self::Failure(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Settled(Outcome),
}

/// The single thing to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Form,
    Loading,
    Error(&'a str),
    Result(&'a PredictionResult),
}

/// Ties a completion to the submission that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct SubmitTicket {
    generation: u64,
}

pub struct Session<P> {
    predictor: P,
    record: InputRecord,
    phase: Phase,
    generation: u64,
    closed: bool,
}

impl<P: Predictor> Session<P> {
    pub fn new(predictor: P) -> Self {
        Self::with_record(predictor, InputRecord::default())
    }

    pub fn with_record(predictor: P, record: InputRecord) -> Self {
        Self {
            predictor,
            record,
            phase: Phase::Idle,
            generation: 0,
            closed: false,
        }
    }

    pub const fn predictor(&self) -> &P {
        &self.predictor
    }

    pub const fn record(&self) -> &InputRecord {
        &self.record
    }

    /// Adopt an edited record from the form.
    pub fn on_form_change(&mut self, record: InputRecord) {
        self.record = record;
    }

    /// Enter `Loading`, clearing any previous result or failure.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] while a submission is in flight, and
    /// [`SessionError::Closed`] after [`Self::teardown`].
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SessionError> {
        if self.closed {
            return Err(SessionError::Closed);
        }
        if self.phase == Phase::Loading {
            return Err(SessionError::Busy);
        }
        self.generation += 1;
        self.phase = Phase::Loading;
        Ok(SubmitTicket {
            generation: self.generation,
        })
    }

    /// Settle the submission `ticket` belongs to.
    ///
    /// Returns `false`, leaving the state untouched, when the ticket is stale
    /// or the session was torn down.
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: impl Into<Outcome>) -> bool {
        if self.closed || ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                closed = self.closed,
                "discarding stale completion"
            );
            return false;
        }
        self.phase = Phase::Settled(outcome.into());
        true
    }

    /// Adopt `record`, then run one full submission.
    ///
    /// # Errors
    ///
    /// Same as [`Self::begin_submit`]. Prediction failures are not errors
    /// here; they settle the session with [`Outcome::Failure`].
    pub async fn submit(&mut self, record: InputRecord) -> Result<(), SessionError> {
        self.on_form_change(record);
        let ticket = self.begin_submit()?;
        let result = self.predictor.predict(&self.record).await;
        self.complete(ticket, result);
        Ok(())
    }

    /// Close the session; completions still in flight are dropped.
    pub fn teardown(&mut self) {
        self.closed = true;
        self.generation += 1;
    }

    pub fn view(&self) -> View<'_> {
        match &self.phase {
            Phase::Idle => View::Form,
            Phase::Loading => View::Loading,
            Phase::Settled(Outcome::Failure(message)) => View::Error(message),
            Phase::Settled(Outcome::Success(prediction)) => View::Result(prediction),
        }
    }
}
