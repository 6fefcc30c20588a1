//! Guided flow and payment state machines

use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which guided flow a state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    /// Skills assessment
    Assessment,
    /// Roadmap generation
    Roadmap,
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assessment => f.write_str("assessment"),
            Self::Roadmap => f.write_str("roadmap"),
        }
    }
}

/// State of a guided flow
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum FlowState {
    /// Waiting for the user to start
    #[default]
    Idle,
    /// Remote operation outstanding
    Analyzing,
    /// Result stored in the session
    Complete,
    /// Remote operation failed; retry returns to idle
    Failed(String),
}

impl FlowState {
    /// Whether a remote operation is outstanding
    #[inline]
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Analyzing)
    }
}

/// States reachable from `from`
#[must_use]
pub fn allowed_flow_transitions(from: &FlowState) -> &'static [&'static str] {
    match from {
        FlowState::Idle => &["analyzing"],
        FlowState::Analyzing => &["complete", "failed", "idle"],
        FlowState::Complete | FlowState::Failed(_) => &["idle"],
    }
}

fn flow_state_name(state: &FlowState) -> &'static str {
    match state {
        FlowState::Idle => "idle",
        FlowState::Analyzing => "analyzing",
        FlowState::Complete => "complete",
        FlowState::Failed(_) => "failed",
    }
}

/// Validate a guided flow transition
pub fn validate_flow_transition(
    kind: FlowKind,
    from: &FlowState,
    to: &FlowState,
) -> Result<(), FlowError> {
    if allowed_flow_transitions(from).contains(&flow_state_name(to)) {
        Ok(())
    } else {
        Err(FlowError::IllegalTransition {
            kind,
            from: from.clone(),
            to: to.clone(),
        })
    }
}

/// Status of the payment prompt
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Prompt shown, nothing submitted
    #[default]
    Idle,
    /// Payment submitted
    Processing,
    /// Payment captured
    Success,
    /// Payment failed with a display message
    Error(String),
}

/// Validate a payment status transition
pub fn validate_payment_transition(from: &PaymentStatus, to: &PaymentStatus) -> Result<(), FlowError> {
    use PaymentStatus::{Error, Idle, Processing, Success};

    let allowed = matches!(
        (from, to),
        (Idle, Processing)
            | (Processing, Success)
            | (Processing, Error(_))
            | (Processing, Idle)
            | (Error(_), Idle)
            | (Success, Idle)
    );
    if allowed {
        Ok(())
    } else {
        Err(FlowError::IllegalPaymentTransition {
            from: from.clone(),
            to: to.clone(),
        })
    }
}

/// A guided flow with validated transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidedFlow {
    kind: FlowKind,
    state: FlowState,
}

impl GuidedFlow {
    /// New flow in `Idle`
    #[inline]
    #[must_use]
    pub fn new(kind: FlowKind) -> Self {
        Self {
            kind,
            state: FlowState::Idle,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Move to `to` if allowed
    pub fn transition(&mut self, to: FlowState) -> Result<(), FlowError> {
        validate_flow_transition(self.kind, &self.state, &to)?;
        tracing::debug!(flow = %self.kind, from = ?self.state, to = ?to, "Flow transition");
        self.state = to;
        Ok(())
    }

    /// Enter `Analyzing`, restarting from `Complete` or `Failed` if needed
    pub fn start(&mut self) -> Result<(), FlowError> {
        match self.state {
            FlowState::Analyzing => return Err(FlowError::AlreadyInProgress(self.kind)),
            FlowState::Complete | FlowState::Failed(_) => self.transition(FlowState::Idle)?,
            FlowState::Idle => {}
        }
        self.transition(FlowState::Analyzing)
    }

    /// Drop an `Analyzing` state whose operation will never resolve.
    ///
    /// Returns whether anything was abandoned.
    pub fn abandon_stale(&mut self) -> bool {
        if !self.state.is_in_progress() {
            return false;
        }
        tracing::warn!(flow = %self.kind, "Abandoning interrupted flow");
        self.state = FlowState::Idle;
        true
    }

    /// Back to `Idle` regardless of the current state
    pub fn reset(&mut self) {
        self.state = FlowState::Idle;
    }
}
