//! Error types for Navigator Core
//!
//! Provides error handling for:
//! - Simulated remote operation failures
//! - Guided flow and payment state transitions
//! - Service gating (connection, payment, prerequisites)
//! - Configuration loading

use crate::flow::{FlowKind, FlowState, PaymentStatus};
use crate::services::ServiceId;

/// Main navigator error type
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    /// Wallet identifier was empty after trimming
    #[error("wallet address must not be empty")]
    EmptyWallet,

    /// Operation requires a connected wallet
    #[error("no wallet connected")]
    NotConnected,

    /// Unknown service identifier
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// Service has not been paid for in this session
    #[error("service {0} has not been unlocked")]
    ServiceLocked(ServiceId),

    /// Roadmap generation needs a completed assessment
    #[error("an assessment is required before generating a roadmap")]
    AssessmentRequired,

    /// Payment was declined or could not be processed
    #[error("payment failed for {service}: {reason}")]
    PaymentFailed {
        /// The service being purchased
        service: ServiceId,
        /// Display message
        reason: String,
    },

    /// Simulated backend failure
    #[error("remote operation failed: {0}")]
    Remote(#[from] RemoteError),

    /// Illegal flow transition
    #[error("flow error: {0}")]
    Flow(#[from] FlowError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl NavigatorError {
    /// Check if the caller may retry the same operation
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::PaymentFailed { .. } => true,
            Self::Remote(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Check if the error is meant to be shown to the user as-is
    #[inline]
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            Self::EmptyWallet | Self::NotConnected | Self::PaymentFailed { .. } | Self::Remote(_)
        )
    }
}

/// Failures of the simulated backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Backend reported a failure
    #[error("{operation} failed: {message}")]
    Failed {
        /// Operation name
        operation: &'static str,
        /// Failure detail
        message: String,
    },

    /// Backend unreachable
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
}

impl RemoteError {
    /// Create a failure for an operation
    #[inline]
    pub fn failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Failed {
            operation,
            message: message.into(),
        }
    }

    /// Name of the operation that failed
    #[inline]
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Failed { operation, .. } | Self::Unavailable(operation) => operation,
        }
    }

    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Illegal state machine transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// Guided flow transition not allowed
    #[error("illegal {kind} flow transition: {from:?} -> {to:?}")]
    IllegalTransition {
        /// Which flow
        kind: FlowKind,
        /// Current state
        from: FlowState,
        /// Requested state
        to: FlowState,
    },

    /// Payment transition not allowed
    #[error("illegal payment transition: {from:?} -> {to:?}")]
    IllegalPaymentTransition {
        /// Current status
        from: PaymentStatus,
        /// Requested status
        to: PaymentStatus,
    },

    /// A flow is already running
    #[error("{0} flow is already in progress")]
    AlreadyInProgress(FlowKind),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the file
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File was not valid TOML for the config schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Result alias for navigator operations
pub type Result<T, E = NavigatorError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigator_error_display() {
        let err = NavigatorError::UnknownService("catalyst".to_string());
        assert!(err.to_string().contains("unknown service"));

        let err = NavigatorError::ServiceLocked(ServiceId::RoadmapGeneration);
        assert_eq!(err.to_string(), "service roadmap-generation has not been unlocked");
    }

    #[test]
    fn navigator_error_is_retryable() {
        let payment = NavigatorError::PaymentFailed {
            service: ServiceId::SkillsAssessment,
            reason: "declined".to_string(),
        };
        assert!(payment.is_retryable());
        assert!(NavigatorError::from(RemoteError::Unavailable("analyze_wallet")).is_retryable());
        assert!(!NavigatorError::from(RemoteError::failed("analyze_wallet", "boom")).is_retryable());
        assert!(!NavigatorError::NotConnected.is_retryable());
    }

    #[test]
    fn navigator_error_user_visible() {
        assert!(NavigatorError::EmptyWallet.is_user_visible());
        assert!(!NavigatorError::AssessmentRequired.is_user_visible());
        let flow = FlowError::AlreadyInProgress(FlowKind::Assessment);
        assert!(!NavigatorError::from(flow).is_user_visible());
    }

    #[test]
    fn remote_error_operation() {
        let err = RemoteError::failed("record_progress", "ledger rejected");
        assert_eq!(err.operation(), "record_progress");
        assert_eq!(err.to_string(), "record_progress failed: ledger rejected");
    }
}
