// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;

/// Lifecycle phase of a form submission.
///
/// A submission starts in `Idle`, moves to `Submitting` while the
/// request is in flight, lands in `Succeeded` or `Failed` on the
/// outcome, and returns to `Idle` when the outcome notice is cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// No submission is running and no outcome notice is showing.
    #[default]
    Idle,
    /// A submission request is in flight.
    Submitting,
    /// The last submission was delivered and acknowledged.
    Succeeded,
    /// The last submission could not be delivered.
    Failed,
}

impl SubmissionPhase {
    /// Returns the phase as a lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Whether a submission request is currently in flight.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the lifecycle permits moving from this phase to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Idle, Self::Submitting)
                | (Self::Submitting, Self::Succeeded | Self::Failed)
                | (Self::Succeeded | Self::Failed, Self::Idle)
        )
    }

    /// Checks a phase change against the lifecycle.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPhaseTransition` when the lifecycle
    /// does not permit the move. Asking to start a submission while one
    /// is already in flight is reported with its own reason so callers
    /// can surface the double-submit case distinctly.
    pub const fn validate_transition(self, target: Self) -> Result<(), CoreError> {
        if self.can_transition_to(target) {
            return Ok(());
        }

        let reason: &'static str = if matches!((self, target), (Self::Submitting, Self::Submitting))
        {
            "a submission is already in flight"
        } else {
            "transition not permitted by the submission lifecycle"
        };

        Err(CoreError::InvalidPhaseTransition {
            from: self,
            to: target,
            reason,
        })
    }
}

impl std::fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
