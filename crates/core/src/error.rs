// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::submission::SubmissionPhase;

/// Errors from the booking state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A submission phase change the lifecycle does not permit.
    InvalidPhaseTransition {
        /// The phase the machine was in.
        from: SubmissionPhase,
        /// The phase the caller asked for.
        to: SubmissionPhase,
        /// Why the move was refused.
        reason: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPhaseTransition { from, to, reason } => {
                write!(f, "invalid submission transition {from} -> {to}: {reason}")
            }
        }
    }
}

impl std::error::Error for CoreError {}
