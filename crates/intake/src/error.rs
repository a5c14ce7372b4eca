// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for intake delivery.

use thiserror::Error;

/// Errors that can occur while delivering a submission.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The intake service answered with a non-success status.
    #[error("intake service rejected the submission with status {status}")]
    Rejected {
        /// The HTTP status code of the answer.
        status: u16,
    },

    /// The request never completed.
    #[error("network error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for IntakeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
