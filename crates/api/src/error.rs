// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::submission_policy::SubmissionPolicyError;
use bike_rent::CoreError;
use bike_rent_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The submission policy rejected the request.
    PolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// The submission lifecycle refused a phase change.
    LifecycleViolation {
        /// A human-readable description of the refusal.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::PolicyViolation { message } => {
                write!(f, "Submission policy violation: {message}")
            }
            Self::LifecycleViolation { message } => {
                write!(f, "Submission lifecycle violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<SubmissionPolicyError> for ApiError {
    fn from(err: SubmissionPolicyError) -> Self {
        Self::PolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidBikeCategory { category } => ApiError::InvalidInput {
            field: String::from("bike type"),
            message: format!("'{category}' is not a bike type in the catalog"),
        },
        DomainError::InvalidBikeSize { size } => ApiError::InvalidInput {
            field: String::from("bike size"),
            message: format!("'{size}' is not an offered frame size"),
        },
        DomainError::InvalidDiscountTier { tier } => ApiError::InvalidInput {
            field: String::from("discount tier"),
            message: format!("'{tier}' is not a discount tier"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidPhaseTransition { from, to, reason } => ApiError::LifecycleViolation {
            message: format!("Cannot move the submission from {from} to {to}: {reason}"),
        },
    }
}
