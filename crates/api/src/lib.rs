// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod payload;
mod submission_policy;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use payload::{BookingSubmission, ListingSubmission, SubmissionWindow};
pub use submission_policy::{ListingPolicy, SubmissionPolicyError, validate_booking};
