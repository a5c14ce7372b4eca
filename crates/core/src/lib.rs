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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod handoff;
mod state;
mod submission;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply_booking, apply_listing};
pub use command::{BookingEdit, ListingEdit};
pub use error::CoreError;
pub use handoff::SelectionHandoff;
pub use state::{BookingRequest, BookingTransition, ListingRequest};
pub use submission::SubmissionPhase;
