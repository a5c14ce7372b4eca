// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bike listing flow.
//!
//! Owners describe a bike, its availability windows, and a daily rental
//! fee, then submit the listing for review. Edits apply unconditionally
//! and submission runs the same lifecycle as a booking: gate, validate,
//! deliver, reset on success.

use crate::workflow::{RESET_DISPLAY_DELAY, submission_timestamp};
use bike_rent::{ListingEdit, ListingRequest, SubmissionPhase, apply_listing};
use bike_rent_api::{ApiError, ListingPolicy, ListingSubmission, translate_core_error};
use bike_rent_intake::IntakeClient;
use std::time::Duration;
use time::Date;
use tracing::{debug, info, warn};

/// The outcome of a listing submission that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The listing was delivered and the form was reset.
    Delivered,
    /// Delivery failed; the form was left as it was.
    Failed,
}

impl ListingOutcome {
    /// The user-facing notice for this outcome.
    #[must_use]
    pub const fn notice(self) -> &'static str {
        match self {
            Self::Delivered => "Listing Submitted!",
            Self::Failed => "There was an error submitting your listing. Please try again.",
        }
    }
}

/// The listing form and its submission lifecycle.
pub struct ListingView {
    state: ListingRequest,
    phase: SubmissionPhase,
    policy: ListingPolicy,
    client: IntakeClient,
    reset_delay: Duration,
}

impl ListingView {
    /// Creates a fresh listing form for `today`.
    #[must_use]
    pub fn mount(today: Date, client: IntakeClient) -> Self {
        Self {
            state: ListingRequest::new(today),
            phase: SubmissionPhase::Idle,
            policy: ListingPolicy::default(),
            client,
            reset_delay: RESET_DISPLAY_DELAY,
        }
    }

    /// Overrides the listing acceptance policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ListingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Overrides the success display delay.
    #[must_use]
    pub const fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Applies one edit to the listing form.
    ///
    /// Edits always apply; problems surface at submission time.
    pub fn edit(&mut self, edit: ListingEdit) {
        self.state = apply_listing(&self.state, edit);
    }

    /// Returns the current form state.
    #[must_use]
    pub const fn state(&self) -> &ListingRequest {
        &self.state
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Whether the submit control is enabled right now.
    #[must_use]
    pub const fn is_submittable(&self) -> bool {
        self.state.is_submittable(self.phase.is_in_flight())
    }

    /// Submits the listing.
    ///
    /// On delivery the form is reset to defaults after the display
    /// delay; on failure it is untouched so the owner can retry as-is.
    ///
    /// # Errors
    ///
    /// Returns an error when the submission never fires: the policy
    /// rejected the listing, the payload was incomplete, or another
    /// submission is already in flight.
    pub async fn submit(&mut self, today: Date) -> Result<ListingOutcome, ApiError> {
        self.phase
            .validate_transition(SubmissionPhase::Submitting)
            .map_err(translate_core_error)?;
        self.policy.validate(&self.state, today)?;

        let payload: ListingSubmission =
            ListingSubmission::from_request(&self.state, submission_timestamp())?;

        self.advance(SubmissionPhase::Submitting)?;
        info!(windows = self.state.windows.len(), "Submitting bike listing");

        match self.client.deliver_listing(&payload).await {
            Ok(()) => {
                self.advance(SubmissionPhase::Succeeded)?;
                info!("Bike listing delivered");

                // Hold the success notice, then reset for the next listing.
                tokio::time::sleep(self.reset_delay).await;
                self.state.reset(today);
                self.advance(SubmissionPhase::Idle)?;
                Ok(ListingOutcome::Delivered)
            }
            Err(e) => {
                warn!(error = %e, "Bike listing submission failed");
                self.advance(SubmissionPhase::Failed)?;
                self.advance(SubmissionPhase::Idle)?;
                Ok(ListingOutcome::Failed)
            }
        }
    }

    fn advance(&mut self, target: SubmissionPhase) -> Result<(), ApiError> {
        self.phase
            .validate_transition(target)
            .map_err(translate_core_error)?;
        debug!(from = %self.phase, to = %target, "Listing phase change");
        self.phase = target;
        Ok(())
    }
}
