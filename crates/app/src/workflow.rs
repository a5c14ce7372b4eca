// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking submission workflow.
//!
//! Drives one booking request through the submission lifecycle: gate,
//! validate, deliver, record the outcome. A delivered booking holds its
//! success notice for a fixed display delay and then resets the request
//! to defaults; a failed one leaves the request untouched so the
//! customer can retry as-is.

use bike_rent::{BookingRequest, SubmissionPhase};
use bike_rent_api::{ApiError, BookingSubmission, translate_core_error, validate_booking};
use bike_rent_domain::RentalQuote;
use bike_rent_intake::{ConversionTracker, IntakeClient};
use std::sync::Arc;
use std::time::Duration;
use time::Date;
use tracing::{debug, info, warn};

/// How long the success notice stays up before the form resets.
pub(crate) const RESET_DISPLAY_DELAY: Duration = Duration::from_secs(5);

/// Detail line shown under the delivered notice.
pub const BOOKING_DELIVERED_DETAIL: &str =
    "Thank you for your booking request. We'll be in touch shortly with confirmation details.";

/// The outcome of a booking submission that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The booking was delivered and the form was reset.
    Delivered,
    /// Delivery failed; the form was left as it was.
    Failed,
}

impl BookingOutcome {
    /// The user-facing notice for this outcome.
    #[must_use]
    pub const fn notice(self) -> &'static str {
        match self {
            Self::Delivered => "Booking Submitted!",
            Self::Failed => "There was an error submitting your booking. Please try again.",
        }
    }
}

/// The booking submission state machine.
pub struct SubmissionWorkflow {
    phase: SubmissionPhase,
    client: IntakeClient,
    tracker: Option<Arc<dyn ConversionTracker>>,
    reset_delay: Duration,
}

impl SubmissionWorkflow {
    /// Creates an idle workflow delivering through `client`.
    #[must_use]
    pub const fn new(client: IntakeClient) -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            client,
            tracker: None,
            reset_delay: RESET_DISPLAY_DELAY,
        }
    }

    /// Attaches a conversion tracker for delivered bookings.
    #[must_use]
    pub fn with_tracker(mut self, tracker: Arc<dyn ConversionTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Overrides the success display delay.
    #[must_use]
    pub const fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Submits a booking request.
    ///
    /// The request is validated, serialized with its quote and a
    /// timestamp, and delivered. On delivery the request is reset to
    /// defaults after the display delay; on failure it is untouched and
    /// a fresh submit is required, there is no automatic retry.
    ///
    /// # Errors
    ///
    /// Returns an error when the submission never fires: the policy
    /// rejected the request, the payload was incomplete, or another
    /// submission is already in flight.
    pub async fn submit(
        &mut self,
        request: &mut BookingRequest,
        today: Date,
    ) -> Result<BookingOutcome, ApiError> {
        self.phase
            .validate_transition(SubmissionPhase::Submitting)
            .map_err(translate_core_error)?;
        validate_booking(request, today)?;

        let quote: RentalQuote = request.current_quote();
        let payload: BookingSubmission =
            BookingSubmission::from_request(request, &quote, submission_timestamp())?;

        self.advance(SubmissionPhase::Submitting)?;
        info!(
            days = quote.days,
            total = %quote.formatted_total(),
            "Submitting booking request"
        );

        match self.client.deliver_booking(&payload).await {
            Ok(()) => {
                self.advance(SubmissionPhase::Succeeded)?;
                info!("Booking submission delivered");
                self.record_conversion();

                // Hold the success notice, then reset for the next booking.
                tokio::time::sleep(self.reset_delay).await;
                request.reset(today);
                self.advance(SubmissionPhase::Idle)?;
                Ok(BookingOutcome::Delivered)
            }
            Err(e) => {
                warn!(error = %e, "Booking submission failed");
                self.advance(SubmissionPhase::Failed)?;
                self.advance(SubmissionPhase::Idle)?;
                Ok(BookingOutcome::Failed)
            }
        }
    }

    fn advance(&mut self, target: SubmissionPhase) -> Result<(), ApiError> {
        self.phase
            .validate_transition(target)
            .map_err(translate_core_error)?;
        debug!(from = %self.phase, to = %target, "Submission phase change");
        self.phase = target;
        Ok(())
    }

    fn record_conversion(&self) {
        let Some(tracker) = &self.tracker else {
            return;
        };

        if let Err(e) = tracker.record_booking() {
            // A lost conversion event never affects the booking.
            debug!(error = %e, "Conversion tracking failed; ignoring");
        }
    }
}

/// Returns the submission timestamp in ISO 8601 form.
pub(crate) fn submission_timestamp() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| String::from("unknown"))
}
