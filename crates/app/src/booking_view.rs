// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking form view.
//!
//! The view owns one in-progress booking request for its lifetime. It
//! reads the catalog handoff once on mount and again whenever the
//! booking section becomes visible; both reads are destructive, so a
//! re-fire of the visibility notice cannot deliver a choice twice.
//! Dropping the view releases its visibility subscription.

use crate::visibility::{Section, VisibilityEvent, VisibilityObserver};
use crate::workflow::{BookingOutcome, SubmissionWorkflow};
use bike_rent::{BookingEdit, BookingRequest, BookingTransition, SelectionHandoff, apply_booking};
use bike_rent_api::ApiError;
use bike_rent_domain::RentalQuote;
use std::sync::Arc;
use time::Date;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// The booking form with its live quote.
#[derive(Debug)]
pub struct BookingView {
    state: BookingRequest,
    quote: RentalQuote,
    handoff: Arc<SelectionHandoff>,
    visibility: broadcast::Receiver<VisibilityEvent>,
}

impl BookingView {
    /// Mounts the booking view.
    ///
    /// The request starts at its defaults with both dates on `today`.
    /// A category already waiting in the handoff is adopted before the
    /// view is returned.
    ///
    /// # Arguments
    ///
    /// * `today` - The current date, for the default rental period
    /// * `handoff` - The catalog handoff to read choices from
    /// * `observer` - The observer announcing section visibility
    #[must_use]
    pub fn mount(
        today: Date,
        handoff: Arc<SelectionHandoff>,
        observer: &VisibilityObserver,
    ) -> Self {
        let state: BookingRequest = BookingRequest::new(today);
        let quote: RentalQuote = state.current_quote();
        let mut view: Self = Self {
            state,
            quote,
            handoff,
            visibility: observer.subscribe(),
        };

        // Mount-time read; visibility events cover later re-reads.
        view.adopt_pending_selection();
        view
    }

    /// Applies one field edit and returns the recomputed quote.
    pub fn edit(&mut self, edit: BookingEdit) -> &RentalQuote {
        let transition: BookingTransition = apply_booking(&self.state, edit);
        self.state = transition.new_state;
        self.quote = transition.quote;
        &self.quote
    }

    /// Reacts to visibility events announced since the last poll.
    ///
    /// The handoff is re-read each time the booking section enters the
    /// viewport. An empty handoff makes the re-read a no-op, so stale
    /// or repeated notices are harmless.
    pub fn poll_visibility(&mut self) {
        loop {
            match self.visibility.try_recv() {
                Ok(event) => {
                    if event.section == Section::Booking && event.visible {
                        self.adopt_pending_selection();
                    }
                }
                Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                    // A visibility notice may be among the dropped
                    // events; the idempotent read makes catching up safe.
                    debug!(missed, "Visibility events dropped; re-reading handoff");
                    self.adopt_pending_selection();
                }
                Err(_) => break,
            }
        }
    }

    /// Submits the current request through the workflow.
    ///
    /// On delivery the request is reset and the quote recomputed for
    /// the fresh state. On failure both are left untouched.
    ///
    /// # Errors
    ///
    /// Returns the error of a submission that never fired: a policy
    /// violation, an incomplete payload or a submit while one is
    /// already in flight.
    pub async fn submit(
        &mut self,
        workflow: &mut SubmissionWorkflow,
        today: Date,
    ) -> Result<BookingOutcome, ApiError> {
        let outcome: BookingOutcome = workflow.submit(&mut self.state, today).await?;
        self.quote = self.state.current_quote();
        Ok(outcome)
    }

    /// Returns the current request.
    #[must_use]
    pub const fn state(&self) -> &BookingRequest {
        &self.state
    }

    /// Returns the quote for the current request.
    #[must_use]
    pub const fn quote(&self) -> &RentalQuote {
        &self.quote
    }

    fn adopt_pending_selection(&mut self) {
        let Some(category) = self.handoff.take() else {
            return;
        };

        // A choice matching the current field is not an overwrite, so a
        // stale delivery cannot clobber an in-progress manual edit.
        if self.state.bike_category == Some(category) {
            debug!(category = %category, "Handoff category already selected");
            return;
        }

        info!(category = %category, "Adopting category from catalog handoff");
        self.edit(BookingEdit::SetBikeCategory {
            category: Some(category),
        });
    }
}
