// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion tracking for delivered bookings.

use thiserror::Error;

/// Errors from conversion tracking.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// The tracking backend did not accept the event.
    #[error("conversion tracking failed: {0}")]
    Delivery(String),
}

/// Reports successfully delivered bookings to an analytics backend.
///
/// Tracking is fire-and-forget: a lost conversion event must never
/// fail the booking, so callers swallow errors from this trait.
pub trait ConversionTracker: Send + Sync {
    /// Records one delivered booking submission.
    ///
    /// # Errors
    ///
    /// Returns `TrackingError` if the backend did not accept the event.
    fn record_booking(&self) -> Result<(), TrackingError>;
}

/// Tracker that drops every event.
///
/// Used when no analytics backend is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracker;

impl ConversionTracker for NoopTracker {
    fn record_booking(&self) -> Result<(), TrackingError> {
        Ok(())
    }
}
