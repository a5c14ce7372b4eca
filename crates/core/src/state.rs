// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bike_rent_domain::{
    AvailabilityWindows, BikeCategory, BikeSize, RentalPeriod, RentalQuote, quote,
};
use time::Date;

/// The editable fields of one in-progress booking request.
///
/// The request is owned exclusively by the booking view for its
/// lifetime. It is reset to defaults after a successful submission and
/// left untouched on failure. No field value is ever rejected here;
/// format constraints belong to the submission policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// Customer name, free text.
    pub name: String,
    /// Customer email, shape-checked only at submission time.
    pub email: String,
    /// Delivery address, free text.
    pub delivery_location: String,
    /// Requested rental period.
    pub period: RentalPeriod,
    /// Chosen frame size, if any.
    pub bike_size: Option<BikeSize>,
    /// Chosen bike category, if any.
    pub bike_category: Option<BikeCategory>,
    /// Whether a helmet and gloves should be included.
    pub helmet_and_gloves: bool,
    /// Whether the terms and conditions were accepted.
    pub terms_accepted: bool,
}

impl BookingRequest {
    /// Creates a request with default values: both rental dates set to
    /// `today`, every other field empty, unset or false.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            delivery_location: String::new(),
            period: RentalPeriod::single_day(today),
            bike_size: None,
            bike_category: None,
            helmet_and_gloves: false,
            terms_accepted: false,
        }
    }

    /// Resets every field back to the defaults of `new`.
    pub fn reset(&mut self, today: Date) {
        *self = Self::new(today);
    }

    /// Returns the quote for the current period and category.
    ///
    /// Delegates to the pricing calculator. The zero quote signals
    /// insufficient input, not an error.
    #[must_use]
    pub fn current_quote(&self) -> RentalQuote {
        quote(&self.period, self.bike_category)
    }

    /// Returns whether a submit action may fire.
    ///
    /// True only when the terms are accepted and no submission is in
    /// flight. Required-field completeness is the submission policy's
    /// concern, not this predicate's.
    #[must_use]
    pub const fn is_submittable(&self, submission_in_flight: bool) -> bool {
        self.terms_accepted && !submission_in_flight
    }
}

/// The editable fields of one in-progress bike listing.
///
/// Owned exclusively by the listing-intake form. Like the booking
/// request, it accepts any value during editing and defers format
/// checks to the submission policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    /// Owner name, free text.
    pub name: String,
    /// Owner email, shape-checked only at submission time.
    pub email: String,
    /// Where the bike is located, free text.
    pub bike_location: String,
    /// The listed bike's category, if chosen.
    pub bike_category: Option<BikeCategory>,
    /// The listed bike's frame size, if chosen.
    pub bike_size: Option<BikeSize>,
    /// The listed bike's model year, if chosen.
    pub bike_year: Option<u16>,
    /// When the bike is available for rent.
    pub windows: AvailabilityWindows,
    /// The owner's asking fee per rental day.
    pub rental_fee_per_day: Option<f64>,
    /// Whether the listing terms were accepted.
    pub terms_accepted: bool,
}

impl ListingRequest {
    /// Creates a listing with default values: one availability window
    /// covering `today`, every other field empty, unset or false.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            bike_location: String::new(),
            bike_category: None,
            bike_size: None,
            bike_year: None,
            windows: AvailabilityWindows::new(today),
            rental_fee_per_day: None,
            terms_accepted: false,
        }
    }

    /// Resets every field back to the defaults of `new`.
    pub fn reset(&mut self, today: Date) {
        *self = Self::new(today);
    }

    /// Returns whether a submit action may fire.
    #[must_use]
    pub const fn is_submittable(&self, submission_in_flight: bool) -> bool {
        self.terms_accepted && !submission_in_flight
    }
}

/// The result of applying one edit to a booking request.
///
/// Every edit carries the quote derived from the new state, so the
/// displayed price can never lag the visible field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTransition {
    /// The request after the edit.
    pub new_state: BookingRequest,
    /// The quote recomputed from the new request.
    pub quote: RentalQuote,
}
