// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{BookingEdit, ListingEdit};
use crate::state::{BookingRequest, BookingTransition, ListingRequest};
use bike_rent_domain::RentalQuote;

/// Applies a field edit to a booking request.
///
/// The current request is never mutated; the edit produces a new
/// request plus the quote derived from it. Recomputing the quote on
/// every edit keeps the displayed price synchronous with the fields,
/// including edits that cannot change it.
///
/// # Arguments
///
/// * `state` - The current booking request (immutable)
/// * `edit` - The field edit to apply
///
/// # Returns
///
/// A `BookingTransition` with the new request and its quote.
#[must_use]
pub fn apply_booking(state: &BookingRequest, edit: BookingEdit) -> BookingTransition {
    let mut new_state: BookingRequest = state.clone();

    match edit {
        BookingEdit::SetName { name } => new_state.name = name,
        BookingEdit::SetEmail { email } => new_state.email = email,
        BookingEdit::SetDeliveryLocation { location } => new_state.delivery_location = location,
        BookingEdit::SetStartDate { date } => new_state.period.start = date,
        BookingEdit::SetEndDate { date } => new_state.period.end = date,
        BookingEdit::SetBikeSize { size } => new_state.bike_size = size,
        BookingEdit::SetBikeCategory { category } => new_state.bike_category = category,
        BookingEdit::SetHelmetAndGloves { enabled } => new_state.helmet_and_gloves = enabled,
        BookingEdit::SetTermsAccepted { accepted } => new_state.terms_accepted = accepted,
    }

    let quote: RentalQuote = new_state.current_quote();

    BookingTransition { new_state, quote }
}

/// Applies a field edit to a bike listing.
///
/// The current listing is never mutated. Window edits delegate to the
/// availability list, which enforces its own minimum-length invariant
/// and ignores out-of-range indices.
///
/// # Arguments
///
/// * `state` - The current listing request (immutable)
/// * `edit` - The field edit to apply
///
/// # Returns
///
/// The new listing request.
#[must_use]
pub fn apply_listing(state: &ListingRequest, edit: ListingEdit) -> ListingRequest {
    let mut new_state: ListingRequest = state.clone();

    match edit {
        ListingEdit::SetName { name } => new_state.name = name,
        ListingEdit::SetEmail { email } => new_state.email = email,
        ListingEdit::SetBikeLocation { location } => new_state.bike_location = location,
        ListingEdit::SetBikeCategory { category } => new_state.bike_category = category,
        ListingEdit::SetBikeSize { size } => new_state.bike_size = size,
        ListingEdit::SetBikeYear { year } => new_state.bike_year = year,
        ListingEdit::SetRentalFee { fee } => new_state.rental_fee_per_day = fee,
        ListingEdit::SetTermsAccepted { accepted } => new_state.terms_accepted = accepted,
        ListingEdit::AddWindow { today } => new_state.windows.add(today),
        ListingEdit::RemoveWindow { index } => new_state.windows.remove_at(index),
        ListingEdit::SetWindowField { index, field, date } => {
            new_state.windows.set_field(index, field, date);
        }
    }

    new_state
}
