// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission payload data transfer objects.
//!
//! These DTOs are the intake service's wire contract. Field names follow
//! the service's `camelCase` convention, dates travel as `YYYY-MM-DD`
//! strings and the bike type travels as its catalog label.

use crate::error::ApiError;
use bike_rent::{BookingRequest, ListingRequest};
use bike_rent_domain::{BikeCategory, BikeSize, RentalQuote};
use time::Date;

/// A booking request in the form the intake service accepts.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Delivery address.
    pub delivery_location: String,
    /// First rental day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last rental day, `YYYY-MM-DD`.
    pub end_date: String,
    /// Chosen frame size.
    pub bike_size: String,
    /// Chosen bike category, as its catalog label.
    pub bike_type: String,
    /// Whether a helmet and gloves are included.
    pub helmet_and_gloves: bool,
    /// Whether the terms were accepted.
    pub terms_accepted: bool,
    /// Quoted total in euros.
    pub total_price: f64,
    /// Quoted total as the customer-facing string.
    pub total_booking_price_formatted: String,
    /// Number of rental days the quote covers.
    pub days: u32,
    /// Submission timestamp, ISO 8601.
    pub submitted_at: String,
}

impl BookingSubmission {
    /// Builds the wire payload from a booking request and its quote.
    ///
    /// # Arguments
    ///
    /// * `request` - The booking request to submit
    /// * `quote` - The quote derived from the request
    /// * `submitted_at` - The submission timestamp, ISO 8601
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if a field the wire contract
    /// requires is still unset. The submission policy checks these
    /// ahead of time, so a failure here means the caller skipped it.
    pub fn from_request(
        request: &BookingRequest,
        quote: &RentalQuote,
        submitted_at: String,
    ) -> Result<Self, ApiError> {
        let start: Date = request.period.start.ok_or_else(|| missing("start date"))?;
        let end: Date = request.period.end.ok_or_else(|| missing("end date"))?;
        let size: BikeSize = request.bike_size.ok_or_else(|| missing("bike size"))?;
        let category: BikeCategory = request.bike_category.ok_or_else(|| missing("bike type"))?;

        Ok(Self {
            name: request.name.clone(),
            email: request.email.clone(),
            delivery_location: request.delivery_location.clone(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            bike_size: size.as_str().to_string(),
            bike_type: category.display_label().to_string(),
            helmet_and_gloves: request.helmet_and_gloves,
            terms_accepted: request.terms_accepted,
            total_price: quote.total_euros(),
            total_booking_price_formatted: quote.formatted_total(),
            days: quote.days,
            submitted_at,
        })
    }
}

/// One availability window in the form the intake service accepts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionWindow {
    /// First available day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last available day, `YYYY-MM-DD`.
    pub end_date: String,
}

/// A bike listing in the form the intake service accepts.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSubmission {
    /// Owner name.
    pub name: String,
    /// Owner email.
    pub email: String,
    /// Where the bike is located.
    pub bike_location: String,
    /// Listed bike category, as its catalog label.
    pub bike_type: String,
    /// Listed frame size.
    pub bike_size: String,
    /// Listed model year.
    pub bike_year: u16,
    /// Windows during which the bike is available.
    pub availability_dates: Vec<SubmissionWindow>,
    /// Asking fee per rental day.
    pub rental_fee_per_day: f64,
    /// Whether the listing terms were accepted.
    pub terms_accepted: bool,
    /// Submission timestamp, ISO 8601.
    pub submitted_at: String,
}

impl ListingSubmission {
    /// Builds the wire payload from a bike listing.
    ///
    /// # Arguments
    ///
    /// * `listing` - The listing to submit
    /// * `submitted_at` - The submission timestamp, ISO 8601
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if a field the wire contract
    /// requires is still unset. The submission policy checks these
    /// ahead of time, so a failure here means the caller skipped it.
    pub fn from_request(listing: &ListingRequest, submitted_at: String) -> Result<Self, ApiError> {
        let category: BikeCategory = listing.bike_category.ok_or_else(|| missing("bike type"))?;
        let size: BikeSize = listing.bike_size.ok_or_else(|| missing("bike size"))?;
        let year: u16 = listing.bike_year.ok_or_else(|| missing("bike year"))?;
        let fee: f64 = listing
            .rental_fee_per_day
            .ok_or_else(|| missing("rental fee per day"))?;

        let availability_dates: Vec<SubmissionWindow> = listing
            .windows
            .as_slice()
            .iter()
            .map(|window| SubmissionWindow {
                start_date: window.start.to_string(),
                end_date: window.end.to_string(),
            })
            .collect();

        Ok(Self {
            name: listing.name.clone(),
            email: listing.email.clone(),
            bike_location: listing.bike_location.clone(),
            bike_type: category.display_label().to_string(),
            bike_size: size.as_str().to_string(),
            bike_year: year,
            availability_dates,
            rental_fee_per_day: fee,
            terms_accepted: listing.terms_accepted,
            submitted_at,
        })
    }
}

fn missing(field: &str) -> ApiError {
    ApiError::InvalidInput {
        field: String::from(field),
        message: String::from("a value is required for submission"),
    }
}
