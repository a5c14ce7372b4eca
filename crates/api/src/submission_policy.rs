// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission policy validation.
//!
//! This module enforces the required-field and date rules a request
//! must satisfy before it is sent to the intake service. Editing never
//! rejects a value, so these checks run exactly once, at submit time.
//! Validation stops at the first violation.

use bike_rent::{BookingRequest, ListingRequest};
use thiserror::Error;
use time::Date;

/// Submission policy errors.
#[derive(Debug, Error, PartialEq)]
pub enum SubmissionPolicyError {
    /// A required field has no value.
    #[error("Required field '{field}' is missing")]
    MissingField { field: String },

    /// The email address does not look like an address.
    #[error("Email address '{email}' is not well formed")]
    MalformedEmail { email: String },

    /// The rental would start before today.
    #[error("Start date {start} is before today ({today})")]
    StartDateInPast { start: Date, today: Date },

    /// The rental would end before it starts.
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: Date, end: Date },

    /// The listed model year is outside the accepted range.
    #[error("Bike year {year} must be between {min} and {max}")]
    BikeYearOutOfRange { year: u16, min: u16, max: u16 },

    /// An availability window would start before today.
    #[error("Availability window {index} starts {start} before today ({today})")]
    WindowStartInPast {
        index: usize,
        start: Date,
        today: Date,
    },

    /// An availability window would end before it starts.
    #[error("Availability window {index} ends {end} before it starts ({start})")]
    WindowEndBeforeStart {
        index: usize,
        start: Date,
        end: Date,
    },

    /// The asking fee is negative.
    #[error("Rental fee {fee} must not be negative")]
    NegativeRentalFee { fee: f64 },

    /// The terms checkbox is not ticked.
    #[error("The terms and conditions must be accepted")]
    TermsNotAccepted,
}

/// Validates a booking request against the submission rules.
///
/// # Arguments
///
/// * `request` - The booking request to validate
/// * `today` - The current date, for the no-past-rental rule
///
/// # Errors
///
/// Returns the first `SubmissionPolicyError` the request violates.
pub fn validate_booking(
    request: &BookingRequest,
    today: Date,
) -> Result<(), SubmissionPolicyError> {
    require_text(&request.name, "name")?;
    require_text(&request.email, "email")?;
    validate_email(&request.email)?;
    require_text(&request.delivery_location, "delivery location")?;

    let start: Date = require_set(request.period.start, "start date")?;
    let end: Date = require_set(request.period.end, "end date")?;

    if start < today {
        return Err(SubmissionPolicyError::StartDateInPast { start, today });
    }
    if end < start {
        return Err(SubmissionPolicyError::EndBeforeStart { start, end });
    }

    require_set(request.bike_size, "bike size")?;
    require_set(request.bike_category, "bike type")?;

    if !request.terms_accepted {
        return Err(SubmissionPolicyError::TermsNotAccepted);
    }

    Ok(())
}

/// Listing policy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPolicy {
    /// Earliest accepted bike model year.
    pub min_bike_year: u16,
    /// Latest accepted bike model year.
    pub max_bike_year: u16,
}

impl Default for ListingPolicy {
    fn default() -> Self {
        Self {
            min_bike_year: 2019,
            max_bike_year: 2025,
        }
    }
}

impl ListingPolicy {
    /// Validates a bike listing against the submission rules.
    ///
    /// # Arguments
    ///
    /// * `listing` - The listing to validate
    /// * `today` - The current date, for the no-past-window rule
    ///
    /// # Errors
    ///
    /// Returns the first `SubmissionPolicyError` the listing violates.
    pub fn validate(
        &self,
        listing: &ListingRequest,
        today: Date,
    ) -> Result<(), SubmissionPolicyError> {
        require_text(&listing.name, "name")?;
        require_text(&listing.email, "email")?;
        validate_email(&listing.email)?;
        require_text(&listing.bike_location, "bike location")?;
        require_set(listing.bike_category, "bike type")?;
        require_set(listing.bike_size, "bike size")?;

        let year: u16 = require_set(listing.bike_year, "bike year")?;
        if !(self.min_bike_year..=self.max_bike_year).contains(&year) {
            return Err(SubmissionPolicyError::BikeYearOutOfRange {
                year,
                min: self.min_bike_year,
                max: self.max_bike_year,
            });
        }

        for (index, window) in listing.windows.as_slice().iter().enumerate() {
            if window.start < today {
                return Err(SubmissionPolicyError::WindowStartInPast {
                    index,
                    start: window.start,
                    today,
                });
            }
            if window.end < window.start {
                return Err(SubmissionPolicyError::WindowEndBeforeStart {
                    index,
                    start: window.start,
                    end: window.end,
                });
            }
        }

        let fee: f64 = require_set(listing.rental_fee_per_day, "rental fee per day")?;
        if fee < 0.0 {
            return Err(SubmissionPolicyError::NegativeRentalFee { fee });
        }

        if !listing.terms_accepted {
            return Err(SubmissionPolicyError::TermsNotAccepted);
        }

        Ok(())
    }
}

/// Checks that a free-text field holds something other than whitespace.
fn require_text(value: &str, field: &str) -> Result<(), SubmissionPolicyError> {
    if value.trim().is_empty() {
        return Err(SubmissionPolicyError::MissingField {
            field: String::from(field),
        });
    }
    Ok(())
}

/// Unwraps an optional field or reports it missing.
fn require_set<T>(value: Option<T>, field: &str) -> Result<T, SubmissionPolicyError> {
    value.ok_or_else(|| SubmissionPolicyError::MissingField {
        field: String::from(field),
    })
}

fn validate_email(email: &str) -> Result<(), SubmissionPolicyError> {
    if !is_well_formed_email(email) {
        return Err(SubmissionPolicyError::MalformedEmail {
            email: email.to_string(),
        });
    }
    Ok(())
}

/// Checks the minimal shape of an email address.
///
/// Exactly one `@`, a non-empty part on each side of it and no
/// whitespace anywhere. Anything stricter is the intake service's
/// business.
fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use bike_rent::{ListingEdit, apply_listing};
    use bike_rent_domain::{BikeCategory, BikeSize, WindowField};
    use time::{Date, Month};

    fn june(day: u8) -> Date {
        Date::from_calendar_date(2024, Month::June, day).unwrap()
    }

    fn valid_booking() -> BookingRequest {
        let mut request: BookingRequest = BookingRequest::new(june(1));
        request.name = String::from("Jane Roe");
        request.email = String::from("jane@example.com");
        request.delivery_location = String::from("12 Kloof Street, Cape Town");
        request.bike_size = Some(BikeSize::M);
        request.bike_category = Some(BikeCategory::Hardtail);
        request.terms_accepted = true;
        request
    }

    fn valid_listing() -> ListingRequest {
        let mut listing: ListingRequest = ListingRequest::new(june(1));
        listing.name = String::from("Sam Owner");
        listing.email = String::from("sam@example.com");
        listing.bike_location = String::from("Sea Point, Cape Town");
        listing.bike_category = Some(BikeCategory::EBike);
        listing.bike_size = Some(BikeSize::L);
        listing.bike_year = Some(2022);
        listing.rental_fee_per_day = Some(30.0);
        listing.terms_accepted = true;
        listing
    }

    #[test]
    fn test_valid_booking_passes() {
        let request: BookingRequest = valid_booking();

        assert!(validate_booking(&request, june(1)).is_ok());
    }

    #[test]
    fn test_blank_name_is_missing() {
        let mut request: BookingRequest = valid_booking();
        request.name = String::from("   ");

        let result: Result<(), SubmissionPolicyError> = validate_booking(&request, june(1));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::MissingField {
                field: String::from("name")
            })
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // Both the name and the email are bad; the name is reported.
        let mut request: BookingRequest = valid_booking();
        request.name = String::new();
        request.email = String::from("not-an-email");

        let result: Result<(), SubmissionPolicyError> = validate_booking(&request, june(1));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::MissingField {
                field: String::from("name")
            })
        );
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        let malformed: [&str; 5] = [
            "no-at-sign",
            "two@@example.com",
            "@example.com",
            "jane@",
            "jane doe@example.com",
        ];

        for email in malformed {
            let mut request: BookingRequest = valid_booking();
            request.email = String::from(email);

            let result: Result<(), SubmissionPolicyError> = validate_booking(&request, june(1));

            assert_eq!(
                result,
                Err(SubmissionPolicyError::MalformedEmail {
                    email: String::from(email)
                }),
                "expected '{email}' to be rejected"
            );
        }
    }

    #[test]
    fn test_missing_start_date() {
        let mut request: BookingRequest = valid_booking();
        request.period.start = None;

        let result: Result<(), SubmissionPolicyError> = validate_booking(&request, june(1));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::MissingField {
                field: String::from("start date")
            })
        );
    }

    #[test]
    fn test_start_date_in_past() {
        let request: BookingRequest = valid_booking();

        let result: Result<(), SubmissionPolicyError> = validate_booking(&request, june(5));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::StartDateInPast {
                start: june(1),
                today: june(5),
            })
        );
    }

    #[test]
    fn test_end_before_start() {
        let mut request: BookingRequest = valid_booking();
        request.period.start = Some(june(10));
        request.period.end = Some(june(4));

        let result: Result<(), SubmissionPolicyError> = validate_booking(&request, june(1));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::EndBeforeStart {
                start: june(10),
                end: june(4),
            })
        );
    }

    #[test]
    fn test_missing_bike_size() {
        let mut request: BookingRequest = valid_booking();
        request.bike_size = None;

        let result: Result<(), SubmissionPolicyError> = validate_booking(&request, june(1));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::MissingField {
                field: String::from("bike size")
            })
        );
    }

    #[test]
    fn test_terms_not_accepted() {
        let mut request: BookingRequest = valid_booking();
        request.terms_accepted = false;

        let result: Result<(), SubmissionPolicyError> = validate_booking(&request, june(1));

        assert_eq!(result, Err(SubmissionPolicyError::TermsNotAccepted));
    }

    #[test]
    fn test_valid_listing_passes() {
        let policy: ListingPolicy = ListingPolicy::default();
        let listing: ListingRequest = valid_listing();

        assert!(policy.validate(&listing, june(1)).is_ok());
    }

    #[test]
    fn test_bike_year_bounds() {
        let policy: ListingPolicy = ListingPolicy::default();

        for (year, accepted) in [(2018, false), (2019, true), (2025, true), (2026, false)] {
            let mut listing: ListingRequest = valid_listing();
            listing.bike_year = Some(year);

            let result: Result<(), SubmissionPolicyError> = policy.validate(&listing, june(1));

            assert_eq!(result.is_ok(), accepted, "year {year}");
        }
    }

    #[test]
    fn test_window_in_past_names_the_window() {
        let policy: ListingPolicy = ListingPolicy::default();
        let mut listing: ListingRequest = valid_listing();
        listing = apply_listing(&listing, ListingEdit::AddWindow { today: june(1) });
        listing = apply_listing(
            &listing,
            ListingEdit::SetWindowField {
                index: 1,
                field: WindowField::Start,
                date: june(3),
            },
        );

        let result: Result<(), SubmissionPolicyError> = policy.validate(&listing, june(5));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::WindowStartInPast {
                index: 0,
                start: june(1),
                today: june(5),
            })
        );
    }

    #[test]
    fn test_window_end_before_start() {
        let policy: ListingPolicy = ListingPolicy::default();
        let mut listing: ListingRequest = valid_listing();
        listing = apply_listing(
            &listing,
            ListingEdit::SetWindowField {
                index: 0,
                field: WindowField::Start,
                date: june(9),
            },
        );

        let result: Result<(), SubmissionPolicyError> = policy.validate(&listing, june(1));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::WindowEndBeforeStart {
                index: 0,
                start: june(9),
                end: june(1),
            })
        );
    }

    #[test]
    fn test_negative_fee_is_rejected() {
        let policy: ListingPolicy = ListingPolicy::default();
        let mut listing: ListingRequest = valid_listing();
        listing.rental_fee_per_day = Some(-5.0);

        let result: Result<(), SubmissionPolicyError> = policy.validate(&listing, june(1));

        assert_eq!(
            result,
            Err(SubmissionPolicyError::NegativeRentalFee { fee: -5.0 })
        );
    }

    #[test]
    fn test_zero_fee_is_accepted() {
        let policy: ListingPolicy = ListingPolicy::default();
        let mut listing: ListingRequest = valid_listing();
        listing.rental_fee_per_day = Some(0.0);

        assert!(policy.validate(&listing, june(1)).is_ok());
    }
}
