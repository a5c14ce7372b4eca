// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the intake wire payloads.

use crate::tests::helpers::{create_submittable_booking, create_submittable_listing, june};
use crate::{ApiError, BookingSubmission, ListingSubmission};
use bike_rent::{BookingRequest, ListingRequest};
use bike_rent_domain::RentalQuote;

#[test]
fn test_booking_payload_carries_request_and_quote() {
    let request: BookingRequest = create_submittable_booking();
    let quote: RentalQuote = request.current_quote();

    let payload: BookingSubmission = BookingSubmission::from_request(
        &request,
        &quote,
        String::from("2024-06-01T09:30:00.000000000Z"),
    )
    .unwrap();

    assert_eq!(payload.name, "Jane Roe");
    assert_eq!(payload.start_date, "2024-06-01");
    assert_eq!(payload.end_date, "2024-06-07");
    assert_eq!(payload.bike_size, "M");
    assert_eq!(payload.bike_type, "Full suspension: Cross Country");
    assert_eq!(payload.days, 7);
    assert!((payload.total_price - 267.75).abs() < f64::EPSILON);
    assert_eq!(payload.total_booking_price_formatted, "€267.75");
    assert!(payload.helmet_and_gloves);
    assert!(payload.terms_accepted);
}

#[test]
fn test_booking_payload_uses_wire_field_names() {
    let request: BookingRequest = create_submittable_booking();
    let quote: RentalQuote = request.current_quote();
    let payload: BookingSubmission = BookingSubmission::from_request(
        &request,
        &quote,
        String::from("2024-06-01T09:30:00.000000000Z"),
    )
    .unwrap();

    let value: serde_json::Value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "name",
        "email",
        "deliveryLocation",
        "startDate",
        "endDate",
        "bikeSize",
        "bikeType",
        "helmetAndGloves",
        "termsAccepted",
        "totalPrice",
        "totalBookingPriceFormatted",
        "days",
        "submittedAt",
    ] {
        assert!(object.contains_key(key), "missing wire field '{key}'");
    }
    assert_eq!(object.len(), 13);
}

#[test]
fn test_booking_payload_without_category_is_rejected() {
    let mut request: BookingRequest = create_submittable_booking();
    request.bike_category = None;
    let quote: RentalQuote = request.current_quote();

    let result: Result<BookingSubmission, ApiError> =
        BookingSubmission::from_request(&request, &quote, String::from("2024-06-01T09:30:00Z"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "bike type"
    ));
}

#[test]
fn test_listing_payload_carries_windows_in_order() {
    let mut listing: ListingRequest = create_submittable_listing();
    listing.windows.add(june(9));
    listing.windows.set_field(1, bike_rent_domain::WindowField::End, june(14));

    let payload: ListingSubmission =
        ListingSubmission::from_request(&listing, String::from("2024-06-01T09:30:00Z")).unwrap();

    assert_eq!(payload.availability_dates.len(), 2);
    assert_eq!(payload.availability_dates[0].start_date, "2024-06-01");
    assert_eq!(payload.availability_dates[0].end_date, "2024-06-01");
    assert_eq!(payload.availability_dates[1].start_date, "2024-06-09");
    assert_eq!(payload.availability_dates[1].end_date, "2024-06-14");
}

#[test]
fn test_listing_payload_uses_wire_field_names() {
    let listing: ListingRequest = create_submittable_listing();
    let payload: ListingSubmission =
        ListingSubmission::from_request(&listing, String::from("2024-06-01T09:30:00Z")).unwrap();

    let value: serde_json::Value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "name",
        "email",
        "bikeLocation",
        "bikeType",
        "bikeSize",
        "bikeYear",
        "availabilityDates",
        "rentalFeePerDay",
        "termsAccepted",
        "submittedAt",
    ] {
        assert!(object.contains_key(key), "missing wire field '{key}'");
    }

    let windows = object["availabilityDates"].as_array().unwrap();
    assert!(windows[0].as_object().unwrap().contains_key("startDate"));
    assert!(windows[0].as_object().unwrap().contains_key("endDate"));
    assert_eq!(object["bikeYear"], serde_json::json!(2022));
}

#[test]
fn test_listing_payload_without_fee_is_rejected() {
    let mut listing: ListingRequest = create_submittable_listing();
    listing.rental_fee_per_day = None;

    let result: Result<ListingSubmission, ApiError> =
        ListingSubmission::from_request(&listing, String::from("2024-06-01T09:30:00Z"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "rental fee per day"
    ));
}
