// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use bike_rent::{BookingRequest, ListingRequest};
use bike_rent_domain::{BikeCategory, BikeSize};
use time::{Date, Month};

pub fn june(day: u8) -> Date {
    Date::from_calendar_date(2024, Month::June, day).unwrap()
}

pub fn create_submittable_booking() -> BookingRequest {
    let mut request: BookingRequest = BookingRequest::new(june(1));
    request.name = String::from("Jane Roe");
    request.email = String::from("jane@example.com");
    request.delivery_location = String::from("12 Kloof Street, Cape Town");
    request.period.start = Some(june(1));
    request.period.end = Some(june(7));
    request.bike_size = Some(BikeSize::M);
    request.bike_category = Some(BikeCategory::CrossCountry);
    request.helmet_and_gloves = true;
    request.terms_accepted = true;
    request
}

pub fn create_submittable_listing() -> ListingRequest {
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
