// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bike_rent_domain::{BikeCategory, BikeSize, WindowField};
use time::Date;

/// A single field edit of a booking request, as data only.
///
/// Edits are blind assignments and are never rejected; checkbox-backed
/// fields carry booleans, everything else carries the raw replacement
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEdit {
    /// Replace the customer name.
    SetName {
        /// The new name value.
        name: String,
    },
    /// Replace the customer email.
    SetEmail {
        /// The new email value.
        email: String,
    },
    /// Replace the delivery address.
    SetDeliveryLocation {
        /// The new address value.
        location: String,
    },
    /// Replace the rental start date.
    SetStartDate {
        /// The new start date, or `None` to clear it.
        date: Option<Date>,
    },
    /// Replace the rental end date.
    SetEndDate {
        /// The new end date, or `None` to clear it.
        date: Option<Date>,
    },
    /// Replace the chosen frame size.
    SetBikeSize {
        /// The new size, or `None` to clear the choice.
        size: Option<BikeSize>,
    },
    /// Replace the chosen bike category.
    SetBikeCategory {
        /// The new category, or `None` to clear the choice.
        category: Option<BikeCategory>,
    },
    /// Toggle whether a helmet and gloves should be included.
    SetHelmetAndGloves {
        /// The checkbox value.
        enabled: bool,
    },
    /// Toggle acceptance of the terms and conditions.
    SetTermsAccepted {
        /// The checkbox value.
        accepted: bool,
    },
}

/// A single field edit of a bike listing, as data only.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingEdit {
    /// Replace the owner name.
    SetName {
        /// The new name value.
        name: String,
    },
    /// Replace the owner email.
    SetEmail {
        /// The new email value.
        email: String,
    },
    /// Replace the bike's location.
    SetBikeLocation {
        /// The new location value.
        location: String,
    },
    /// Replace the listed category.
    SetBikeCategory {
        /// The new category, or `None` to clear the choice.
        category: Option<BikeCategory>,
    },
    /// Replace the listed frame size.
    SetBikeSize {
        /// The new size, or `None` to clear the choice.
        size: Option<BikeSize>,
    },
    /// Replace the listed model year.
    SetBikeYear {
        /// The new year, or `None` to clear the choice.
        year: Option<u16>,
    },
    /// Replace the asking fee per rental day.
    SetRentalFee {
        /// The new fee, or `None` to clear it.
        fee: Option<f64>,
    },
    /// Toggle acceptance of the listing terms.
    SetTermsAccepted {
        /// The checkbox value.
        accepted: bool,
    },
    /// Append a new availability window covering `today`.
    AddWindow {
        /// The current date for the default window endpoints.
        today: Date,
    },
    /// Remove the availability window at `index`.
    ///
    /// Ignored for the last remaining window and for out-of-range
    /// indices; the window list enforces its own length invariant.
    RemoveWindow {
        /// The positional index of the window to remove.
        index: usize,
    },
    /// Replace one endpoint of the availability window at `index`.
    SetWindowField {
        /// The positional index of the window to edit.
        index: usize,
        /// Which endpoint to replace.
        field: WindowField,
        /// The new date value.
        date: Date,
    },
}
