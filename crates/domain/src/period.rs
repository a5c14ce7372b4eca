// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rental periods and listing availability windows.
//!
//! All dates are compared at day granularity. Periods may be incomplete
//! while a form is being filled in; availability windows always carry
//! both endpoints.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// date in that form.
pub fn parse_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s, time::macros::format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: s.to_string(),
            error: e.to_string(),
        }
    })
}

/// The rental period of an in-progress booking request.
///
/// Either endpoint may be unset while the form is incomplete. Once both
/// are confirmed the editing surface keeps `end >= start`; the pricing
/// calculator treats an inverted pair as unpriceable rather than invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPeriod {
    /// First rental day, inclusive.
    pub start: Option<Date>,
    /// Last rental day, inclusive.
    pub end: Option<Date>,
}

impl RentalPeriod {
    /// Creates a period covering a single day.
    #[must_use]
    pub const fn single_day(date: Date) -> Self {
        Self {
            start: Some(date),
            end: Some(date),
        }
    }
}

/// One date range during which a listed bike is offered for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// First available day, inclusive.
    pub start: Date,
    /// Last available day, inclusive.
    pub end: Date,
}

impl AvailabilityWindow {
    /// Creates a window covering a single day.
    #[must_use]
    pub const fn single_day(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }
}

/// Which endpoint of an availability window an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowField {
    /// The first day of the window.
    Start,
    /// The last day of the window.
    End,
}

/// Ordered list of availability windows for one listing.
///
/// Insertion order is display order. The list never shrinks below one
/// window; removing the last remaining window is ignored here rather
/// than delegated to callers. Windows are independent of each other, so
/// edits never re-validate cross-window ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityWindows {
    windows: Vec<AvailabilityWindow>,
}

impl AvailabilityWindows {
    /// Creates a list holding one window that covers `today` only.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            windows: vec![AvailabilityWindow::single_day(today)],
        }
    }

    /// Appends a new window defaulted to `today` for both endpoints.
    pub fn add(&mut self, today: Date) {
        self.windows.push(AvailabilityWindow::single_day(today));
    }

    /// Removes the window at `index`.
    ///
    /// Ignored when only one window remains or when `index` is out of
    /// range. Windows after `index` shift down by one position.
    pub fn remove_at(&mut self, index: usize) {
        if self.windows.len() > 1 && index < self.windows.len() {
            self.windows.remove(index);
        }
    }

    /// Replaces one endpoint of the window at `index`.
    ///
    /// Only the named field changes; all other windows and fields are
    /// untouched. Out-of-range indices are ignored.
    pub fn set_field(&mut self, index: usize, field: WindowField, date: Date) {
        if let Some(window) = self.windows.get_mut(index) {
            match field {
                WindowField::Start => window.start = date,
                WindowField::End => window.end = date,
            }
        }
    }

    /// Returns the number of windows, always at least 1.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns true if the list holds no windows.
    ///
    /// Construction and removal keep at least one window, so this is
    /// false for any list built through this type.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Returns the windows in display order.
    #[must_use]
    pub const fn as_slice(&self) -> &[AvailabilityWindow] {
        self.windows.as_slice()
    }
}
