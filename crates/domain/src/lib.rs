// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod category;
mod error;
mod period;
mod pricing;

pub use category::{BikeCategory, BikeSize};
pub use error::DomainError;
pub use period::{AvailabilityWindow, AvailabilityWindows, RentalPeriod, WindowField, parse_date};
pub use pricing::{DiscountTier, RentalQuote, quote};
