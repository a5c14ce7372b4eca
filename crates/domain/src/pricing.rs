// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rental quote calculation.
//!
//! This module derives a price from a rental period and bike category:
//! an inclusive day count, a length-based discount tier, and a total in
//! euro cents. The computation is pure and cheap enough to run on every
//! field edit.

use crate::category::BikeCategory;
use crate::error::DomainError;
use crate::period::RentalPeriod;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rentals longer than this many days earn the mid tier.
const MID_TIER_THRESHOLD_DAYS: u32 = 6;
/// Rentals longer than this many days earn the long tier.
const LONG_TIER_THRESHOLD_DAYS: u32 = 14;

/// Length-based discount tiers.
///
/// Tiers are mutually exclusive and selected on the day count alone;
/// the highest threshold that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// No discount: at most 6 rental days.
    None,
    /// 15% off: more than 6 and at most 14 rental days.
    Mid,
    /// 25% off: more than 14 rental days.
    Long,
}

impl DiscountTier {
    /// Selects the tier for a rental length in days.
    #[must_use]
    pub const fn for_days(days: u32) -> Self {
        if days > LONG_TIER_THRESHOLD_DAYS {
            Self::Long
        } else if days > MID_TIER_THRESHOLD_DAYS {
            Self::Mid
        } else {
            Self::None
        }
    }

    /// Returns the string representation of the tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mid => "mid",
            Self::Long => "long",
        }
    }

    /// Parses a tier from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDiscountTier` if the string is not a
    /// valid tier.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "none" => Ok(Self::None),
            "mid" => Ok(Self::Mid),
            "long" => Ok(Self::Long),
            _ => Err(DomainError::InvalidDiscountTier { tier: s.to_string() }),
        }
    }

    /// Returns the percentage taken off the base amount.
    #[must_use]
    pub const fn percent_off(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Mid => 15,
            Self::Long => 25,
        }
    }
}

impl FromStr for DiscountTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived pricing result for one rental configuration.
///
/// Quotes are recomputed from the current inputs, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalQuote {
    /// Rental length in days, inclusive of both endpoints.
    pub days: u32,
    /// The discount tier applied to the base amount.
    pub discount_tier: DiscountTier,
    /// Per-day rate in euro cents.
    pub unit_price_cents: u64,
    /// Discounted total in euro cents.
    pub total_cents: u64,
}

impl RentalQuote {
    /// The zero quote, produced when pricing inputs are incomplete or the
    /// date range is inverted.
    ///
    /// This is not an error; it signals "insufficient input to price" and
    /// keeps the price panel hidden until the inputs suffice.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            days: 0,
            discount_tier: DiscountTier::None,
            unit_price_cents: 0,
            total_cents: 0,
        }
    }

    /// Returns true when the quote carries no priceable input.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.days == 0
    }

    /// Returns the total in euros as a decimal number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn total_euros(&self) -> f64 {
        // Totals stay far below 2^53 cents, so the conversion is exact.
        self.total_cents as f64 / 100.0
    }

    /// Returns the total formatted for display, euro sign and two decimals.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format!("€{}.{:02}", self.total_cents / 100, self.total_cents % 100)
    }
}

/// Computes the quote for a rental period and category.
///
/// The range is inclusive of both endpoints: a same-day start and end
/// books one day.
///
/// # Arguments
///
/// * `period` - The requested rental period, possibly incomplete
/// * `category` - The chosen bike category, if any
///
/// # Returns
///
/// The derived quote, or the zero quote when the category is unset,
/// either date is missing, or the end date precedes the start date.
#[must_use]
pub fn quote(period: &RentalPeriod, category: Option<BikeCategory>) -> RentalQuote {
    let (Some(category), Some(start), Some(end)) = (category, period.start, period.end) else {
        return RentalQuote::zero();
    };

    if end < start {
        return RentalQuote::zero();
    }

    // end >= start here, so the difference is non-negative and stays far
    // inside u32 for any representable calendar date.
    let days: u32 = u32::try_from((end - start).whole_days() + 1).unwrap_or(u32::MAX);

    let unit_price_cents: u64 = category.daily_rate_cents();
    let base_cents: u64 = unit_price_cents * u64::from(days);
    let discount_tier: DiscountTier = DiscountTier::for_days(days);

    RentalQuote {
        days,
        discount_tier,
        unit_price_cents,
        total_cents: apply_discount(base_cents, discount_tier),
    }
}

/// Applies a tier to a base amount in cents, rounding half-up on the cent.
fn apply_discount(base_cents: u64, tier: DiscountTier) -> u64 {
    let keep_percent: u64 = 100 - u64::from(tier.percent_off());
    (base_cents * keep_percent + 50) / 100
}
