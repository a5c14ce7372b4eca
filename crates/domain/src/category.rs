// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bike catalog categories and frame sizes.
//!
//! Each category carries a fixed per-day rate. Rates change only with a
//! release, never at runtime.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of rentable bike categories.
///
/// The serialized form is the customer-facing label, which is also the
/// wire representation expected by the intake service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BikeCategory {
    /// Front-suspension mountain bike.
    #[serde(rename = "Hardtail")]
    Hardtail,
    /// Full-suspension cross-country bike.
    #[serde(rename = "Full suspension: Cross Country")]
    CrossCountry,
    /// Full-suspension trail / enduro bike.
    #[serde(rename = "Full Suspension: Trail / Enduro")]
    TrailEnduro,
    /// Full-suspension electric mountain bike.
    #[serde(rename = "Full Suspension: eBike")]
    EBike,
}

impl BikeCategory {
    /// All categories in catalog display order.
    pub const ALL: [Self; 4] = [
        Self::Hardtail,
        Self::CrossCountry,
        Self::TrailEnduro,
        Self::EBike,
    ];

    /// Returns the short token for the category.
    ///
    /// This is used for CLI parsing and log output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hardtail => "hardtail",
            Self::CrossCountry => "cross-country",
            Self::TrailEnduro => "trail-enduro",
            Self::EBike => "ebike",
        }
    }

    /// Returns the customer-facing catalog label.
    ///
    /// The label doubles as the wire form of the category.
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Hardtail => "Hardtail",
            Self::CrossCountry => "Full suspension: Cross Country",
            Self::TrailEnduro => "Full Suspension: Trail / Enduro",
            Self::EBike => "Full Suspension: eBike",
        }
    }

    /// Returns the catalog price label for the category.
    #[must_use]
    pub const fn price_label(&self) -> &'static str {
        match self {
            Self::Hardtail => "€35 / day",
            Self::CrossCountry | Self::TrailEnduro => "€45 / day",
            Self::EBike => "€60 / day",
        }
    }

    /// Returns the rental rate per day in euro cents.
    #[must_use]
    pub const fn daily_rate_cents(&self) -> u64 {
        match self {
            Self::Hardtail => 3500,
            Self::CrossCountry | Self::TrailEnduro => 4500,
            Self::EBike => 6000,
        }
    }

    /// Parses a category from its short token or catalog label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBikeCategory` if the string matches
    /// neither form of any category.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "hardtail" | "Hardtail" => Ok(Self::Hardtail),
            "cross-country" | "Full suspension: Cross Country" => Ok(Self::CrossCountry),
            "trail-enduro" | "Full Suspension: Trail / Enduro" => Ok(Self::TrailEnduro),
            "ebike" | "Full Suspension: eBike" => Ok(Self::EBike),
            _ => Err(DomainError::InvalidBikeCategory {
                category: s.to_string(),
            }),
        }
    }
}

impl FromStr for BikeCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BikeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bike frame sizes offered by the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BikeSize {
    /// Small frame.
    S,
    /// Medium frame.
    M,
    /// Large frame.
    L,
    /// Extra-large frame.
    XL,
}

impl BikeSize {
    /// Returns the string representation of the size.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
        }
    }

    /// Parses a size from its string representation, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBikeSize` if the string is not a size.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "S" | "s" => Ok(Self::S),
            "M" | "m" => Ok(Self::M),
            "L" | "l" => Ok(Self::L),
            "XL" | "xl" => Ok(Self::XL),
            _ => Err(DomainError::InvalidBikeSize { size: s.to_string() }),
        }
    }
}

impl FromStr for BikeSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BikeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_token_round_trip() {
        for category in BikeCategory::ALL {
            let s = category.as_str();
            match BikeCategory::parse_str(s) {
                Ok(parsed) => assert_eq!(category, parsed),
                Err(e) => panic!("Failed to parse category token: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in BikeCategory::ALL {
            let label = category.display_label();
            match BikeCategory::parse_str(label) {
                Ok(parsed) => assert_eq!(category, parsed),
                Err(e) => panic!("Failed to parse category label: {label}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_category_string() {
        let result = BikeCategory::parse_str("unicycle");
        assert!(result.is_err());
    }

    #[test]
    fn test_daily_rates() {
        assert_eq!(BikeCategory::Hardtail.daily_rate_cents(), 3500);
        assert_eq!(BikeCategory::CrossCountry.daily_rate_cents(), 4500);
        assert_eq!(BikeCategory::TrailEnduro.daily_rate_cents(), 4500);
        assert_eq!(BikeCategory::EBike.daily_rate_cents(), 6000);
    }

    #[test]
    fn test_size_parsing_case_insensitive() {
        assert_eq!("xl".parse::<BikeSize>().ok(), Some(BikeSize::XL));
        assert_eq!("M".parse::<BikeSize>().ok(), Some(BikeSize::M));
        assert!("XXL".parse::<BikeSize>().is_err());
    }
}
