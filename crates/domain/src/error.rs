// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur in the rental domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bike category string does not name a catalog category.
    InvalidBikeCategory {
        /// The unrecognized category string.
        category: String,
    },
    /// Bike size string does not name an offered frame size.
    InvalidBikeSize {
        /// The unrecognized size string.
        size: String,
    },
    /// Discount tier string does not name a tier.
    InvalidDiscountTier {
        /// The unrecognized tier string.
        tier: String,
    },
    /// Failed to parse a calendar date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBikeCategory { category } => {
                write!(f, "Invalid bike category: '{category}'")
            }
            Self::InvalidBikeSize { size } => write!(f, "Invalid bike size: '{size}'"),
            Self::InvalidDiscountTier { tier } => write!(f, "Invalid discount tier: '{tier}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
