// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bike catalog shown to customers.

use bike_rent::SelectionHandoff;
use bike_rent_domain::BikeCategory;
use tracing::info;

/// One catalog entry shown to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The rentable category.
    pub category: BikeCategory,
    /// The customer-facing label.
    pub label: &'static str,
    /// The price line shown under the label.
    pub price_label: &'static str,
}

/// Returns the catalog in display order.
#[must_use]
pub fn entries() -> [CatalogEntry; 4] {
    BikeCategory::ALL.map(|category| CatalogEntry {
        category,
        label: category.display_label(),
        price_label: category.price_label(),
    })
}

/// Records a catalog choice for the booking view to pick up.
///
/// The booking view may not exist yet. The handoff holds the choice
/// until the view takes it.
pub fn choose(category: BikeCategory, handoff: &SelectionHandoff) {
    info!(category = %category, "Catalog choice recorded");
    handoff.write(category);
}
