// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bike_rent_domain::BikeCategory;
use std::sync::Mutex;

/// Single-slot carrier for the category picked in the catalog.
///
/// The catalog writes the chosen category and the booking form takes
/// it. Taking empties the slot, so a value is delivered at most once
/// per write; a later write replaces whatever is still pending.
#[derive(Debug, Default)]
pub struct SelectionHandoff {
    slot: Mutex<Option<BikeCategory>>,
}

impl SelectionHandoff {
    /// Creates an empty handoff.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `category`, replacing any value not yet taken.
    pub fn write(&self, category: BikeCategory) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(category);
    }

    /// Removes and returns the pending category, if any.
    ///
    /// A second take without an intervening write returns `None`.
    #[must_use]
    pub fn take(&self) -> Option<BikeCategory> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.take()
    }
}
