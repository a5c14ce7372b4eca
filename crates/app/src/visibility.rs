// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Visibility notifications for page sections.
//!
//! The editing surface announces when a section scrolls into or out of
//! the viewport. Views subscribe to react to their own section becoming
//! visible; the booking view uses this to re-read the catalog handoff.
//! Events are informational only and carry no data beyond the section
//! and direction, so a missed event is always recovered by the next one.

use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events to buffer per subscriber.
/// If a view cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 16;

/// A page section whose visibility is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The bike catalog section.
    Catalog,
    /// The booking form section.
    Booking,
}

/// A visibility change for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEvent {
    /// The section whose visibility changed.
    pub section: Section,
    /// Whether the section is now in the viewport.
    pub visible: bool,
}

/// Broadcaster for section visibility events.
///
/// This is a lightweight wrapper around `tokio::sync::broadcast` that
/// allows any number of views to observe visibility changes. A
/// subscription ends when its receiver is dropped.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    /// The broadcast channel sender.
    tx: broadcast::Sender<VisibilityEvent>,
}

impl VisibilityObserver {
    /// Creates a new visibility observer.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Announces that a section entered or left the viewport.
    ///
    /// If no view is subscribed, the event is silently dropped.
    /// This is non-blocking and will not wait for views to react.
    pub fn announce(&self, event: VisibilityEvent) {
        match self.tx.send(event) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast visibility event");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!(?event, "No receivers for visibility event");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Returns a receiver for all future events. Events announced
    /// before subscription are not received. Dropping the receiver
    /// releases the subscription.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<VisibilityEvent> {
        self.tx.subscribe()
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new()
    }
}
