// SPDX-License-Identifier: MPL-2.0
//! Focus change notification.
//!
//! Hosts subscribe observers to learn which item is focused (for example to
//! update a caption). The registry is decoupled from rendering: the Iced
//! component calls [`FocusObservers::notify`] after every transition.

use super::state::FocusIndex;
use std::fmt;

/// Receives the new focus index after every transition.
pub trait FocusObserver {
    fn focus_changed(&mut self, focus: FocusIndex);
}

impl<F> FocusObserver for F
where
    F: FnMut(FocusIndex),
{
    fn focus_changed(&mut self, focus: FocusIndex) {
        self(focus);
    }
}

/// Handle returned by [`FocusObservers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered set of focus observers.
#[derive(Default)]
pub struct FocusObservers {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn FocusObserver + Send>)>,
}

impl FocusObservers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer; observers are notified in subscription order.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: FocusObserver + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, focus: FocusIndex) {
        for (_, observer) in &mut self.observers {
            observer.focus_changed(focus);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for FocusObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusObservers")
            .field("count", &self.observers.len())
            .finish()
    }
}
