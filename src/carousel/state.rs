// SPDX-License-Identifier: MPL-2.0
//! Focus and rotation state machine.
//!
//! The carousel state is a small value replaced on every navigation step by
//! a pure reducer, [`CarouselState::apply`]. Any UI binding (button, key,
//! timer tick) funnels into the same transition.

use super::layout::ItemCount;

/// Index of the focused item, always in `0..N` for the carousel it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct FocusIndex(usize);

impl FocusIndex {
    /// The first item.
    pub const FIRST: Self = Self(0);

    /// Creates a focus index, returning `None` when out of range for `count`.
    #[must_use]
    pub fn new(index: usize, count: ItemCount) -> Option<Self> {
        (index < count.get()).then_some(Self(index))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Next index, wrapping to 0 after the last item.
    #[must_use]
    pub fn next(self, count: ItemCount) -> Self {
        Self((self.0 + 1) % count.get())
    }

    /// Previous index, wrapping to the last item before 0.
    #[must_use]
    pub fn previous(self, count: ItemCount) -> Self {
        let n = count.get();
        Self((self.0 + n - 1) % n)
    }
}

/// Navigation events accepted by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationEvent {
    /// Advance: ring turns clockwise by one step, focus moves to the next item.
    RotateRight,
    /// Retreat: ring turns counter-clockwise by one step, focus moves back.
    RotateLeft,
}

impl RotationEvent {
    /// The event undoing this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::RotateRight => Self::RotateLeft,
            Self::RotateLeft => Self::RotateRight,
        }
    }
}

/// Mutable carousel state.
///
/// # Example
///
/// ```
/// use iced_carousel::carousel::{CarouselState, ItemCount, RotationEvent};
///
/// let count = ItemCount::new(5).unwrap();
/// let state = CarouselState::default()
///     .apply(RotationEvent::RotateRight, count)
///     .apply(RotationEvent::RotateRight, count)
///     .apply(RotationEvent::RotateRight, count);
///
/// assert_eq!(state.focus_index().get(), 3);
/// assert_eq!(state.ring_rotation(), 216.0);
/// assert_eq!(state.item_counter_rotation(), -216.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselState {
    /// Accumulated ring rotation in degrees; never wrapped.
    ring_rotation: f32,
    /// Per-item rotation keeping content upright; always `-ring_rotation`.
    item_counter_rotation: f32,
    focus_index: FocusIndex,
}

impl CarouselState {
    #[must_use]
    pub fn ring_rotation(&self) -> f32 {
        self.ring_rotation
    }

    #[must_use]
    pub fn item_counter_rotation(&self) -> f32 {
        self.item_counter_rotation
    }

    #[must_use]
    pub fn focus_index(&self) -> FocusIndex {
        self.focus_index
    }

    /// Ring rotation folded into `[0, 360)`, for display purposes.
    #[must_use]
    pub fn ring_rotation_normalized(&self) -> f32 {
        self.ring_rotation.rem_euclid(360.0)
    }

    /// Returns the state after `event`.
    #[must_use]
    pub fn apply(self, event: RotationEvent, count: ItemCount) -> Self {
        let step = count.step_degrees();
        match event {
            RotationEvent::RotateRight => Self {
                ring_rotation: self.ring_rotation + step,
                item_counter_rotation: self.item_counter_rotation - step,
                focus_index: self.focus_index.next(count),
            },
            RotationEvent::RotateLeft => Self {
                ring_rotation: self.ring_rotation - step,
                item_counter_rotation: self.item_counter_rotation + step,
                focus_index: self.focus_index.previous(count),
            },
        }
    }

    /// Events moving focus to `target` along the shorter way round.
    ///
    /// Ties (exactly opposite items) go right. Returns an empty list when
    /// `target` is already focused or out of range.
    #[must_use]
    pub fn path_to(&self, target: usize, count: ItemCount) -> Vec<RotationEvent> {
        let n = count.get();
        if target >= n {
            return Vec::new();
        }

        let current = self.focus_index.get();
        let forward = (target + n - current) % n;
        let backward = (current + n - target) % n;

        if forward <= backward {
            vec![RotationEvent::RotateRight; forward]
        } else {
            vec![RotationEvent::RotateLeft; backward]
        }
    }

    /// Applies every event of [`Self::path_to`] in order.
    #[must_use]
    pub fn focus_to(self, target: usize, count: ItemCount) -> Self {
        self.path_to(target, count)
            .into_iter()
            .fold(self, |state, event| state.apply(event, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: usize) -> ItemCount {
        ItemCount::new(n).unwrap()
    }

    #[test]
    fn initial_state_is_all_zero() {
        let state = CarouselState::default();
        assert_eq!(state.ring_rotation(), 0.0);
        assert_eq!(state.item_counter_rotation(), 0.0);
        assert_eq!(state.focus_index(), FocusIndex::FIRST);
    }

    #[test]
    fn three_right_rotations_on_five_items() {
        let n = count(5);
        let state = (0..3).fold(CarouselState::default(), |s, _| {
            s.apply(RotationEvent::RotateRight, n)
        });
        assert_eq!(state.focus_index().get(), 3);
        assert_eq!(state.ring_rotation(), 216.0);
        assert_eq!(state.item_counter_rotation(), -216.0);
    }

    #[test]
    fn left_rotation_from_zero_wraps_to_last() {
        let state = CarouselState::default().apply(RotationEvent::RotateLeft, count(4));
        assert_eq!(state.focus_index().get(), 3);
        assert_eq!(state.ring_rotation(), -90.0);
        assert_eq!(state.item_counter_rotation(), 90.0);
    }

    #[test]
    fn right_then_left_round_trips() {
        for n in 1..=12 {
            let n = count(n);
            let start = CarouselState::default()
                .apply(RotationEvent::RotateRight, n)
                .apply(RotationEvent::RotateRight, n);
            let back = start
                .apply(RotationEvent::RotateRight, n)
                .apply(RotationEvent::RotateLeft, n);
            assert_eq!(back.focus_index(), start.focus_index());
            assert!((back.ring_rotation() - start.ring_rotation()).abs() < 1e-3);
            assert!((back.item_counter_rotation() - start.item_counter_rotation()).abs() < 1e-3);
        }
    }

    #[test]
    fn focus_after_k_rights_is_k_mod_n() {
        let n = count(7);
        let mut state = CarouselState::default();
        for k in 1..=30 {
            state = state.apply(RotationEvent::RotateRight, n);
            assert_eq!(state.focus_index().get(), k % 7);
            assert!((state.ring_rotation() - k as f32 * n.step_degrees()).abs() < 1e-2);
        }
    }

    #[test]
    fn rotation_accumulates_without_wrapping() {
        let n = count(2);
        let state = (0..5).fold(CarouselState::default(), |s, _| {
            s.apply(RotationEvent::RotateRight, n)
        });
        assert_eq!(state.ring_rotation(), 900.0);
        assert_eq!(state.ring_rotation_normalized(), 180.0);
    }

    #[test]
    fn counter_rotation_always_mirrors_ring() {
        let n = count(3);
        let events = [
            RotationEvent::RotateRight,
            RotationEvent::RotateLeft,
            RotationEvent::RotateLeft,
            RotationEvent::RotateLeft,
            RotationEvent::RotateRight,
        ];
        let mut state = CarouselState::default();
        for event in events {
            state = state.apply(event, n);
            assert_eq!(state.ring_rotation(), -state.item_counter_rotation());
        }
    }

    #[test]
    fn single_item_stays_focused() {
        let n = count(1);
        let state = CarouselState::default().apply(RotationEvent::RotateRight, n);
        assert_eq!(state.focus_index().get(), 0);
        assert_eq!(state.ring_rotation(), 360.0);
    }

    #[test]
    fn focus_index_new_checks_range() {
        assert!(FocusIndex::new(2, count(3)).is_some());
        assert!(FocusIndex::new(3, count(3)).is_none());
    }

    #[test]
    fn path_to_takes_shorter_direction() {
        let n = count(6);
        let state = CarouselState::default();
        assert_eq!(state.path_to(2, n), vec![RotationEvent::RotateRight; 2]);
        assert_eq!(state.path_to(5, n), vec![RotationEvent::RotateLeft]);
        assert_eq!(state.path_to(3, n), vec![RotationEvent::RotateRight; 3]);
        assert!(state.path_to(0, n).is_empty());
        assert!(state.path_to(6, n).is_empty());
    }

    #[test]
    fn focus_to_lands_on_target() {
        let n = count(8);
        let state = CarouselState::default().focus_to(6, n);
        assert_eq!(state.focus_index().get(), 6);
        assert_eq!(state.ring_rotation(), -90.0);
    }

    #[test]
    fn inverse_events() {
        assert_eq!(RotationEvent::RotateRight.inverse(), RotationEvent::RotateLeft);
        assert_eq!(RotationEvent::RotateLeft.inverse(), RotationEvent::RotateRight);
    }
}
