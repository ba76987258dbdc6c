// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating focus state, animation and timers.
//!
//! Every input (navigation button, key, item click, auto-rotation tick) is a
//! [`Message`]; the component folds it through the carousel reducer and
//! reports focus changes to its observers and, as an [`Effect`], to the
//! hosting application.

use crate::carousel::{
    AutoRotateSchedule, BorderDecoration, CarouselConfiguration, CarouselState, FocusIndex,
    FocusObserver, FocusObservers, RingAnimation, RotationEvent, SubscriptionId,
};
use crate::config::{ANIMATION_FRAME_MILLIS, AUTO_ROTATE_POLL_MILLIS};
use iced::widget::svg;
use iced::Subscription;
use std::time::{Duration, Instant};

/// Messages accepted by the carousel component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Retreat button or `Left` key.
    RotateLeft,
    /// Advance button or `Right` key.
    RotateRight,
    /// A peripheral item was clicked.
    FocusItem(usize),
    /// Timer tick driving auto-rotation and the rotation animation.
    Tick(Instant),
}

/// Effects produced by carousel updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The focused item changed.
    FocusChanged(FocusIndex),
}

/// Carousel component state.
#[derive(Debug)]
pub struct State {
    config: CarouselConfiguration,
    carousel: CarouselState,
    schedule: Option<AutoRotateSchedule>,
    animation: RingAnimation,
    observers: FocusObservers,
    border: Option<svg::Handle>,
}

impl State {
    /// Creates the component at its initial state: focus on the first item,
    /// no rotation, auto-rotation counting down from `now` when enabled.
    #[must_use]
    pub fn new(config: CarouselConfiguration, now: Instant) -> Self {
        let schedule = config
            .auto_rotate_interval()
            .map(|interval| AutoRotateSchedule::new(interval, now));
        let border = BorderDecoration::for_configuration(&config)
            .map(|decoration| svg::Handle::from_memory(decoration.svg().into_bytes()));

        tracing::debug!(
            items = config.item_count().get(),
            auto_rotate = ?config.auto_rotate_interval(),
            "carousel created"
        );

        Self {
            config,
            carousel: CarouselState::default(),
            schedule,
            animation: RingAnimation::settled(0.0, now),
            observers: FocusObservers::new(),
            border,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfiguration {
        &self.config
    }

    #[must_use]
    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    #[must_use]
    pub fn focus_index(&self) -> FocusIndex {
        self.carousel.focus_index()
    }

    /// Ring rotation as currently drawn, lagging the target while animating.
    #[must_use]
    pub fn displayed_rotation(&self, now: Instant) -> f32 {
        self.animation.value_at(now)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_running(now)
    }

    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        self.schedule.is_some_and(|schedule| schedule.is_active())
    }

    pub(super) fn border_handle(&self) -> Option<&svg::Handle> {
        self.border.as_ref()
    }

    /// Subscribes a focus observer. It is immediately told the current focus.
    pub fn subscribe<O>(&mut self, mut observer: O) -> SubscriptionId
    where
        O: FocusObserver + Send + 'static,
    {
        observer.focus_changed(self.focus_index());
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Cancels auto-rotation for the rest of the component's life.
    pub fn stop_auto_rotation(&mut self) {
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.cancel();
            tracing::debug!("auto-rotation cancelled");
        }
    }

    /// Handles a message using the current time.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        self.handle_message_at(message, Instant::now())
    }

    /// Handles a message as if received at `now`.
    pub fn handle_message_at(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::RotateLeft => self.navigate(&[RotationEvent::RotateLeft], now),
            Message::RotateRight => self.navigate(&[RotationEvent::RotateRight], now),
            Message::FocusItem(index) => {
                let path = self.carousel.path_to(index, self.config.item_count());
                self.navigate(&path, now)
            }
            Message::Tick(instant) => {
                let due = self
                    .schedule
                    .as_mut()
                    .is_some_and(|schedule| schedule.poll(instant));
                if due {
                    tracing::debug!("auto-rotation tick");
                    self.transition(&[RotationEvent::RotateRight], instant)
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Manual navigation: transitions and restarts the auto-rotate countdown.
    fn navigate(&mut self, events: &[RotationEvent], now: Instant) -> Effect {
        if events.is_empty() {
            return Effect::None;
        }
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.reset(now);
        }
        self.transition(events, now)
    }

    fn transition(&mut self, events: &[RotationEvent], now: Instant) -> Effect {
        let count = self.config.item_count();
        self.carousel = events
            .iter()
            .fold(self.carousel, |state, event| state.apply(*event, count));

        self.animation.retarget(
            self.carousel.ring_rotation(),
            now,
            self.config.transition_duration(),
        );

        let focus = self.carousel.focus_index();
        tracing::debug!(
            focus = focus.get(),
            ring_rotation = self.carousel.ring_rotation(),
            steps = events.len(),
            "carousel rotated"
        );
        self.observers.notify(focus);
        Effect::FocusChanged(focus)
    }

    /// Timers needed right now: the auto-rotation poll while enabled, and
    /// frame ticks while the ring is turning. Both end with the component.
    pub fn subscription(&self) -> Subscription<Message> {
        let auto_rotate = if self.is_auto_rotating() {
            iced::time::every(Duration::from_millis(AUTO_ROTATE_POLL_MILLIS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let animation = if self.is_animating(Instant::now()) {
            iced::time::every(Duration::from_millis(ANIMATION_FRAME_MILLIS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([auto_rotate, animation])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselItem, CarouselOptions};
    use std::sync::{Arc, Mutex};

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::content(format!("Item {i}"), "description"))
            .collect()
    }

    fn state(n: usize, auto_rotate_secs: f32, now: Instant) -> State {
        let config = CarouselOptions {
            auto_rotate_interval_secs: auto_rotate_secs,
            ..CarouselOptions::default()
        }
        .build(items(n))
        .unwrap();
        State::new(config, now)
    }

    #[test]
    fn rotate_right_reports_new_focus() {
        let now = Instant::now();
        let mut carousel = state(5, 0.0, now);

        let effect = carousel.handle_message_at(Message::RotateRight, now);
        assert_eq!(effect, Effect::FocusChanged(carousel.focus_index()));
        assert_eq!(carousel.focus_index().get(), 1);
        assert_eq!(carousel.carousel().ring_rotation(), 72.0);
    }

    #[test]
    fn rotate_left_wraps_to_last_item() {
        let now = Instant::now();
        let mut carousel = state(4, 0.0, now);

        carousel.handle_message_at(Message::RotateLeft, now);
        assert_eq!(carousel.focus_index().get(), 3);
    }

    #[test]
    fn focusing_current_item_is_a_no_op() {
        let now = Instant::now();
        let mut carousel = state(3, 0.0, now);

        assert_eq!(carousel.handle_message_at(Message::FocusItem(0), now), Effect::None);
        assert_eq!(carousel.handle_message_at(Message::FocusItem(7), now), Effect::None);
        assert_eq!(carousel.carousel(), &CarouselState::default());
    }

    #[test]
    fn focus_item_takes_shorter_way() {
        let now = Instant::now();
        let mut carousel = state(6, 0.0, now);

        carousel.handle_message_at(Message::FocusItem(5), now);
        assert_eq!(carousel.focus_index().get(), 5);
        assert_eq!(carousel.carousel().ring_rotation(), -60.0);
    }

    #[test]
    fn displayed_rotation_animates_towards_target() {
        let now = Instant::now();
        let mut carousel = state(4, 0.0, now);

        carousel.handle_message_at(Message::RotateRight, now);
        assert_eq!(carousel.displayed_rotation(now), 0.0);
        assert!(carousel.is_animating(now + Duration::from_millis(100)));

        let settled = now + carousel.config().transition_duration();
        assert_eq!(carousel.displayed_rotation(settled), 90.0);
        assert!(!carousel.is_animating(settled));
    }

    #[test]
    fn ticks_without_auto_rotation_do_nothing() {
        let now = Instant::now();
        let mut carousel = state(3, 0.0, now);

        let effect = carousel.handle_message_at(Message::Tick(now + Duration::from_secs(60)), now);
        assert_eq!(effect, Effect::None);
        assert!(!carousel.is_auto_rotating());
    }

    #[test]
    fn auto_rotation_advances_once_per_interval() {
        let start = Instant::now();
        let mut carousel = state(3, 2.0, start);
        let tick = |carousel: &mut State, secs: f32| {
            let at = start + Duration::from_secs_f32(secs);
            carousel.handle_message_at(Message::Tick(at), at)
        };

        assert_eq!(tick(&mut carousel, 1.9), Effect::None);
        assert!(matches!(tick(&mut carousel, 2.0), Effect::FocusChanged(_)));
        assert_eq!(tick(&mut carousel, 2.1), Effect::None);
        assert_eq!(carousel.focus_index().get(), 1);
    }

    #[test]
    fn manual_navigation_resets_countdown() {
        let start = Instant::now();
        let mut carousel = state(3, 2.0, start);

        let manual = start + Duration::from_millis(1500);
        carousel.handle_message_at(Message::RotateRight, manual);

        let old_deadline = start + Duration::from_secs(2);
        assert_eq!(
            carousel.handle_message_at(Message::Tick(old_deadline), old_deadline),
            Effect::None
        );

        let new_deadline = manual + Duration::from_secs(2);
        carousel.handle_message_at(Message::Tick(new_deadline), new_deadline);
        assert_eq!(carousel.focus_index().get(), 2);
    }

    #[test]
    fn stopped_auto_rotation_never_fires() {
        let start = Instant::now();
        let mut carousel = state(3, 1.0, start);
        carousel.stop_auto_rotation();

        let later = start + Duration::from_secs(10);
        assert_eq!(carousel.handle_message_at(Message::Tick(later), later), Effect::None);
        assert!(!carousel.is_auto_rotating());
    }

    #[test]
    fn observers_see_initial_and_subsequent_focus() {
        let now = Instant::now();
        let mut carousel = state(3, 0.0, now);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let id = carousel.subscribe(move |focus: FocusIndex| {
            sink.lock().unwrap().push(focus.get());
        });
        carousel.handle_message_at(Message::RotateRight, now);
        carousel.handle_message_at(Message::RotateRight, now);
        assert!(carousel.unsubscribe(id));
        carousel.handle_message_at(Message::RotateRight, now);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn border_handle_follows_configuration() {
        let now = Instant::now();
        assert!(state(2, 0.0, now).border_handle().is_some());

        let config = CarouselOptions {
            border_enabled: false,
            ..CarouselOptions::default()
        }
        .build(items(2))
        .unwrap();
        assert!(State::new(config, now).border_handle().is_none());
    }
}
