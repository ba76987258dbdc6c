// SPDX-License-Identifier: MPL-2.0
use iced_carousel::carousel::{
    border_data_uri, border_svg, compute_positions, layout, AutoRotator, CarouselItem,
    CarouselOptions, CarouselState, FocusIndex, FocusObservers, HexColor, ItemCount,
    RotationEvent,
};
use iced_carousel::config::{self, CarouselSettings, Config, GeneralConfig};
use iced_carousel::error::{ConfigurationError, Error};
use iced_carousel::ui::carousel::{Effect, Message, State};
use iced_carousel::ui::theming::ThemeMode;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn count(n: usize) -> ItemCount {
    ItemCount::new(n).expect("count is non-zero")
}

#[test]
fn base_angles_are_distinct_and_within_one_turn() {
    for n in 1..=24 {
        let angles: Vec<f32> = layout::base_angles(count(n)).collect();
        assert_eq!(angles.len(), n);
        assert_eq!(angles[0], 0.0);
        for (i, angle) in angles.iter().enumerate() {
            assert!(*angle >= 0.0 && *angle < std::f32::consts::TAU);
            for other in &angles[i + 1..] {
                assert!((angle - other).abs() > 1e-4, "angles must be distinct");
            }
        }
    }
}

#[test]
fn right_then_left_restores_every_field() {
    for n in 1..=10 {
        let start = CarouselState::default().apply(RotationEvent::RotateRight, count(n));
        let back = start
            .apply(RotationEvent::RotateRight, count(n))
            .apply(RotationEvent::RotateLeft, count(n));
        assert_eq!(back.focus_index(), start.focus_index());
        assert!((back.ring_rotation() - start.ring_rotation()).abs() < 1e-3);
        assert!((back.item_counter_rotation() - start.item_counter_rotation()).abs() < 1e-3);
    }
}

#[test]
fn k_right_rotations_accumulate() {
    let n = count(7);
    let mut state = CarouselState::default();
    for k in 1..=20usize {
        state = state.apply(RotationEvent::RotateRight, n);
        assert_eq!(state.focus_index().get(), k % 7);
        let expected = k as f32 * (360.0 / 7.0);
        assert!((state.ring_rotation() - expected).abs() < 1e-2);
        assert_eq!(state.item_counter_rotation(), -state.ring_rotation());
    }
}

#[test]
fn five_items_three_steps() {
    let n = count(5);
    let state = (0..3).fold(CarouselState::default(), |s, _| {
        s.apply(RotationEvent::RotateRight, n)
    });
    assert_eq!(state.focus_index().get(), 3);
    assert_eq!(state.ring_rotation(), 216.0);
    assert_eq!(state.item_counter_rotation(), -216.0);
}

#[test]
fn four_items_one_step_left() {
    let state = CarouselState::default().apply(RotationEvent::RotateLeft, count(4));
    assert_eq!(state.focus_index(), FocusIndex::new(3, count(4)).unwrap());
}

#[test]
fn single_item_layout_is_valid() {
    let positions = compute_positions(1, 400.0, 75.0, 0.0).expect("one item is valid");
    assert_eq!(positions.len(), 1);
    assert!(positions[0].x.is_finite() && positions[0].y.is_finite());
}

#[test]
fn empty_layout_is_rejected() {
    assert_eq!(
        compute_positions(0, 400.0, 75.0, 0.0),
        Err(ConfigurationError::NoItems)
    );
    assert_eq!(
        CarouselOptions::default().build(Vec::new()),
        Err(ConfigurationError::NoItems)
    );
}

#[test]
fn border_generation_is_pure() {
    let color = HexColor::parse("CB786C").unwrap();
    assert_eq!(border_svg(400.0, 5.0, color), border_svg(400.0, 5.0, color));
    assert_eq!(
        border_data_uri(400.0, 5.0, color),
        border_data_uri(400.0, 5.0, color)
    );
    assert_ne!(border_svg(400.0, 5.0, color), border_svg(300.0, 5.0, color));
}

#[test]
fn observers_receive_every_transition() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut observers = FocusObservers::new();
    observers.subscribe(move |focus: FocusIndex| sink.lock().unwrap().push(focus.get()));

    let n = count(3);
    let mut state = CarouselState::default();
    for event in [
        RotationEvent::RotateRight,
        RotationEvent::RotateRight,
        RotationEvent::RotateRight,
        RotationEvent::RotateLeft,
    ] {
        state = state.apply(event, n);
        observers.notify(state.focus_index());
    }

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0, 2]);
}

#[test]
fn component_drives_auto_rotation_and_manual_reset() {
    let start = Instant::now();
    let config = CarouselOptions {
        auto_rotate_interval_secs: 5.0,
        transition_duration_secs: 0.0,
        ..CarouselOptions::default()
    }
    .build(vec![
        CarouselItem::image("a.png"),
        CarouselItem::image("b.png"),
        CarouselItem::content("c", "third"),
    ])
    .unwrap();
    let mut carousel = State::new(config, start);

    let at = |secs: u64| start + Duration::from_secs(secs);
    assert_eq!(carousel.handle_message_at(Message::Tick(at(4)), at(4)), Effect::None);

    let effect = carousel.handle_message_at(Message::Tick(at(5)), at(5));
    assert_eq!(effect, Effect::FocusChanged(carousel.focus_index()));
    assert_eq!(carousel.focus_index().get(), 1);
    assert_eq!(carousel.displayed_rotation(at(5)), 120.0);

    carousel.handle_message_at(Message::RotateLeft, at(8));
    assert_eq!(carousel.handle_message_at(Message::Tick(at(10)), at(10)), Effect::None);
    carousel.handle_message_at(Message::Tick(at(13)), at(13));
    assert_eq!(carousel.focus_index().get(), 1);
}

#[tokio::test(start_paused = true)]
async fn auto_rotator_feeds_the_reducer() {
    let (tx, mut rx) = tokio::sync::mpsc::channel(1);
    let mut rotator = AutoRotator::start(Duration::from_secs(2), tx);
    let n = count(4);

    let mut state = CarouselState::default();
    for _ in 0..3 {
        let event = rx.recv().await.expect("rotator is running");
        state = state.apply(event, n);
    }
    assert_eq!(state.focus_index().get(), 3);

    rotator.stop();
    let mut late = 0;
    while rx.recv().await.is_some() {
        late += 1;
    }
    assert!(late <= 1, "the channel closes once the task is cancelled");
}

#[test]
fn settings_round_trip_and_apply() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Light,
        },
        carousel: CarouselSettings {
            ring_radius: Some(320.0),
            peripheral_item_radius: Some(60.0),
            navigation_button_bg_color: Some("#112233".into()),
            ..CarouselSettings::default()
        },
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let (loaded, warning) = config::load_from_path(&path).expect("Failed to load config");
    assert!(warning.is_none());
    assert_eq!(loaded, saved);

    let configuration = loaded
        .carousel
        .apply_to(CarouselOptions::default())
        .build(vec![CarouselItem::image("a.png")])
        .expect("settings are valid");
    assert_eq!(configuration.ring_radius(), 320.0);
    assert_eq!(configuration.peripheral_item_radius(), 60.0);
    assert_eq!(
        configuration.navigation().background,
        HexColor::rgb(0x11, 0x22, 0x33)
    );
}

#[test]
fn invalid_settings_values_surface_as_configuration_errors() {
    let settings = CarouselSettings {
        transition_duration_secs: Some(-1.0),
        ..CarouselSettings::default()
    };
    let err: Error = settings
        .apply_to(CarouselOptions::default())
        .build(vec![CarouselItem::image("a.png")])
        .unwrap_err()
        .into();

    assert!(matches!(
        err,
        Error::InvalidConfiguration(ConfigurationError::InvalidDuration {
            field: "transition_duration_secs",
            ..
        })
    ));
}
