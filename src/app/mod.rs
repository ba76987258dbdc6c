// SPDX-License-Identifier: MPL-2.0
//! Application root state of the carousel demo.
//!
//! The `App` resolves the item list from the command line, overlays the
//! settings file on the carousel defaults, and hosts a single carousel
//! component. An invalid configuration is shown in the window instead of
//! aborting, so a typo in `settings.toml` stays diagnosable.

mod message;
mod subscription;

pub use message::{Flags, Message};
pub use subscription::route_key;

use crate::carousel::{CarouselItem, CarouselOptions, FocusIndex, HexColor};
use crate::config;
use crate::directory_scanner;
use crate::error::{Error, Result};
use crate::ui::carousel::{self, Effect};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

const APP_NAME: &str = "Iced Carousel";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 1000;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Root Iced application state.
pub struct App {
    carousel: std::result::Result<carousel::State, Error>,
    theme: AppTheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme.mode)
            .field(
                "focus",
                &self.carousel.as_ref().ok().map(carousel::State::focus_index),
            )
            .finish()
    }
}

/// Caption cards shown when no image is given.
#[must_use]
pub fn builtin_items() -> Vec<CarouselItem> {
    [
        ("Mercury", "Smallest planet, closest to the Sun."),
        ("Venus", "Hottest planet, wrapped in thick clouds."),
        ("Earth", "The only known world with life."),
        ("Mars", "Dusty, cold and red."),
        ("Jupiter", "Largest planet, a gas giant."),
        ("Saturn", "Famous for its bright rings."),
    ]
    .into_iter()
    .map(|(title, description)| CarouselItem::content(title, description))
    .collect()
}

/// Items from explicit images, then the scanned directory, then the
/// built-in cards.
pub fn resolve_items(flags: &Flags) -> Result<Vec<CarouselItem>> {
    if !flags.images.is_empty() {
        return Ok(flags.images.iter().cloned().map(CarouselItem::Image).collect());
    }

    if let Some(directory) = &flags.directory {
        let items = directory_scanner::scan_items(directory)?;
        if !items.is_empty() {
            return Ok(items);
        }
        tracing::warn!(
            directory = %directory.display(),
            "no supported images found, showing built-in cards"
        );
    }

    Ok(builtin_items())
}

/// Reads the settings file, falling back to defaults when it cannot be read.
pub fn load_settings(flags: &Flags) -> config::Config {
    let (settings, warning) = match config::load_with_override(flags.config_dir.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::warn!(%err, "cannot read settings, using defaults");
            (config::Config::default(), None)
        }
    };
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    settings
}

/// Configured ring color, used to tint the window icon. An invalid value is
/// reported by the carousel itself, so the icon just keeps the default.
#[must_use]
pub fn icon_color(settings: &config::Config) -> Option<HexColor> {
    settings
        .carousel
        .border_color
        .as_deref()
        .and_then(|value| HexColor::parse(value).ok())
}

/// Builds the window settings
pub fn window_settings(icon_color: Option<HexColor>) -> window::Settings {
    let icon = crate::icon::load_window_icon(icon_color);

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let settings = load_settings(&flags);
    let window = window_settings(icon_color(&settings));

    // iced requires an `Fn` boot function; flags are consumed only once.
    let boot_state = RefCell::new(Some((flags, settings)));
    let boot = move || {
        let (flags, settings) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, settings)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags, settings: config::Config) -> (Self, Task<Message>) {
        let mut options = settings.carousel.apply_to(CarouselOptions::default());
        if let Some(secs) = flags.auto_rotate_secs {
            options.auto_rotate_interval_secs = secs;
        }

        let carousel = resolve_items(&flags)
            .and_then(|items| options.build(items).map_err(Error::from))
            .map(|config| {
                let mut state = carousel::State::new(config, Instant::now());
                state.subscribe(|focus: FocusIndex| {
                    tracing::info!(focus = focus.get(), "focused item changed");
                });
                state
            });

        match &carousel {
            Ok(state) => tracing::info!(
                items = state.config().item_count().get(),
                "carousel ready"
            ),
            Err(err) => tracing::error!(%err, "carousel unavailable"),
        }

        (
            Self {
                carousel,
                theme: AppTheme::new(settings.general.theme_mode),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match &self.carousel {
            Ok(state) => {
                let focus = state.focus_index().get();
                let items = state.config().items();
                let label = items.get(focus).map(CarouselItem::label).unwrap_or_default();
                format!("{label} ({}/{}) - {APP_NAME}", focus + 1, items.len())
            }
            Err(_) => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::create_event_subscription();
        let timers = match &self.carousel {
            Ok(state) => state.subscription().map(Message::Carousel),
            Err(_) => Subscription::none(),
        };

        Subscription::batch([events, timers])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(message) => {
                if let Ok(state) = self.carousel.as_mut() {
                    if let Effect::FocusChanged(focus) = state.handle_message(message) {
                        tracing::debug!(focus = focus.get(), "title updated");
                    }
                }
                Task::none()
            }
            Message::CloseRequested => {
                if let Ok(state) = self.carousel.as_mut() {
                    state.stop_auto_rotation();
                }
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.carousel {
            Ok(state) => carousel::view(state, Instant::now()).map(Message::Carousel),
            Err(err) => Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(Horizontal::Center)
                    .push(Text::new("Cannot show the carousel").size(typography::CAPTION_TITLE))
                    .push(
                        Text::new(err.to_string())
                            .size(typography::CAPTION_BODY)
                            .color(self.theme.colors.text_secondary),
                    ),
            )
            .padding(spacing::LG)
            .style(styles::container::error_panel(&self.theme.colors))
            .into(),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::surface(&self.theme.colors))
            .into()
    }
}
