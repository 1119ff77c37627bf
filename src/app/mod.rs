// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the navigator, localization, and theme
//! preferences, and translates messages into navigation state transitions.
//! Navigation state is read and mutated only inside `update`, on the UI
//! thread, so the navigator needs no synchronization.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::navigation::GalleryNavigator;
use crate::ui::{controls, gallery, theming::ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging the gallery navigator,
/// localization, and theme preferences.
pub struct App {
    pub i18n: I18n,
    navigator: GalleryNavigator,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cursor", &self.navigator.cursor())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            navigator: GalleryNavigator::new(Catalog::builtin()),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            theme_mode: config.theme_mode.unwrap_or_default(),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let artwork_title = self.i18n.tr(&self.navigator.current().title_key);
        format!("{artwork_title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery::Message::Controls(controls_message)) => {
                match controls_message {
                    controls::Message::NavigatePrevious => self.navigator.previous(),
                    controls::Message::NavigateNext => self.navigator.next(),
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navigator: &self.navigator,
            is_dark_theme: self.theme_mode.is_dark(),
        })
    }
}
