// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the [`Session`], hands the service calls to the
//! runtime as tasks, and routes their results back into the session. Display
//! components receive read-only views of that state.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ImageGenerator;
use crate::domain::Session;
use crate::i18n::fluent::I18n;
use crate::infrastructure::GeminiGenerator;
use crate::ui::theming::ThemeMode;
use crate::ui::{control_panel, image_canvas};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    generator: Arc<dyn ImageGenerator>,
    control_panel: control_panel::State,
    canvas: image_canvas::State,
    theme_mode: ThemeMode,
    /// `theme_mode` resolved against the OS setting at boot or on toggle.
    theme: Theme,
    config: Config,
    /// Fluent key of a warning raised while starting up.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", self.session.phase())
            .field("service", &self.generator.name())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and translations and wires the Gemini adapter.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let gemini = GeminiGenerator::from_config(&config.service);
        if !gemini.has_api_key() {
            tracing::warn!(
                env = gemini.api_key_env(),
                "no API key found; requests will fail until it is set"
            );
        }
        tracing::info!(locale = %i18n.current_locale(), ?gemini, "starting");

        let mut app = Self::with_generator(i18n, config, Arc::new(gemini));
        app.startup_warning = config_warning;
        (app, Task::none())
    }

    /// Builds the application around any generation service.
    #[must_use]
    pub fn with_generator(i18n: I18n, config: Config, generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            i18n,
            session: Session::new(),
            generator,
            control_panel: control_panel::State::new(),
            canvas: image_canvas::State::new(),
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.iced_theme(),
            config,
            startup_warning: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn canvas(&self) -> &image_canvas::State {
        &self.canvas
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_loading_subscription(
            &self.canvas,
            self.config.display.ticker_period(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            control_panel: &mut self.control_panel,
            canvas: &mut self.canvas,
            generator: &self.generator,
            theme_mode: &mut self.theme_mode,
            theme: &mut self.theme,
            config: &mut self.config,
        };

        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::ControlPanel(panel_message) => {
                update::handle_control_panel_message(&mut ctx, panel_message)
            }
            Message::Canvas(canvas_message) => {
                update::handle_canvas_message(&mut ctx, canvas_message)
            }
            Message::RequestFinished { kind, result } => {
                update::handle_request_finished(&mut ctx, kind, result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            control_panel: &self.control_panel,
            canvas: &self.canvas,
            theme_mode: self.theme_mode,
            warning: self.startup_warning.as_deref(),
        })
    }
}
