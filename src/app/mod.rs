// SPDX-License-Identifier: MPL-2.0
//! Application root: a window hosting one reorderable image grid.
//!
//! The `App` struct wires the grid component to configuration, localization
//! and native events, and keeps the collection in the order the grid reports.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::directory_scanner;
use crate::i18n::fluent::I18n;
use crate::ui::grid::State as GridState;
use crate::ui::image_grid::{self, ImageTile};
use crate::ui::theming::ThemeMode;
use config::{Config, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Number of placeholder tiles shown without an image folder.
pub const SAMPLE_TILE_COUNT: usize = 9;

pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// What the status bar shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Tile count.
    Ready,
    /// A tile was dropped into a new slot.
    Moved { id: String, slot: usize },
    /// A translated notice, by key.
    Notice(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    grid: GridState<ImageTile>,
    /// Items in the order last reported by the grid.
    tiles: Vec<ImageTile>,
    theme_mode: ThemeMode,
    status: Status,
    /// Tile of the gesture in progress, used to describe the outcome.
    last_pressed: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tiles", &self.tiles.len())
            .field("status", &self.status)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires `Fn` for boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and tiles, then mounts the grid.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (mut config, config_warning) = config::load();

        if let Some(columns) = flags.columns {
            config.grid.columns = Some(columns);
        }
        if let Some(spacing) = flags.spacing {
            config.grid.spacing = Some(spacing);
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let (tiles, notice) = load_tiles(flags.image_dir.as_deref().map(Path::new));

        let mut app = Self::with_tiles(tiles, &config, i18n);
        if let Some(key) = config_warning.or(notice) {
            app.status = Status::Notice(key);
        }
        (app, Task::none())
    }

    /// Mounts the grid over `tiles` with `config`.
    pub fn with_tiles(tiles: Vec<ImageTile>, config: &Config, i18n: I18n) -> Self {
        let (grid, effect) = GridState::new(
            tiles.clone(),
            config.grid.grid_settings(),
            view::INITIAL_GRID_WIDTH,
        );

        let mut app = Self {
            i18n,
            grid,
            tiles,
            theme_mode: config.general.theme_mode,
            status: Status::Ready,
            last_pressed: None,
        };
        update::apply_effect(&mut app.update_context(), effect);
        app
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            grid: &mut self.grid,
            tiles: &mut self.tiles,
            status: &mut self.status,
            last_pressed: &mut self.last_pressed,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.grid.is_animating()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Grid(msg) => {
                update::handle_grid_message(&mut self.update_context(), msg);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            grid: &self.grid,
            status: self.status_text(),
        })
    }

    /// Status bar text in the current locale.
    pub fn status_text(&self) -> String {
        match &self.status {
            Status::Ready => self.i18n.tr_count("status-ready", self.tiles.len()),
            Status::Moved { id, slot } => {
                let slot = (slot + 1).to_string();
                self.i18n
                    .tr_with_args("status-moved", &[("tile", id.as_str()), ("slot", slot.as_str())])
            }
            Status::Notice(key) => self.i18n.tr(key),
        }
    }

    /// Items in their current order.
    #[must_use]
    pub fn tiles(&self) -> &[ImageTile] {
        &self.tiles
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn grid(&self) -> &GridState<ImageTile> {
        &self.grid
    }
}

/// Scans `image_dir`, falling back to sample tiles. Returns the tiles and
/// a notice key when the fallback was used.
fn load_tiles(image_dir: Option<&Path>) -> (Vec<ImageTile>, Option<String>) {
    let Some(dir) = image_dir else {
        return (image_grid::sample_tiles(SAMPLE_TILE_COUNT), None);
    };

    match directory_scanner::scan_directory(dir) {
        Ok(tiles) if !tiles.is_empty() => (tiles, None),
        Ok(_) => (
            image_grid::sample_tiles(SAMPLE_TILE_COUNT),
            Some("status-empty".to_string()),
        ),
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot scan image directory");
            (
                image_grid::sample_tiles(SAMPLE_TILE_COUNT),
                Some("error-scan-directory".to_string()),
            )
        }
    }
}
