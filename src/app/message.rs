// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::grid;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the grid component.
    Grid(grid::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Overrides the configured column count.
    pub columns: Option<usize>,
    /// Overrides the configured spacing.
    pub spacing: Option<f32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TILES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directory whose images become the tiles.
    pub image_dir: Option<String>,
}
