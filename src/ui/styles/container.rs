// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Tile frame. The active tile is lifted with a stronger shadow and an
/// outline in the theme's primary color.
pub fn tile(theme: &Theme, is_active: bool) -> container::Style {
    let palette = theme.extended_palette();

    let border = if is_active {
        Border {
            color: palette.primary.strong.color,
            width: 2.0,
            radius: radius::MD.into(),
        }
    } else {
        Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        }
    };

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border,
        shadow: if is_active { shadow::LIFTED } else { shadow::REST },
        ..Default::default()
    }
}

/// Flat fill for tiles that have no image.
pub fn placeholder(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(accent)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Caption strip drawn over the bottom of a tile.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status bar under the grid.
pub fn status(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.strong.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..base
        })),
        text_color: Some(palette.background.strong.text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette.background.base.text
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tile_is_lifted() {
        let theme = Theme::Dark;
        let idle = tile(&theme, false);
        let active = tile(&theme, true);
        assert!(active.shadow.blur_radius > idle.shadow.blur_radius);
        assert!(active.border.width > idle.border.width);
    }

    #[test]
    fn placeholder_uses_accent() {
        let accent = Color::from_rgb(0.2, 0.4, 0.6);
        let style = placeholder(accent)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(accent)));
    }
}
