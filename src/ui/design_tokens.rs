// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the grid and the demo application.
//!
//! - **Palette**: base colors and tile accents
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: 4px-based spacing scale
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: resting and lifted tile shadows

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Fill colors for tiles without an image, picked by identity.
    pub const TILE_ACCENTS: [Color; 6] = [
        Color::from_rgb(0.85, 0.42, 0.35),
        Color::from_rgb(0.93, 0.66, 0.31),
        Color::from_rgb(0.38, 0.68, 0.45),
        Color::from_rgb(0.29, 0.58, 0.78),
        Color::from_rgb(0.55, 0.44, 0.78),
        Color::from_rgb(0.78, 0.40, 0.62),
    ];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading.
    pub const TITLE_MD: f32 = 22.0;

    /// Tile labels.
    pub const BODY: f32 = 14.0;

    /// Secondary text under the heading.
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const REST: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LIFTED: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::LG > radius::MD);
};

/// Picks a stable accent color for `id`.
#[must_use]
pub fn accent_for(id: &str) -> Color {
    let sum: usize = id.bytes().map(usize::from).sum();
    palette::TILE_ACCENTS[sum % palette::TILE_ACCENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_is_stable_per_id() {
        assert_eq!(accent_for("tile-7"), accent_for("tile-7"));
    }

    #[test]
    fn empty_id_still_gets_an_accent() {
        assert_eq!(accent_for(""), palette::TILE_ACCENTS[0]);
    }
}
