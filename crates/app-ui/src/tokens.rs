//! Design tokens for GoodSeva
//!
//! Spacing, border radius, font size and weight, and elevation shadows shared
//! by every screen. Values are in density-independent pixels.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale, 4px base unit
pub mod spacing {
    /// 4px
    pub const XS: f32 = 4.0;
    /// 8px
    pub const SM: f32 = 8.0;
    /// 12px
    pub const MD: f32 = 12.0;
    /// 16px
    pub const LG: f32 = 16.0;
    /// 20px
    pub const XL: f32 = 20.0;
    /// 24px
    pub const XXL: f32 = 24.0;
    /// 32px
    pub const XXXL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            "xxxl" => Some(XXXL),
            _ => None,
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// 8px
    pub const SM: f32 = 8.0;
    /// 12px
    pub const MD: f32 = 12.0;
    /// 16px
    pub const LG: f32 = 16.0;
    /// 20px
    pub const XL: f32 = 20.0;
    /// Pill/circle
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font size scale
pub mod font_size {
    /// 10px
    pub const XXS: f32 = 10.0;
    /// 12px
    pub const XS: f32 = 12.0;
    /// 14px
    pub const SM: f32 = 14.0;
    /// 16px
    pub const BASE: f32 = 16.0;
    /// 18px
    pub const LG: f32 = 18.0;
    /// 20px
    pub const XL: f32 = 20.0;
    /// 24px
    pub const XXL: f32 = 24.0;
    /// 32px
    pub const XXXL: f32 = 32.0;
}

/// Font weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// 400
    #[default]
    Normal,
    /// 500
    Medium,
    /// 600
    Semibold,
    /// 700
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Elevation shadow. Color is always black; only opacity varies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Shadow opacity
    pub opacity: f32,
    /// Blur radius
    pub radius: f32,
    /// Android elevation
    pub elevation: u8,
}

impl Shadow {
    const fn new(offset_y: f32, opacity: f32, radius: f32, elevation: u8) -> Self {
        Self {
            offset_x: 0.0,
            offset_y,
            opacity,
            radius,
            elevation,
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// Cards and chips
    pub const SM: Shadow = Shadow::new(1.0, 0.05, 2.0, 2);
    /// Raised cards
    pub const MD: Shadow = Shadow::new(2.0, 0.08, 4.0, 3);
    /// Floating buttons and menus
    pub const LG: Shadow = Shadow::new(4.0, 0.1, 8.0, 5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_values() {
        assert_eq!(spacing::XS, 4.0);
        assert_eq!(spacing::MD, 12.0);
        assert_eq!(spacing::XXXL, 32.0);
    }

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("lg"), Some(16.0));
        assert_eq!(spacing::get("xxl"), Some(24.0));
        assert_eq!(spacing::get("invalid"), None);
    }

    #[test]
    fn test_radius_scale_is_increasing() {
        let scale = [radius::SM, radius::MD, radius::LG, radius::XL, radius::FULL];
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_font_weights() {
        assert_eq!(FontWeight::default().value(), 400);
        assert_eq!(FontWeight::Semibold.value(), 600);
        assert_eq!(serde_json::to_string(&FontWeight::Bold).unwrap(), "\"bold\"");
    }

    #[test]
    fn test_shadow_elevations() {
        assert_eq!(shadows::SM.elevation, 2);
        assert_eq!(shadows::MD.offset_y, 2.0);
        assert_eq!(shadows::LG.radius, 8.0);
        assert_eq!(shadows::LG.offset_x, 0.0);
    }
}
