//! DTerm Grid Metrics
//!
//! The unit cell: the pixel rectangle one monospace character occupies.
//! Every position and size the engine emits is quantized to it.

use serde::{Deserialize, Serialize};

use crate::error::{DTermError, Result};

/// Default unit cell width in pixels
pub const UNIT_WIDTH: u32 = 11;
/// Default unit cell height in pixels
pub const UNIT_HEIGHT: u32 = 21;
/// Font size matching the default unit cell
pub const FONT_SIZE: f32 = 18.33;
/// Font stack matching the default unit cell
pub const FONT_FAMILY: &str = "\"Courier New\", monospace";

/// Host padding in pixels, one value per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Immutable grid configuration, injected into the surface at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridMetrics {
    unit_width: u32,
    unit_height: u32,
    font_size: f32,
    font_family: String,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            unit_width: UNIT_WIDTH,
            unit_height: UNIT_HEIGHT,
            font_size: FONT_SIZE,
            font_family: FONT_FAMILY.to_string(),
        }
    }
}

impl GridMetrics {
    /// Create metrics with a custom unit cell and the default font
    pub fn new(unit_width: u32, unit_height: u32) -> Result<Self> {
        Self {
            unit_width,
            unit_height,
            ..Self::default()
        }
        .validated()
    }

    /// Replace the font size and family
    pub fn with_font(mut self, size: f32, family: impl Into<String>) -> Self {
        self.font_size = size;
        self.font_family = family.into();
        self
    }

    /// Check the unit-cell invariant. Deserialized metrics must pass through here.
    pub fn validated(self) -> Result<Self> {
        if self.unit_width == 0 || self.unit_height == 0 {
            return Err(DTermError::InvalidMetrics {
                width: self.unit_width,
                height: self.unit_height,
            });
        }
        Ok(self)
    }

    pub fn unit_width(&self) -> u32 {
        self.unit_width
    }

    pub fn unit_height(&self) -> u32 {
        self.unit_height
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Snap a pixel coordinate down to the origin of its enclosing cell
    pub fn snap(&self, x: u32, y: u32) -> (u32, u32) {
        (x - x % self.unit_width, y - y % self.unit_height)
    }

    /// Number of whole cells covered by a pixel size
    pub fn cells(&self, width: u32, height: u32) -> (u32, u32) {
        (width / self.unit_width, height / self.unit_height)
    }

    /// Padding that leaves a whole number of cells inside a host of this size.
    /// The remainder is pushed into the right and bottom padding.
    pub fn padding_for(&self, width: u32, height: u32) -> Padding {
        Padding {
            top: self.unit_height,
            right: self.unit_width * 2 + width % self.unit_width,
            bottom: self.unit_height + height % self.unit_height,
            left: self.unit_width * 2,
        }
    }
}

/// Format a pixel length for a style value
pub fn px(value: impl std::fmt::Display) -> String {
    format!("{}px", value)
}
