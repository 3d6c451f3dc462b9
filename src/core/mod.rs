//! DTerm Core Module
//!
//! Layout engine:
//! - GridMetrics: the unit cell every coordinate snaps to
//! - BorderStyle / BorderGlyphs: box-drawing glyph records
//! - Panel: one stacked, optionally bordered text region
//! - Surface: panel factory, host padding and mouse highlight

pub mod glyphs;
pub mod metrics;
pub mod panel;
pub mod surface;

pub use glyphs::{glyph_sets, BorderGlyphs, BorderStrips, BorderStyle};
pub use metrics::{GridMetrics, Padding};
pub use panel::{EdgeElements, Panel, BORDER_LAYER_SCALE};
pub use surface::{HostEvent, PanelMut, Surface};
