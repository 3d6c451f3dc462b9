//! DTerm - Terminal-look text panels
//!
//! Renders decorative terminal boxes: box-drawing borders, monospaced
//! grid-aligned text and a grid-snapped mouse highlight.
//!
//! # Overview
//!
//! DTerm provides:
//! - Grid metrics that quantize every pixel position to a unit cell
//! - Border glyph records for thin and double box drawing
//! - Stacked panels with borders redrawn on every resize
//! - A surface managing panels, host padding and the mouse highlight
//! - A renderer trait, with an in-memory DOM implementation
//! - A JSON protocol and scene config for driving a surface
//!
//! # Example
//!
//! ```
//! use dterm::core::{BorderStyle, GridMetrics, HostEvent, Surface};
//! use dterm::renderer::{MemoryDom, Size};
//!
//! let mut dom = MemoryDom::new();
//! dom.create_root("terminal", Size::new(800, 600));
//!
//! let mut surface = Surface::attach(dom, GridMetrics::default(), "terminal")?;
//! let container = surface.create_panel()?.container();
//! surface.renderer_mut().set_size(container, Size::new(154, 105))?;
//! surface
//!     .panel_mut(1)?
//!     .set_border(BorderStyle::Double)?
//!     .set_text("DDD DDD DDDD\n")?;
//!
//! surface.handle_event(HostEvent::PointerMove { x: 57, y: 100 })?;
//! assert_eq!(surface.highlight(), (55, 84));
//! # Ok::<(), dterm::DTermError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod legacy;
pub mod protocol;
pub mod renderer;
pub mod text;

// Re-export commonly used types
pub use config::SceneConfig;
pub use crate::core::{BorderStyle, GridMetrics, HostEvent, Panel, PanelMut, Surface};
pub use error::{DTermError, Result};
pub use legacy::LegacyTerm;
pub use protocol::{Command, Response};
pub use renderer::{ElementId, MemoryDom, Renderer, Size};
