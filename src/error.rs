//! DTerm Errors
//!
//! Every fallible library operation returns `Result<T, DTermError>`.

use thiserror::Error;

use crate::renderer::ElementId;

/// Errors raised by the layout engine and its configuration
#[derive(Debug, Error)]
pub enum DTermError {
    /// Border style name with no entry in the glyph table
    #[error("unknown border style: {0:?}")]
    UnknownBorderStyle(String),

    /// Border style that is recognised but has no glyph record yet
    #[error("border style {0:?} is not implemented")]
    UnimplementedBorderStyle(&'static str),

    /// Grid metrics violating the unit-cell invariant
    #[error("invalid grid metrics: unit cell {width}x{height} must be non-zero")]
    InvalidMetrics { width: u32, height: u32 },

    /// Element handle not owned by the renderer
    #[error("unknown element: {0:?}")]
    UnknownElement(ElementId),

    /// Append would make an element its own ancestor
    #[error("cannot append {child:?} under {parent:?}: it would contain itself")]
    CyclicAppend { parent: ElementId, child: ElementId },

    /// No element carries the requested identifier
    #[error("host element not found: {0:?}")]
    HostNotFound(String),

    /// No panel with this layer index
    #[error("panel not found: layer {0}")]
    UnknownPanel(u32),

    /// Malformed scene or protocol JSON
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DTermError>;
