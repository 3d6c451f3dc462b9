//! DTerm Protocol
//!
//! Line-delimited JSON driving a surface from outside: the host page (or a
//! script standing in for it) sends commands, DTerm answers each with one
//! response.
//!
//! ```json
//! {"cmd": "resize", "width": 800, "height": 600}
//! {"cmd": "mouse_move", "x": 57, "y": 100}
//! {"cmd": "snapshot"}
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{HostEvent, Surface};
use crate::error::Result;
use crate::renderer::{MemoryDom, Size};

/// Commands from host to DTerm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Host element resized; triggers padding and border recomputation
    Resize {
        width: u32,
        height: u32,
    },

    /// Lay out a panel container at a new size (no redraw until `resize`)
    PanelSize {
        layer: u32,
        width: u32,
        height: u32,
    },

    /// Pointer moved
    MouseMove {
        x: u32,
        y: u32,
    },

    /// Create a panel on top of the others
    CreatePanel,

    /// Replace a panel's text
    SetText {
        layer: u32,
        text: String,
    },

    /// Frame a panel
    SetBorder {
        layer: u32,
        #[serde(default = "default_border")]
        style: String,
    },

    /// Request the page HTML
    Snapshot,
}

/// Responses from DTerm to host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Acknowledgment
    Ok,

    /// A panel was created
    PanelCreated {
        layer: u32,
    },

    /// Rendered page
    Snapshot {
        html: String,
    },

    /// Error message
    Error {
        message: String,
    },
}

fn default_border() -> String {
    "double".to_string()
}

/// Parse a command from JSON
pub fn parse_command(json: &str) -> Result<Command> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a response to JSON
pub fn serialize_response(response: &Response) -> String {
    serde_json::to_string(response)
        .unwrap_or_else(|_| r#"{"type":"error","message":"Serialization failed"}"#.to_string())
}

/// Apply one command to an in-memory surface
pub fn execute(surface: &mut Surface<MemoryDom>, command: Command) -> Result<Response> {
    debug!("Executing {:?}", command);
    let response = match command {
        Command::Resize { width, height } => {
            let host = surface.host();
            surface.renderer_mut().set_size(host, Size::new(width, height))?;
            surface.handle_event(HostEvent::Resize)?;
            Response::Ok
        }
        Command::PanelSize { layer, width, height } => {
            let container = surface.panel_mut(layer)?.container();
            surface.renderer_mut().set_size(container, Size::new(width, height))?;
            Response::Ok
        }
        Command::MouseMove { x, y } => {
            surface.handle_event(HostEvent::PointerMove { x, y })?;
            Response::Ok
        }
        Command::CreatePanel => {
            let layer = surface.create_panel()?.layer();
            Response::PanelCreated { layer }
        }
        Command::SetText { layer, text } => {
            surface.panel_mut(layer)?.set_text(&text)?;
            Response::Ok
        }
        Command::SetBorder { layer, style } => {
            surface.panel_mut(layer)?.set_border_named(&style)?;
            Response::Ok
        }
        Command::Snapshot => Response::Snapshot {
            html: surface.renderer().to_html(surface.host())?,
        },
    };
    Ok(response)
}

/// Parse, apply and answer one protocol line
pub fn handle_line(surface: &mut Surface<MemoryDom>, line: &str) -> Response {
    match parse_command(line).and_then(|cmd| execute(surface, cmd)) {
        Ok(response) => response,
        Err(e) => Response::Error { message: e.to_string() },
    }
}
