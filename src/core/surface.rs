//! DTerm Surface
//!
//! The surface binds to a host element, owns every panel and the grid-snapped
//! mouse highlight, and reacts to host events. Panels stack in creation
//! order; the first one is anchored to the bottom-right of the host.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::glyphs::BorderStyle;
use super::metrics::{px, GridMetrics, Padding};
use super::panel::Panel;
use crate::error::{DTermError, Result};
use crate::renderer::{classes, ElementId, Renderer, StyleProp};

/// Events the host delivers to the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The window was resized; sizes are re-measured from the renderer
    Resize,
    /// Pointer moved to page coordinates
    PointerMove { x: u32, y: u32 },
}

/// Top-level container: panels plus the cursor highlight
pub struct Surface<R: Renderer> {
    renderer: R,
    metrics: GridMetrics,
    host: ElementId,
    /// Panels in layer order
    panels: Vec<Panel>,
    layer_count: u32,
    mouse: ElementId,
    padding: Padding,
    highlight: (u32, u32),
}

impl<R: Renderer> Surface<R> {
    /// Bind to `host`: apply the font, create the highlight and pad the host
    /// so its interior is a whole number of cells.
    pub fn initialize(mut renderer: R, metrics: GridMetrics, host: ElementId) -> Result<Self> {
        let metrics = metrics.validated()?;
        renderer.add_class(host, classes::TERMINAL)?;
        renderer.set_style(host, StyleProp::FontSize, &px(metrics.font_size()))?;
        renderer.set_style(host, StyleProp::FontFamily, metrics.font_family())?;

        let mouse = renderer.create_with_class(classes::MOUSE)?;
        renderer.set_style(mouse, StyleProp::Width, &px(metrics.unit_width()))?;
        renderer.set_style(mouse, StyleProp::Height, &px(metrics.unit_height()))?;

        let mut surface = Self {
            renderer,
            metrics,
            host,
            panels: Vec::new(),
            layer_count: 0,
            mouse,
            padding: Padding::default(),
            highlight: (0, 0),
        };
        surface.recompute_padding()?;
        surface.renderer.append_child(host, mouse)?;

        info!(
            "Surface bound with {}x{} unit cells",
            surface.metrics.unit_width(),
            surface.metrics.unit_height()
        );
        Ok(surface)
    }

    /// Locate the host by identifier, then initialize
    pub fn attach(renderer: R, metrics: GridMetrics, host_id: &str) -> Result<Self> {
        let host = renderer
            .element_by_id(host_id)
            .ok_or_else(|| DTermError::HostNotFound(host_id.to_string()))?;
        Self::initialize(renderer, metrics, host)
    }

    /// Create the next panel on top of all existing ones
    pub fn create_panel(&mut self) -> Result<PanelMut<'_, R>> {
        let layer = self.layer_count + 1;
        let panel = Panel::new(&mut self.renderer, layer)?;
        let container = panel.container();
        if layer == 1 {
            self.renderer.set_style(container, StyleProp::Right, &px(0))?;
            self.renderer.set_style(container, StyleProp::Bottom, &px(0))?;
        }
        self.renderer.append_child(self.host, container)?;
        self.layer_count = layer;
        self.panels.push(panel);
        debug!("Created panel on layer {}", layer);

        let index = self.panels.len() - 1;
        Ok(PanelMut {
            panel: &mut self.panels[index],
            renderer: &mut self.renderer,
            metrics: &self.metrics,
        })
    }

    /// Dispatch a host event to the surface and panel handlers
    pub fn handle_event(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::Resize => {
                self.recompute_padding()?;
                for panel in &mut self.panels {
                    panel.on_resize(&mut self.renderer, &self.metrics)?;
                }
            }
            HostEvent::PointerMove { x, y } => self.move_highlight(x, y)?,
        }
        Ok(())
    }

    /// Pad the host so the interior is a whole number of cells
    fn recompute_padding(&mut self) -> Result<()> {
        let size = self.renderer.measure(self.host)?;
        let padding = self.metrics.padding_for(size.width, size.height);
        self.renderer.set_style(self.host, StyleProp::PaddingLeft, &px(padding.left))?;
        self.renderer.set_style(self.host, StyleProp::PaddingRight, &px(padding.right))?;
        self.renderer.set_style(self.host, StyleProp::PaddingTop, &px(padding.top))?;
        self.renderer.set_style(self.host, StyleProp::PaddingBottom, &px(padding.bottom))?;
        self.padding = padding;
        Ok(())
    }

    fn move_highlight(&mut self, x: u32, y: u32) -> Result<()> {
        let (left, top) = self.metrics.snap(x, y);
        self.renderer.set_style(self.mouse, StyleProp::Left, &px(left))?;
        self.renderer.set_style(self.mouse, StyleProp::Top, &px(top))?;
        self.highlight = (left, top);
        Ok(())
    }

    /// Panels in layer order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, layer: u32) -> Option<&Panel> {
        self.panels.iter().find(|p| p.layer() == layer)
    }

    /// Reopen a panel for configuration
    pub fn panel_mut(&mut self, layer: u32) -> Result<PanelMut<'_, R>> {
        let panel = self
            .panels
            .iter_mut()
            .find(|p| p.layer() == layer)
            .ok_or(DTermError::UnknownPanel(layer))?;
        Ok(PanelMut {
            panel,
            renderer: &mut self.renderer,
            metrics: &self.metrics,
        })
    }

    /// Highest layer index handed out so far
    pub fn layer_count(&self) -> u32 {
        self.layer_count
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Top-left of the highlight cell
    pub fn highlight(&self) -> (u32, u32) {
        self.highlight
    }

    pub fn mouse(&self) -> ElementId {
        self.mouse
    }

    pub fn host(&self) -> ElementId {
        self.host
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable renderer access, for hosts that lay out elements themselves
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// A panel borrowed together with the renderer it draws through
pub struct PanelMut<'a, R: Renderer> {
    panel: &'a mut Panel,
    renderer: &'a mut R,
    metrics: &'a GridMetrics,
}

impl<R: Renderer> PanelMut<'_, R> {
    /// Replace the visible text. Spaces and line breaks are preserved;
    /// nothing else is escaped.
    pub fn set_text(&mut self, text: &str) -> Result<&mut Self> {
        self.panel.set_text(&mut *self.renderer, text)?;
        Ok(self)
    }

    /// Frame the panel with `style`, redrawn on every resize
    pub fn set_border(&mut self, style: BorderStyle) -> Result<&mut Self> {
        self.panel.set_border(&mut *self.renderer, self.metrics, style)?;
        Ok(self)
    }

    /// Frame the panel with a style given by name
    pub fn set_border_named(&mut self, name: &str) -> Result<&mut Self> {
        self.set_border(name.parse()?)
    }

    pub fn layer(&self) -> u32 {
        self.panel.layer()
    }

    pub fn container(&self) -> ElementId {
        self.panel.container()
    }

    pub fn panel(&self) -> &Panel {
        self.panel
    }
}
