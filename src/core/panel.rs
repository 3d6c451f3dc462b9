//! DTerm Panel
//!
//! A panel is one stacked layer on the surface: a root container holding a
//! border layer, a text layer and a background layer. Panels are created by
//! `Surface::create_panel` and identified by their layer index.

use log::{debug, warn};

use super::glyphs::{BorderGlyphs, BorderStrips, BorderStyle};
use super::metrics::{px, GridMetrics};
use crate::error::Result;
use crate::renderer::{classes, ElementId, Renderer, Size, StyleProp};
use crate::text::escape_whitespace;

/// Border and text layers stack at `layer * BORDER_LAYER_SCALE`, so any
/// higher panel's border occludes every lower panel's interior.
pub const BORDER_LAYER_SCALE: u64 = 1_000_000;

/// The four edge strip elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeElements {
    pub north: ElementId,
    pub south: ElementId,
    pub east: ElementId,
    pub west: ElementId,
}

#[derive(Debug, Clone)]
struct PanelBorder {
    style: BorderStyle,
    glyphs: &'static BorderGlyphs,
    edges: EdgeElements,
    /// Last drawn glyph text, `None` when the panel was too small
    strips: Option<BorderStrips>,
}

/// One bordered text region
#[derive(Debug, Clone)]
pub struct Panel {
    layer: u32,
    container: ElementId,
    border: ElementId,
    term: ElementId,
    background: ElementId,
    text: String,
    frame: Option<PanelBorder>,
    measured: Size,
}

impl Panel {
    /// Build the element structure for a panel at `layer`.
    /// The container is left detached; the surface appends it.
    pub(crate) fn new<R: Renderer>(renderer: &mut R, layer: u32) -> Result<Self> {
        let container = renderer.create_with_class(classes::CONTAINER)?;
        let border = renderer.create_with_class(classes::BORDER)?;
        let term = renderer.create_with_class(classes::TERM)?;
        let background = renderer.create_with_class(classes::BACKGROUND)?;

        let base = layer.to_string();
        let raised = (u64::from(layer) * BORDER_LAYER_SCALE).to_string();
        renderer.set_style(container, StyleProp::ZIndex, &base)?;
        renderer.set_style(border, StyleProp::ZIndex, &raised)?;
        renderer.set_style(term, StyleProp::ZIndex, &raised)?;
        renderer.set_style(background, StyleProp::ZIndex, &base)?;

        renderer.append_child(container, border)?;
        renderer.append_child(container, term)?;
        renderer.append_child(container, background)?;

        Ok(Self {
            layer,
            container,
            border,
            term,
            background,
            text: String::new(),
            frame: None,
            measured: Size::default(),
        })
    }

    /// Layer index (1-based, never reused)
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Root container element
    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn border_layer(&self) -> ElementId {
        self.border
    }

    pub fn text_layer(&self) -> ElementId {
        self.term
    }

    pub fn background_layer(&self) -> ElementId {
        self.background
    }

    /// Text as last passed to `set_text`, before escaping
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn border_style(&self) -> Option<BorderStyle> {
        self.frame.as_ref().map(|f| f.style)
    }

    /// Edge strip elements, once a border has been set
    pub fn edges(&self) -> Option<EdgeElements> {
        self.frame.as_ref().map(|f| f.edges)
    }

    /// Glyph text of the last border draw
    pub fn strips(&self) -> Option<&BorderStrips> {
        self.frame.as_ref().and_then(|f| f.strips.as_ref())
    }

    /// Container size measured at the last border draw
    pub fn measured(&self) -> Size {
        self.measured
    }

    pub(crate) fn set_text<R: Renderer>(&mut self, renderer: &mut R, text: &str) -> Result<()> {
        renderer.set_content(self.term, &escape_whitespace(text))?;
        self.text = text.to_string();
        Ok(())
    }

    /// Reserve the border margin, build the edge strips and draw them.
    /// An unusable style is rejected before anything is touched.
    pub(crate) fn set_border<R: Renderer>(
        &mut self,
        renderer: &mut R,
        metrics: &GridMetrics,
        style: BorderStyle,
    ) -> Result<()> {
        let glyphs = style.glyphs()?;

        let uw = metrics.unit_width();
        let uh = metrics.unit_height();
        renderer.set_style(self.term, StyleProp::Top, &px(uh))?;
        renderer.set_style(self.term, StyleProp::Bottom, &px(uh))?;
        renderer.set_style(self.term, StyleProp::Left, &px(uw * 2))?;
        renderer.set_style(self.term, StyleProp::Right, &px(uw * 2))?;

        let edges = match self.frame {
            Some(ref frame) => frame.edges,
            None => {
                let edges = EdgeElements {
                    north: renderer.create_with_class(classes::BORDER_N)?,
                    south: renderer.create_with_class(classes::BORDER_S)?,
                    east: renderer.create_with_class(classes::BORDER_E)?,
                    west: renderer.create_with_class(classes::BORDER_W)?,
                };
                for el in [edges.north, edges.south, edges.east, edges.west] {
                    renderer.append_child(self.border, el)?;
                }
                edges
            }
        };

        debug!("Panel {} border set to {}", self.layer, style);
        self.frame = Some(PanelBorder {
            style,
            glyphs,
            edges,
            strips: None,
        });
        self.draw_border(renderer, metrics)
    }

    /// Resize handler: redraw the border if the panel has one
    pub(crate) fn on_resize<R: Renderer>(&mut self, renderer: &mut R, metrics: &GridMetrics) -> Result<()> {
        if self.frame.is_some() {
            self.draw_border(renderer, metrics)?;
        }
        Ok(())
    }

    /// Measure the container and redraw every strip from scratch
    fn draw_border<R: Renderer>(&mut self, renderer: &mut R, metrics: &GridMetrics) -> Result<()> {
        let size = renderer.measure(self.container)?;
        self.measured = size;

        let Some(frame) = self.frame.as_mut() else {
            return Ok(());
        };
        let edges = frame.edges;
        let (cols, rows) = metrics.cells(size.width, size.height);

        let Some(strips) = BorderStrips::compose(frame.glyphs, cols, rows) else {
            warn!(
                "Panel {} is {}x{} cells, too small for a border; strips cleared",
                self.layer, cols, rows
            );
            for el in [edges.north, edges.south, edges.east, edges.west] {
                renderer.set_content(el, "")?;
            }
            frame.strips = None;
            return Ok(());
        };

        let uw = metrics.unit_width();
        let uh = metrics.unit_height();
        let far_x = px(uw * (cols - 1));
        let far_y = px(uh * (rows - 1));

        renderer.set_style(edges.north, StyleProp::Bottom, &far_y)?;
        renderer.set_style(edges.south, StyleProp::Top, &far_y)?;
        renderer.set_style(edges.east, StyleProp::Left, &far_x)?;
        renderer.set_style(edges.west, StyleProp::Right, &far_x)?;
        renderer.set_style(edges.north, StyleProp::Height, &px(uh))?;
        renderer.set_style(edges.south, StyleProp::Height, &px(uh))?;
        renderer.set_style(edges.east, StyleProp::Width, &px(uw))?;
        renderer.set_style(edges.west, StyleProp::Width, &px(uw))?;

        renderer.set_content(edges.north, &strips.north)?;
        renderer.set_content(edges.south, &strips.south)?;
        renderer.set_content(edges.east, &strips.east)?;
        renderer.set_content(edges.west, &strips.west)?;

        debug!("Panel {} border drawn at {}x{} cells", self.layer, cols, rows);
        frame.strips = Some(strips);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DTermError;
    use crate::renderer::MemoryDom;

    fn panel_with_size(dom: &mut MemoryDom, layer: u32, w: u32, h: u32) -> Panel {
        let panel = Panel::new(dom, layer).unwrap();
        dom.set_size(panel.container(), Size::new(w, h)).unwrap();
        panel
    }

    #[test]
    fn test_layer_z_indices() {
        let mut dom = MemoryDom::new();
        let panel = Panel::new(&mut dom, 3).unwrap();
        assert_eq!(dom.style(panel.container(), StyleProp::ZIndex), Some("3"));
        assert_eq!(dom.style(panel.border_layer(), StyleProp::ZIndex), Some("3000000"));
        assert_eq!(dom.style(panel.text_layer(), StyleProp::ZIndex), Some("3000000"));
        assert_eq!(dom.style(panel.background_layer(), StyleProp::ZIndex), Some("3"));
        assert_eq!(
            dom.children(panel.container()),
            &[panel.border_layer(), panel.text_layer(), panel.background_layer()]
        );
    }

    #[test]
    fn test_set_text_escapes() {
        let mut dom = MemoryDom::new();
        let mut panel = Panel::new(&mut dom, 1).unwrap();
        panel.set_text(&mut dom, "A  B\nC").unwrap();
        assert_eq!(dom.content(panel.text_layer()), Some("A&nbsp;&nbsp;B<br>C"));
        assert_eq!(panel.text(), "A  B\nC");
    }

    #[test]
    fn test_set_border_draws_strips() {
        let mut dom = MemoryDom::new();
        let metrics = GridMetrics::default();
        // 10 x 5 cells
        let mut panel = panel_with_size(&mut dom, 1, 110, 105);
        panel.set_border(&mut dom, &metrics, BorderStyle::Thin).unwrap();

        let term = panel.text_layer();
        assert_eq!(dom.style(term, StyleProp::Top), Some("21px"));
        assert_eq!(dom.style(term, StyleProp::Bottom), Some("21px"));
        assert_eq!(dom.style(term, StyleProp::Left), Some("22px"));
        assert_eq!(dom.style(term, StyleProp::Right), Some("22px"));

        let edges = panel.edges().unwrap();
        assert_eq!(dom.content(edges.north), Some("┌────────┐"));
        assert_eq!(dom.content(edges.south), Some("└────────┘"));
        assert_eq!(dom.content(edges.east), Some("┐│││┘"));
        assert_eq!(dom.content(edges.west), Some("┌│││└"));

        assert_eq!(dom.style(edges.north, StyleProp::Bottom), Some("84px"));
        assert_eq!(dom.style(edges.south, StyleProp::Top), Some("84px"));
        assert_eq!(dom.style(edges.east, StyleProp::Left), Some("99px"));
        assert_eq!(dom.style(edges.west, StyleProp::Right), Some("99px"));
        assert_eq!(dom.style(edges.north, StyleProp::Height), Some("21px"));
        assert_eq!(dom.style(edges.east, StyleProp::Width), Some("11px"));

        assert_eq!(
            dom.children(panel.border_layer()),
            &[edges.north, edges.south, edges.east, edges.west]
        );
        assert_eq!(panel.measured(), Size::new(110, 105));
    }

    #[test]
    fn test_resize_redraws_in_full() {
        let mut dom = MemoryDom::new();
        let metrics = GridMetrics::default();
        let mut panel = panel_with_size(&mut dom, 1, 44, 63);
        panel.set_border(&mut dom, &metrics, BorderStyle::Double).unwrap();
        assert_eq!(panel.strips().unwrap().north, "╔══╗");

        dom.set_size(panel.container(), Size::new(66, 84)).unwrap();
        panel.on_resize(&mut dom, &metrics).unwrap();
        let edges = panel.edges().unwrap();
        assert_eq!(dom.content(edges.north), Some("╔════╗"));
        assert_eq!(dom.content(edges.west), Some("╔║║╚"));
        assert_eq!(dom.style(edges.south, StyleProp::Top), Some("63px"));
    }

    #[test]
    fn test_resize_without_border_is_noop() {
        let mut dom = MemoryDom::new();
        let metrics = GridMetrics::default();
        let mut panel = panel_with_size(&mut dom, 1, 44, 63);
        panel.on_resize(&mut dom, &metrics).unwrap();
        assert!(panel.edges().is_none());
        assert!(dom.children(panel.border_layer()).is_empty());
    }

    #[test]
    fn test_unimplemented_style_leaves_panel_untouched() {
        let mut dom = MemoryDom::new();
        let metrics = GridMetrics::default();
        let mut panel = panel_with_size(&mut dom, 1, 110, 105);
        let err = panel.set_border(&mut dom, &metrics, BorderStyle::Bold).unwrap_err();
        assert!(matches!(err, DTermError::UnimplementedBorderStyle("bold")));
        assert!(panel.border_style().is_none());
        assert_eq!(dom.style(panel.text_layer(), StyleProp::Top), None);
        assert!(dom.children(panel.border_layer()).is_empty());
    }

    #[test]
    fn test_restyle_reuses_strips() {
        let mut dom = MemoryDom::new();
        let metrics = GridMetrics::default();
        let mut panel = panel_with_size(&mut dom, 1, 33, 42);
        panel.set_border(&mut dom, &metrics, BorderStyle::Double).unwrap();
        let first = panel.edges().unwrap();
        panel.set_border(&mut dom, &metrics, BorderStyle::Thin).unwrap();
        assert_eq!(panel.edges().unwrap(), first);
        assert_eq!(dom.children(panel.border_layer()).len(), 4);
        assert_eq!(dom.content(first.north), Some("┌─┐"));
        assert_eq!(panel.border_style(), Some(BorderStyle::Thin));
    }

    #[test]
    fn test_too_small_clears_strips() {
        let mut dom = MemoryDom::new();
        let metrics = GridMetrics::default();
        let mut panel = panel_with_size(&mut dom, 1, 110, 105);
        panel.set_border(&mut dom, &metrics, BorderStyle::Thin).unwrap();

        dom.set_size(panel.container(), Size::new(15, 105)).unwrap();
        panel.on_resize(&mut dom, &metrics).unwrap();
        assert!(panel.strips().is_none());
        assert_eq!(dom.content(panel.edges().unwrap().north), Some(""));
    }
}
