//! DTerm Renderer Module
//!
//! The layout code never touches a display directly. It writes through the
//! `Renderer` capability: create elements, tag them with style classes, set
//! pixel geometry, set content, and measure what the display laid out.

pub mod dom;

pub use dom::MemoryDom;

use crate::error::Result;

/// Opaque handle to an element owned by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Rendered size of an element in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Style properties the engine sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Top,
    Right,
    Bottom,
    Left,
    Width,
    Height,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    ZIndex,
    FontSize,
    FontFamily,
}

impl StyleProp {
    /// CSS property name
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProp::Top => "top",
            StyleProp::Right => "right",
            StyleProp::Bottom => "bottom",
            StyleProp::Left => "left",
            StyleProp::Width => "width",
            StyleProp::Height => "height",
            StyleProp::PaddingTop => "padding-top",
            StyleProp::PaddingRight => "padding-right",
            StyleProp::PaddingBottom => "padding-bottom",
            StyleProp::PaddingLeft => "padding-left",
            StyleProp::ZIndex => "z-index",
            StyleProp::FontSize => "font-size",
            StyleProp::FontFamily => "font-family",
        }
    }
}

/// Style class hooks an external stylesheet is expected to style
pub mod classes {
    pub const TERMINAL: &str = "dterm-terminal";
    pub const CONTAINER: &str = "dterm-container";
    pub const BORDER: &str = "dterm-border";
    pub const BORDER_N: &str = "dterm-border-n";
    pub const BORDER_S: &str = "dterm-border-s";
    pub const BORDER_E: &str = "dterm-border-e";
    pub const BORDER_W: &str = "dterm-border-w";
    pub const TERM: &str = "dterm-term";
    pub const BACKGROUND: &str = "dterm-bg";
    pub const MOUSE: &str = "dterm-mouse";
}

/// Trait for display backends
pub trait Renderer {
    /// Find an existing element by identifier
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Create a detached element
    fn create_element(&mut self) -> ElementId;

    /// Add a style class
    fn add_class(&mut self, el: ElementId, class: &str) -> Result<()>;

    /// Set a style property, replacing any previous value
    fn set_style(&mut self, el: ElementId, prop: StyleProp, value: &str) -> Result<()>;

    /// Replace the element's content with markup
    fn set_content(&mut self, el: ElementId, markup: &str) -> Result<()>;

    /// Append `child` to `parent`. Appending an existing child moves it to the end.
    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()>;

    /// Current rendered size
    fn measure(&self, el: ElementId) -> Result<Size>;

    /// Create an element already tagged with a class
    fn create_with_class(&mut self, class: &str) -> Result<ElementId> {
        let el = self.create_element();
        self.add_class(el, class)?;
        Ok(el)
    }
}
