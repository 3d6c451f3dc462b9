//! Legacy single-panel terminal
//!
//! The pre-surface API: bind to one element by id and write text into it.
//! No borders, no grid, no panels. Kept for pages still using it.

use log::error;

use crate::renderer::{ElementId, Renderer};
use crate::text::escape_whitespace;

/// Unit cell of the legacy layout
pub const LEGACY_UNIT_WIDTH: u32 = 10;
pub const LEGACY_UNIT_HEIGHT: u32 = 20;

/// Single bound element taking escaped text
#[derive(Debug, Clone, Default)]
pub struct LegacyTerm {
    term: Option<ElementId>,
}

impl LegacyTerm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind to the element with identifier `id`. Returns whether it was found.
    pub fn bind<R: Renderer>(&mut self, renderer: &R, id: &str) -> bool {
        self.term = renderer.element_by_id(id);
        self.term.is_some()
    }

    pub fn element(&self) -> Option<ElementId> {
        self.term
    }

    /// Unit cell size as `(width, height)`
    pub fn unit(&self) -> (u32, u32) {
        (LEGACY_UNIT_WIDTH, LEGACY_UNIT_HEIGHT)
    }

    /// Write text into the bound element.
    /// Returns `false` (after logging) when nothing is bound or the write failed.
    pub fn set_text<R: Renderer>(&self, renderer: &mut R, text: &str) -> bool {
        let Some(term) = self.term else {
            error!("No terminal element bound; call bind(id) first");
            return false;
        };
        match renderer.set_content(term, &escape_whitespace(text)) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to write terminal text: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{MemoryDom, Size};

    #[test]
    fn test_unbound_reports_failure() {
        let mut dom = MemoryDom::new();
        let term = LegacyTerm::new();
        assert!(!term.set_text(&mut dom, "hello"));
    }

    #[test]
    fn test_bind_and_set_text() {
        let mut dom = MemoryDom::new();
        let el = dom.create_root("term", Size::new(100, 100));
        let mut term = LegacyTerm::new();
        assert!(!term.bind(&dom, "other"));
        assert!(term.bind(&dom, "term"));
        assert_eq!(term.element(), Some(el));
        assert!(term.set_text(&mut dom, "a b\r\nc"));
        assert_eq!(dom.content(el), Some("a&nbsp;b<br>c"));
        assert_eq!(term.unit(), (10, 20));
    }
}
