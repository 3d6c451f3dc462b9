//! In-memory DOM Renderer
//!
//! A retained element tree standing in for a page. Sizes are set by the
//! caller (playing the part of the browser's layout engine) and the whole
//! tree can be serialized to HTML.

use std::fmt::Write;

use super::{ElementId, Renderer, Size, StyleProp};
use crate::error::{DTermError, Result};

/// One element in the tree
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Style in first-set order
    pub style: Vec<(StyleProp, String)>,
    pub content: Option<String>,
    pub children: Vec<ElementId>,
    pub parent: Option<ElementId>,
    pub size: Size,
}

impl Node {
    /// Current value of a style property
    pub fn style(&self, prop: StyleProp) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory renderer
#[derive(Debug, Default)]
pub struct MemoryDom {
    nodes: Vec<Node>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element with an identifier and a laid-out size.
    /// This is how a host page element comes into existence.
    pub fn create_root(&mut self, id: impl Into<String>, size: Size) -> ElementId {
        let el = self.create_element();
        self.nodes[el.0].id = Some(id.into());
        self.nodes[el.0].size = size;
        el
    }

    /// Set the laid-out size of an element
    pub fn set_size(&mut self, el: ElementId, size: Size) -> Result<()> {
        self.node_mut(el)?.size = size;
        Ok(())
    }

    pub fn node(&self, el: ElementId) -> Result<&Node> {
        self.nodes.get(el.0).ok_or(DTermError::UnknownElement(el))
    }

    fn node_mut(&mut self, el: ElementId) -> Result<&mut Node> {
        self.nodes.get_mut(el.0).ok_or(DTermError::UnknownElement(el))
    }

    /// Style value shortcut for tests and snapshots
    pub fn style(&self, el: ElementId, prop: StyleProp) -> Option<&str> {
        self.nodes.get(el.0).and_then(|n| n.style(prop))
    }

    /// Content shortcut
    pub fn content(&self, el: ElementId) -> Option<&str> {
        self.nodes.get(el.0).and_then(|n| n.content.as_deref())
    }

    pub fn children(&self, el: ElementId) -> &[ElementId] {
        self.nodes
            .get(el.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Serialize an element and its subtree as HTML
    pub fn to_html(&self, el: ElementId) -> Result<String> {
        let mut out = String::new();
        self.write_html(el, 0, &mut out)?;
        Ok(out)
    }

    fn write_html(&self, el: ElementId, depth: usize, out: &mut String) -> Result<()> {
        let node = self.node(el)?;
        let indent = "  ".repeat(depth);

        out.push_str(&indent);
        out.push_str("<div");
        if let Some(ref id) = node.id {
            let _ = write!(out, " id=\"{}\"", id);
        }
        if !node.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", node.classes.join(" "));
        }
        if !node.style.is_empty() {
            let style: Vec<String> = node
                .style
                .iter()
                .map(|(p, v)| format!("{}: {}", p.css_name(), v.replace('"', "'")))
                .collect();
            let _ = write!(out, " style=\"{};\"", style.join("; "));
        }
        out.push('>');

        if node.children.is_empty() {
            // Content is trusted markup
            out.push_str(node.content.as_deref().unwrap_or(""));
        } else {
            out.push('\n');
            if let Some(ref content) = node.content {
                let _ = writeln!(out, "{}  {}", indent, content);
            }
            for &child in &node.children {
                self.write_html(child, depth + 1, out)?;
            }
            out.push_str(&indent);
        }
        out.push_str("</div>\n");
        Ok(())
    }
}

impl Renderer for MemoryDom {
    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(ElementId)
    }

    fn create_element(&mut self) -> ElementId {
        self.nodes.push(Node::default());
        ElementId(self.nodes.len() - 1)
    }

    fn add_class(&mut self, el: ElementId, class: &str) -> Result<()> {
        let node = self.node_mut(el)?;
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    fn set_style(&mut self, el: ElementId, prop: StyleProp, value: &str) -> Result<()> {
        let node = self.node_mut(el)?;
        match node.style.iter_mut().find(|(p, _)| *p == prop) {
            Some(entry) => entry.1 = value.to_string(),
            None => node.style.push((prop, value.to_string())),
        }
        Ok(())
    }

    fn set_content(&mut self, el: ElementId, markup: &str) -> Result<()> {
        self.node_mut(el)?.content = Some(markup.to_string());
        Ok(())
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        // Walk up from the parent; meeting the child means a cycle
        let mut cursor = Some(parent);
        while let Some(el) = cursor {
            if el == child {
                return Err(DTermError::CyclicAppend { parent, child });
            }
            cursor = self.node(el)?.parent;
        }
        let old_parent = self.node(child)?.parent;
        if let Some(old) = old_parent {
            self.node_mut(old)?.children.retain(|&c| c != child);
        }
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn measure(&self, el: ElementId) -> Result<Size> {
        Ok(self.node(el)?.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_root_by_id() {
        let mut dom = MemoryDom::new();
        let host = dom.create_root("terminal", Size::new(400, 300));
        assert_eq!(dom.element_by_id("terminal"), Some(host));
        assert_eq!(dom.element_by_id("missing"), None);
        assert_eq!(dom.measure(host).unwrap(), Size::new(400, 300));
    }

    #[test]
    fn test_style_replaces_value() {
        let mut dom = MemoryDom::new();
        let el = dom.create_element();
        dom.set_style(el, StyleProp::Left, "11px").unwrap();
        dom.set_style(el, StyleProp::Top, "0px").unwrap();
        dom.set_style(el, StyleProp::Left, "22px").unwrap();
        let node = dom.node(el).unwrap();
        assert_eq!(node.style.len(), 2);
        assert_eq!(node.style(StyleProp::Left), Some("22px"));
    }

    #[test]
    fn test_append_moves_child() {
        let mut dom = MemoryDom::new();
        let a = dom.create_element();
        let b = dom.create_element();
        let child = dom.create_element();
        dom.append_child(a, child).unwrap();
        dom.append_child(a, child).unwrap();
        assert_eq!(dom.children(a), &[child]);
        dom.append_child(b, child).unwrap();
        assert!(dom.children(a).is_empty());
        assert_eq!(dom.children(b), &[child]);
    }

    #[test]
    fn test_append_rejects_cycles() {
        let mut dom = MemoryDom::new();
        let root = dom.create_element();
        let mid = dom.create_element();
        let leaf = dom.create_element();
        dom.append_child(root, mid).unwrap();
        dom.append_child(mid, leaf).unwrap();

        assert!(matches!(
            dom.append_child(leaf, leaf),
            Err(DTermError::CyclicAppend { .. })
        ));
        assert!(matches!(
            dom.append_child(leaf, root),
            Err(DTermError::CyclicAppend { parent, child }) if parent == leaf && child == root
        ));
        assert_eq!(dom.children(root), &[mid]);
        assert_eq!(dom.children(leaf), &[] as &[ElementId]);
        assert!(dom.to_html(root).is_ok());
    }

    #[test]
    fn test_unknown_element() {
        let mut dom = MemoryDom::new();
        let bogus = ElementId(42);
        assert!(matches!(
            dom.set_content(bogus, "x"),
            Err(DTermError::UnknownElement(ElementId(42)))
        ));
        assert!(dom.measure(bogus).is_err());
    }

    #[test]
    fn test_to_html() {
        let mut dom = MemoryDom::new();
        let host = dom.create_root("terminal", Size::new(10, 10));
        let child = dom.create_with_class("dterm-term").unwrap();
        dom.set_style(child, StyleProp::ZIndex, "1").unwrap();
        dom.set_content(child, "a&nbsp;b<br>").unwrap();
        dom.append_child(host, child).unwrap();

        let html = dom.to_html(host).unwrap();
        assert_eq!(
            html,
            "<div id=\"terminal\">\n  <div class=\"dterm-term\" style=\"z-index: 1;\">a&nbsp;b<br></div>\n</div>\n"
        );
    }
}
