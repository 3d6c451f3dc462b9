//! DTerm Scene Configuration
//!
//! JSON description of a page to build: grid metrics, the host element and
//! the panels stacked on it. The default scene is the stock bootstrap page.
//!
//! ```json
//! {
//!   "host": {"id": "terminal", "width": 800, "height": 600},
//!   "panels": [{"width": 154, "height": 105, "border": "double", "text": "DDD"}]
//! }
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{GridMetrics, Surface};
use crate::error::Result;
use crate::renderer::{MemoryDom, Size};

/// Text the bootstrap page shows
pub const BOOTSTRAP_TEXT: &str = "DDD DDD DDDD\nDDD DDD DDDD\nDDD DDD DDD\n";

/// Host element description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default = "default_host_id")]
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            id: default_host_id(),
            width: 800,
            height: 600,
        }
    }
}

/// One panel of the scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Laid-out container size in pixels
    pub width: u32,
    pub height: u32,
    /// Border style name; omitted means no border
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// A whole scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub metrics: GridMetrics,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            metrics: GridMetrics::default(),
            host: HostConfig::default(),
            panels: vec![PanelConfig {
                width: 154,
                height: 105,
                border: Some("double".to_string()),
                text: BOOTSTRAP_TEXT.to_string(),
            }],
        }
    }
}

fn default_host_id() -> String {
    "terminal".to_string()
}

impl SceneConfig {
    /// Parse a scene from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let mut scene: SceneConfig = serde_json::from_str(json)?;
        scene.metrics = scene.metrics.validated()?;
        Ok(scene)
    }

    /// Load a scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading scene from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the scene on a fresh in-memory page
    pub fn build(&self) -> Result<Surface<MemoryDom>> {
        let mut dom = MemoryDom::new();
        dom.create_root(self.host.id.clone(), Size::new(self.host.width, self.host.height));
        let mut surface = Surface::attach(dom, self.metrics.clone(), &self.host.id)?;

        for spec in &self.panels {
            let container = surface.create_panel()?.container();
            surface
                .renderer_mut()
                .set_size(container, Size::new(spec.width, spec.height))?;

            let layer = surface.layer_count();
            let mut panel = surface.panel_mut(layer)?;
            if let Some(ref border) = spec.border {
                panel.set_border_named(border)?;
            }
            panel.set_text(&spec.text)?;
        }
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BorderStyle;
    use crate::error::DTermError;

    #[test]
    fn test_default_scene_is_bootstrap() {
        let surface = SceneConfig::default().build().unwrap();
        assert_eq!(surface.panels().len(), 1);
        let panel = &surface.panels()[0];
        assert_eq!(panel.border_style(), Some(BorderStyle::Double));
        assert_eq!(panel.text(), BOOTSTRAP_TEXT);
        // 154 x 105 px = 14 x 5 cells
        assert_eq!(panel.strips().unwrap().north, "╔════════════╗");
    }

    #[test]
    fn test_parse_scene() {
        let json = r#"{
            "metrics": {"unit_width": 8, "unit_height": 16},
            "host": {"width": 640, "height": 480},
            "panels": [
                {"width": 80, "height": 48, "border": "thin", "text": "hi"},
                {"width": 40, "height": 32}
            ]
        }"#;
        let scene = SceneConfig::from_json(json).unwrap();
        assert_eq!(scene.host.id, "terminal");
        assert_eq!(scene.metrics.unit_width(), 8);

        let surface = scene.build().unwrap();
        assert_eq!(surface.panels()[0].strips().unwrap().north, "┌────────┐");
        assert!(surface.panels()[1].border_style().is_none());
        assert_eq!(surface.padding().right, 16);
    }

    #[test]
    fn test_bad_scene_rejected() {
        assert!(matches!(
            SceneConfig::from_json(r#"{"metrics": {"unit_width": 0}}"#),
            Err(DTermError::InvalidMetrics { .. })
        ));
        assert!(matches!(
            SceneConfig::from_json("{not json"),
            Err(DTermError::Config(_))
        ));

        let scene = SceneConfig::from_json(
            r#"{"panels": [{"width": 50, "height": 50, "border": "bold"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            scene.build(),
            Err(DTermError::UnimplementedBorderStyle("bold"))
        ));
    }
}
