use crate::ports::outbound::SceneFormatter;
use crate::shared::Result;
use crate::visualization::domain::{DependencyNode, Scene};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneDocument<'s, 'a> {
    metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<&'a DependencyNode>,
    scene: &'s Scene<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    generated_at: String,
    tool: Tool,
    node_count: usize,
    overlapping_count: usize,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

/// JsonFormatter adapter serializing the scene graph
///
/// This adapter implements the SceneFormatter port. The output holds both
/// the source tree and every drawable, so other renderers can consume it.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneFormatter for JsonFormatter {
    fn format(&self, scene: &Scene<'_>) -> Result<String> {
        let document = SceneDocument {
            metadata: Metadata {
                generated_at: Utc::now().to_rfc3339(),
                tool: Tool {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                node_count: scene.nodes.len(),
                overlapping_count: scene.overlapping_nodes().count(),
            },
            tree: scene.root().map(|root| root.node),
            scene,
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
