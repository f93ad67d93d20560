use super::{OverlapDetector, TreeLayoutEngine};
use crate::visualization::domain::{
    CanvasConfig, DependencyNode, LinkDrawable, NodeDrawable, OverlapTable, Point, Scene,
    TreeLayout,
};
use crate::visualization::policies::StatusPalette;

/// SceneBuilder turns a positioned tree into drawable data
///
/// The builder keeps no state between calls: every `render` lays the tree
/// out again and produces a brand-new scene.
pub struct SceneBuilder {
    canvas: CanvasConfig,
}

impl SceneBuilder {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Full render pass: layout, overlap detection and scene assembly
    pub fn render<'a>(&self, root: &'a DependencyNode) -> Scene<'a> {
        let layout = TreeLayoutEngine::for_canvas(&self.canvas).layout(root);
        let overlaps = OverlapDetector::for_canvas(&self.canvas).detect(&layout.nodes);
        self.build(&layout, &overlaps)
    }

    pub fn build<'a>(&self, layout: &TreeLayout<'a>, overlaps: &OverlapTable) -> Scene<'a> {
        let origin = Point::new(self.canvas.margin.left, self.canvas.margin.top);
        let center_of = |index: usize| {
            let node = &layout.nodes[index];
            origin.offset(node.x, node.y)
        };

        let links = layout
            .links
            .iter()
            .map(|link| LinkDrawable {
                source: link.source,
                target: link.target,
                from: center_of(link.source),
                to: center_of(link.target),
            })
            .collect();

        let nodes = layout
            .nodes
            .iter()
            .enumerate()
            .map(|(index, positioned)| NodeDrawable {
                index,
                depth: positioned.depth,
                center: center_of(index),
                diameter: self.canvas.node_diameter,
                fill: StatusPalette::fill_for(positioned.node.status),
                status: positioned.node.status,
                label: positioned.node.display_name(),
                version: positioned.node.version.clone(),
                sibling_count: positioned.sibling_count,
                sibling_index: positioned.sibling_index,
                overlap_count: overlaps.count_at(index),
                node: positioned.node,
            })
            .collect();

        Scene {
            width: self.canvas.width,
            height: self.canvas.height,
            margin: self.canvas.margin,
            links,
            nodes,
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
