use crate::visualization::domain::{CanvasConfig, OverlapTable, PositionedNode};

/// OverlapDetector flags nodes drawn too close to each other
///
/// Every unordered pair is compared, so the cost is quadratic in node count.
/// That is acceptable only because trees are capped by the search depth and
/// the node limit enforced when the API response is validated.
pub struct OverlapDetector {
    threshold: f64,
}

impl OverlapDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Detector whose threshold is the rendered node diameter
    pub fn for_canvas(canvas: &CanvasConfig) -> Self {
        Self::new(canvas.node_diameter)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn detect(&self, nodes: &[PositionedNode<'_>]) -> OverlapTable {
        let mut table = OverlapTable::new(nodes.len());

        for (i, a) in nodes.iter().enumerate() {
            let pa = a.position();
            for (j, b) in nodes.iter().enumerate().skip(i + 1) {
                if pa.distance_to(&b.position()) < self.threshold {
                    table.record_pair((i, &a.node.name), (j, &b.node.name));
                }
            }
        }

        table
    }
}
