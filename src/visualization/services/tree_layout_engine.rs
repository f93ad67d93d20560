use crate::visualization::domain::{
    CanvasConfig, DependencyNode, Link, PositionedNode, TreeLayout,
};

/// TreeLayoutEngine places every node of a dependency tree on the canvas
///
/// Depth maps to evenly spaced horizontal bands from top to bottom. Leaves
/// are spread left to right in `dependencies` order; neighbouring leaves
/// under the same parent are one unit apart, leaves under different parents
/// two units. Each parent sits centered over its children. The resulting
/// horizontal extent is scaled to the available width.
///
/// The engine is a pure function of the tree's structure: laying out the
/// same tree twice yields identical coordinates.
pub struct TreeLayoutEngine {
    width: f64,
    height: f64,
}

/// Pre-order traversal entry: (node, parent index, depth, sibling count, sibling index)
type PendingNode<'a> = (&'a DependencyNode, Option<usize>, usize, usize, usize);

impl TreeLayoutEngine {
    /// Spacing between adjacent leaves sharing a parent
    pub const SIBLING_SEPARATION: f64 = 1.0;

    /// Spacing between adjacent leaves with different parents
    pub const COUSIN_SEPARATION: f64 = 2.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Engine covering the canvas area inside the margins
    pub fn for_canvas(canvas: &CanvasConfig) -> Self {
        Self::new(canvas.inner_width(), canvas.inner_height())
    }

    pub fn layout<'a>(&self, root: &'a DependencyNode) -> TreeLayout<'a> {
        let (mut nodes, links) = Self::flatten(root);
        let children = Self::children_by_parent(&nodes);
        let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);

        let relative_x = Self::relative_positions(&nodes, &children);
        let (x0, x1) = Self::horizontal_extent(&nodes, &children, &relative_x);
        let scale = self.width / (x1 - x0);

        for (index, node) in nodes.iter_mut().enumerate() {
            node.x = (relative_x[index] - x0) * scale;
            node.y = if max_depth == 0 {
                0.0
            } else {
                node.depth as f64 / max_depth as f64 * self.height
            };
        }

        TreeLayout {
            nodes,
            links,
            max_depth,
        }
    }

    /// Pre-order flattening with an explicit stack
    fn flatten(root: &DependencyNode) -> (Vec<PositionedNode<'_>>, Vec<Link>) {
        let mut nodes = Vec::with_capacity(root.node_count());
        let mut links = Vec::new();
        let mut stack: Vec<PendingNode<'_>> = vec![(root, None, 0, 1, 0)];

        while let Some((node, parent, depth, sibling_count, sibling_index)) = stack.pop() {
            let index = nodes.len();
            nodes.push(PositionedNode {
                node,
                depth,
                parent,
                x: 0.0,
                y: 0.0,
                sibling_count,
                sibling_index,
            });
            if let Some(source) = parent {
                links.push(Link {
                    source,
                    target: index,
                });
            }

            // Reversed so the first child is popped first
            let kids: Vec<&DependencyNode> = node.children().collect();
            for (i, child) in kids.iter().enumerate().rev() {
                stack.push((*child, Some(index), depth + 1, kids.len(), i));
            }
        }

        (nodes, links)
    }

    fn children_by_parent(nodes: &[PositionedNode<'_>]) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); nodes.len()];
        for (index, node) in nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                children[parent].push(index);
            }
        }
        children
    }

    fn separation(nodes: &[PositionedNode<'_>], a: usize, b: usize) -> f64 {
        if nodes[a].parent == nodes[b].parent {
            Self::SIBLING_SEPARATION
        } else {
            Self::COUSIN_SEPARATION
        }
    }

    /// Unscaled x for every node: leaves first, then parents bottom-up
    fn relative_positions(nodes: &[PositionedNode<'_>], children: &[Vec<usize>]) -> Vec<f64> {
        let mut x = vec![0.0; nodes.len()];

        let mut previous_leaf: Option<usize> = None;
        for index in 0..nodes.len() {
            if children[index].is_empty() {
                x[index] = match previous_leaf {
                    Some(prev) => x[prev] + Self::separation(nodes, prev, index),
                    None => 0.0,
                };
                previous_leaf = Some(index);
            }
        }

        // Children always have larger indices than their parent in pre-order
        for index in (0..nodes.len()).rev() {
            let kids = &children[index];
            if !kids.is_empty() {
                x[index] = kids.iter().map(|&k| x[k]).sum::<f64>() / kids.len() as f64;
            }
        }

        x
    }

    /// Leftmost and rightmost bounds, padded by half a separation on each side
    fn horizontal_extent(
        nodes: &[PositionedNode<'_>],
        children: &[Vec<usize>],
        x: &[f64],
    ) -> (f64, f64) {
        let mut leaves = (0..nodes.len()).filter(|&i| children[i].is_empty());
        let left = leaves.next().unwrap_or(0);
        let right = leaves.last().unwrap_or(left);

        let x0 = x[left] - Self::separation(nodes, left, right) / 2.0;
        let x1 = x[right] + Self::separation(nodes, right, left) / 2.0;
        (x0, x1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::domain::Point;

    const EPSILON: f64 = 1e-9;

    fn leaf(name: &str) -> DependencyNode {
        DependencyNode::new(name, "1.0.0")
    }

    fn engine() -> TreeLayoutEngine {
        TreeLayoutEngine::new(920.0, 400.0)
    }

    /// Builds a pseudo-random tree from a seed, bounded in depth and size
    fn generated_tree(seed: u64, max_depth: usize, max_nodes: usize) -> DependencyNode {
        fn grow(
            name: String,
            depth: usize,
            max_depth: usize,
            budget: &mut usize,
            state: &mut u64,
        ) -> DependencyNode {
            let mut node = DependencyNode::new(name.clone(), "1.0.0");
            if depth == max_depth {
                return node;
            }
            *state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let fanout = ((*state >> 33) % 4) as usize;
            for i in 0..fanout {
                if *budget == 0 {
                    break;
                }
                *budget -= 1;
                let child = grow(format!("{}-{}", name, i), depth + 1, max_depth, budget, state);
                node = node.with_dependency(child);
            }
            node
        }

        let mut budget = max_nodes - 1;
        let mut state = seed;
        grow("root".to_string(), 0, max_depth, &mut budget, &mut state)
    }

    #[test]
    fn test_single_node_is_centered() {
        let root = leaf("solo");
        let layout = engine().layout(&root);

        assert_eq!(layout.len(), 1);
        assert!((layout.nodes[0].x - 460.0).abs() < EPSILON);
        assert_eq!(layout.nodes[0].y, 0.0);
        assert!(layout.links.is_empty());
    }

    #[test]
    fn test_two_children_symmetric_about_center() {
        let root = leaf("root")
            .with_dependency(leaf("a"))
            .with_dependency(leaf("b"));
        let layout = engine().layout(&root);

        let root_pos = &layout.nodes[0];
        let a = &layout.nodes[1];
        let b = &layout.nodes[2];
        assert!((root_pos.x - 460.0).abs() < EPSILON);
        assert!((a.x - 230.0).abs() < EPSILON);
        assert!((b.x - 690.0).abs() < EPSILON);
        assert!(((root_pos.x - a.x) - (b.x - root_pos.x)).abs() < EPSILON);
        assert_eq!(a.y, 400.0);
        assert_eq!(b.y, 400.0);
        assert_eq!(layout.links.len(), 2);
        assert_eq!(layout.links[0], Link { source: 0, target: 1 });
        assert_eq!(layout.links[1], Link { source: 0, target: 2 });
    }

    #[test]
    fn test_siblings_follow_insertion_order() {
        let root = leaf("root")
            .with_dependency(leaf("zeta"))
            .with_dependency(leaf("alpha"))
            .with_dependency(leaf("mid"));
        let layout = engine().layout(&root);

        let names: Vec<&str> = layout.children_of(0).map(|n| n.node.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        let xs: Vec<f64> = layout.children_of(0).map(|n| n.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        let indices: Vec<usize> = layout.children_of(0).map(|n| n.sibling_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(layout.children_of(0).all(|n| n.sibling_count == 3));
    }

    #[test]
    fn test_cousins_are_further_apart_than_siblings() {
        let root = leaf("root")
            .with_dependency(leaf("a").with_dependency(leaf("a1")).with_dependency(leaf("a2")))
            .with_dependency(leaf("b").with_dependency(leaf("b1")));
        let layout = engine().layout(&root);

        let x = |name: &str| {
            layout
                .nodes
                .iter()
                .find(|n| n.node.name == name)
                .unwrap()
                .x
        };
        let sibling_gap = x("a2") - x("a1");
        let cousin_gap = x("b1") - x("a2");
        assert!((cousin_gap - 2.0 * sibling_gap).abs() < EPSILON);
        // Parents are centered over their children
        assert!((x("a") - (x("a1") + x("a2")) / 2.0).abs() < EPSILON);
        assert!((x("b") - x("b1")).abs() < EPSILON);
    }

    #[test]
    fn test_depth_maps_to_monotonic_bands() {
        let root = leaf("root").with_dependency(
            leaf("a").with_dependency(leaf("b").with_dependency(leaf("c"))),
        );
        let layout = engine().layout(&root);

        let expected = [0.0, 400.0 / 3.0, 800.0 / 3.0, 400.0];
        for (node, y) in layout.nodes.iter().zip(expected) {
            assert!((node.y - y).abs() < EPSILON);
        }
        assert_eq!(layout.max_depth, 3);
    }

    #[test]
    fn test_leaf_at_shallow_depth_stays_in_its_band() {
        let root = leaf("root")
            .with_dependency(leaf("shallow"))
            .with_dependency(leaf("deep").with_dependency(leaf("deeper")));
        let layout = engine().layout(&root);

        let shallow = layout.nodes.iter().find(|n| n.node.name == "shallow").unwrap();
        assert_eq!(shallow.y, 200.0);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let root = generated_tree(42, 5, 50);
        let first = engine().layout(&root);
        let second = engine().layout(&root);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_trees_have_finite_distinct_coordinates() {
        for seed in 0..64 {
            let root = generated_tree(seed, 5, 50);
            let layout = engine().layout(&root);
            assert_eq!(layout.len(), root.node_count());

            for node in &layout.nodes {
                assert!(node.x.is_finite() && node.y.is_finite(), "seed {}", seed);
                assert!(node.x >= 0.0 && node.x <= 920.0);
                assert!(node.y >= 0.0 && node.y <= 400.0);
            }

            let positions: Vec<Point> = layout.nodes.iter().map(|n| n.position()).collect();
            for i in 0..positions.len() {
                for j in (i + 1)..positions.len() {
                    assert!(
                        positions[i] != positions[j],
                        "seed {}: nodes {} and {} share a position",
                        seed,
                        i,
                        j
                    );
                }
            }
        }
    }

    #[test]
    fn test_root_first_and_parents_precede_children() {
        let root = generated_tree(7, 4, 40);
        let layout = engine().layout(&root);

        assert_eq!(layout.root().unwrap().node.name, "root");
        for (index, node) in layout.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                assert!(parent < index);
                assert_eq!(layout.nodes[parent].depth + 1, node.depth);
            }
        }
        assert_eq!(layout.links.len(), layout.len() - 1);
    }

    #[test]
    fn test_for_canvas_uses_inner_area() {
        let root = leaf("root").with_dependency(leaf("a"));
        let layout = TreeLayoutEngine::for_canvas(&CanvasConfig::default()).layout(&root);
        assert!((layout.nodes[0].x - 460.0).abs() < EPSILON);
        assert_eq!(layout.nodes[1].y, 400.0);
    }
}
