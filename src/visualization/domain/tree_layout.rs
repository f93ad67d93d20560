use super::{DependencyNode, Point};

/// A dependency node with its computed position
///
/// Derived on every render pass and never persisted. Coordinates are
/// relative to the inner (margin-free) drawing area.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode<'a> {
    pub node: &'a DependencyNode,
    pub depth: usize,
    /// Index of the parent in the layout's node list
    pub parent: Option<usize>,
    pub x: f64,
    pub y: f64,
    pub sibling_count: usize,
    pub sibling_index: usize,
}

impl PositionedNode<'_> {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Parent-to-child edge, as indices into the layout's node list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
}

/// Result of laying out a whole tree
///
/// Nodes are stored in pre-order, so the root is always at index 0 and a
/// parent always precedes its children.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout<'a> {
    pub nodes: Vec<PositionedNode<'a>>,
    pub links: Vec<Link>,
    pub max_depth: usize,
}

impl<'a> TreeLayout<'a> {
    pub fn root(&self) -> Option<&PositionedNode<'a>> {
        self.nodes.first()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children_of(&self, index: usize) -> impl Iterator<Item = &PositionedNode<'a>> {
        self.nodes
            .iter()
            .filter(move |n| n.parent == Some(index))
    }
}
