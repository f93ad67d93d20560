use super::{DependencyNode, Margin, PackageStatus, Point};
use serde::Serialize;

/// Straight line between a parent and a child node center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkDrawable {
    pub source: usize,
    pub target: usize,
    pub from: Point,
    pub to: Point,
}

/// One rendered package node
///
/// Pure data: formatters decide how it is drawn. `center` is in absolute
/// canvas coordinates (margins already applied).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDrawable<'a> {
    pub index: usize,
    pub depth: usize,
    pub center: Point,
    pub diameter: f64,
    pub fill: &'static str,
    pub status: PackageStatus,
    pub label: String,
    pub version: String,
    pub sibling_count: usize,
    pub sibling_index: usize,
    pub overlap_count: usize,
    #[serde(skip)]
    pub node: &'a DependencyNode,
}

impl NodeDrawable<'_> {
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.center.distance_to(point) <= self.radius()
    }

    pub fn is_emphasized(&self) -> bool {
        self.overlap_count > 0
    }
}

/// Declarative description of a full diagram
///
/// Built from scratch on every render; nothing carries over from a previous
/// scene. Links are drawn first, nodes on top in pre-order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene<'a> {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub links: Vec<LinkDrawable>,
    pub nodes: Vec<NodeDrawable<'a>>,
}

impl<'a> Scene<'a> {
    pub fn root(&self) -> Option<&NodeDrawable<'a>> {
        self.nodes.first()
    }

    /// Topmost node under `point`
    ///
    /// Later nodes are painted over earlier ones, so when overlapping nodes
    /// both contain the point the last one wins.
    pub fn hit_test(&self, point: Point) -> Option<&NodeDrawable<'a>> {
        self.nodes.iter().rev().find(|n| n.contains(&point))
    }

    /// Invokes `on_click` with the data of the node under `point`
    ///
    /// Returns whether a node was hit. The scene itself never changes any
    /// state; reacting to the click is entirely up to the callback.
    pub fn dispatch_click<F>(&self, point: Point, on_click: F) -> bool
    where
        F: FnOnce(&'a DependencyNode),
    {
        match self.hit_test(point) {
            Some(drawable) => {
                on_click(drawable.node);
                true
            }
            None => false,
        }
    }

    pub fn overlapping_nodes(&self) -> impl Iterator<Item = &NodeDrawable<'a>> {
        self.nodes.iter().filter(|n| n.is_emphasized())
    }
}
