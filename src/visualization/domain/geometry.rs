use serde::{Deserialize, Serialize};

/// A point in canvas coordinates (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 80.0,
            right: 20.0,
            bottom: 120.0,
            left: 20.0,
        }
    }
}

/// Canvas dimensions and node size used for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Diameter of a rendered node, also the overlap threshold
    pub node_diameter: f64,
}

impl CanvasConfig {
    pub const DEFAULT_WIDTH: f64 = 960.0;
    pub const DEFAULT_HEIGHT: f64 = 600.0;
    pub const DEFAULT_NODE_DIAMETER: f64 = 90.0;

    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            margin: Margin::default(),
            node_diameter: Self::DEFAULT_NODE_DIAMETER,
        }
    }
}
