use crate::visualization::domain::PackageStatus;

/// Display colors for package statuses
///
/// Each status maps to one fixed fill color; statuses the API does not
/// recognize share the `Unknown` color.
pub struct StatusPalette;

impl StatusPalette {
    /// Stroke used on nodes that overlap another node
    pub const EMPHASIS_STROKE: &'static str = "#111827";

    /// Default node outline
    pub const DEFAULT_STROKE: &'static str = "#ffffff";

    /// Link line color
    pub const LINK_STROKE: &'static str = "blue";

    pub fn fill_for(status: PackageStatus) -> &'static str {
        match status {
            PackageStatus::Ok => "#86efac",
            PackageStatus::Outdated => "#fde047",
            PackageStatus::Vulnerable => "#fca5a5",
            PackageStatus::Unknown => "#93c5fd",
        }
    }

    pub fn stroke_for(emphasized: bool) -> &'static str {
        if emphasized {
            Self::EMPHASIS_STROKE
        } else {
            Self::DEFAULT_STROKE
        }
    }
}
