pub mod dependency_node;
pub mod geometry;
pub mod overlap_table;
pub mod parsed_file;
pub mod popup_state;
pub mod recent_files;
pub mod scene;
pub mod search_depth;
pub mod tree_layout;

pub use dependency_node::{DependencyMap, DependencyNode, PackageStatus};
pub use geometry::{CanvasConfig, Margin, Point};
pub use overlap_table::OverlapTable;
pub use parsed_file::ParsedFile;
pub use popup_state::{PopupEffect, PopupEvent, PopupState};
pub use recent_files::{RecentFile, RecentFiles};
pub use scene::{LinkDrawable, NodeDrawable, Scene};
pub use search_depth::SearchDepth;
pub use tree_layout::{Link, PositionedNode, TreeLayout};
