mod overlap_detector;
mod scene_builder;
mod tree_layout_engine;
mod tree_validator;

pub use overlap_detector::OverlapDetector;
pub use scene_builder::SceneBuilder;
pub use tree_layout_engine::TreeLayoutEngine;
pub use tree_validator::TreeValidator;
