use crate::shared::Result;
use crate::visualization::domain::Scene;

/// SceneFormatter port for serializing a rendered scene
///
/// This port abstracts the output technology (SVG, JSON, Markdown) so the
/// layout and scene assembly stay independent of it.
pub trait SceneFormatter {
    /// Formats a scene into its textual representation
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, scene: &Scene<'_>) -> Result<String>;
}
