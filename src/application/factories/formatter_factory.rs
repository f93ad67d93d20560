use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, SvgFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SceneFormatter;

/// Factory for creating scene formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use tode::application::dto::OutputFormat;
    /// use tode::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Svg);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SceneFormatter> {
        match format {
            OutputFormat::Svg => Box::new(SvgFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use tode::application::dto::OutputFormat;
    /// use tode::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Svg);
    /// assert_eq!(message, "📝 Rendering SVG diagram...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Svg => "📝 Rendering SVG diagram...",
            OutputFormat::Json => "📝 Generating JSON scene output...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
