/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analyze_request;
mod analyze_response;
mod output_format;

pub use analyze_request::{AnalysisSource, AnalyzeRequest};
pub use analyze_response::AnalyzeResponse;
pub use output_format::OutputFormat;
