/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod dependency_analysis_port;

pub use dependency_analysis_port::DependencyAnalysisPort;
