use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tode::application::dto::{AnalysisSource, OutputFormat};

/// Visualize the dependency tree of an npm project or package
#[derive(Parser, Debug)]
#[command(name = "tode")]
#[command(version)]
#[command(about = "Visualize the dependency tree of an npm project or package", long_about = None)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["upload", "search", "recent"])
))]
pub struct Args {
    /// Path to a package.json whose dependencies should be resolved
    #[arg(short, long, value_name = "PATH")]
    pub upload: Option<PathBuf>,

    /// Name of a single npm package to resolve
    #[arg(short, long, value_name = "NAME")]
    pub search: Option<String>,

    /// List the files analyzed during this session and exit
    #[arg(long)]
    pub recent: bool,

    /// Number of dependency levels to resolve (1-5, default 3)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub depth: Option<u8>,

    /// Output format: svg, json or markdown (default svg)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Base URL of the dependency API (default http://localhost:8080)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a config file (default: tode.config.yml in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Open an interactive prompt to click nodes and inspect packages
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The analysis to submit, `None` for `--recent`
    pub fn source(&self) -> Option<AnalysisSource> {
        if let Some(path) = &self.upload {
            return Some(AnalysisSource::Upload(path.clone()));
        }
        self.search
            .as_ref()
            .map(|term| AnalysisSource::Search(term.clone()))
    }
}
