mod cli;
mod config;
mod prompt;

use anyhow::Context;
use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use owo_colors::OwoColorize;
use prompt::Prompt;
use std::io::IsTerminal;
use std::process;
use tode::adapters::outbound::console::{PopupPresenter, StderrProgressReporter};
use tode::adapters::outbound::filesystem::{FileSessionStore, FileSystemReader};
use tode::adapters::outbound::network::{TodeApiClient, DEFAULT_API_URL};
use tode::application::dto::OutputFormat;
use tode::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use tode::application::use_cases::AnalyzeDependenciesUseCase;
use tode::application::view_state::DependencyViewController;
use tode::ports::outbound::OutputPresenter;
use tode::shared::error::ExitCode;
use tode::shared::Result;
use tode::visualization::domain::{CanvasConfig, Scene, SearchDepth};
use tode::visualization::services::SceneBuilder;

#[tokio::main]
async fn main() {
    // Argument errors exit with code 2 inside clap
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    api_url: String,
    depth: SearchDepth,
    format: OutputFormat,
    canvas: CanvasConfig,
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = resolve_settings(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let use_case = AnalyzeDependenciesUseCase::new(
        FileSystemReader::new(),
        TodeApiClient::new(&settings.api_url)?,
        FileSessionStore::from_env(),
        StderrProgressReporter::new(),
    );
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    let mut controller = DependencyViewController::new(
        use_case,
        StderrProgressReporter::new(),
        SceneBuilder::new(settings.canvas),
        settings.depth,
    );

    let Some(source) = args.source() else {
        let recent = PopupPresenter::new(false).render_recent_files(controller.state().recent_files());
        return presenter.present(&recent);
    };

    match controller.submit(source).await {
        Ok(()) => {
            let scene = controller
                .scene()
                .context("No dependency tree to render")?;
            render_output(&scene, settings.format, presenter.as_ref())?;
        }
        Err(e) if args.interactive => eprintln!("❌ {}", e),
        Err(e) => return Err(e),
    }

    if args.interactive {
        let popup = PopupPresenter::new(std::io::stderr().is_terminal());
        let mut prompt = Prompt::new(&mut controller, popup, settings.format, presenter);
        prompt
            .run(std::io::stdin().lock(), std::io::stderr())
            .await?;
    }

    Ok(())
}

/// Formats `scene` and hands the result to `presenter`
pub(crate) fn render_output(
    scene: &Scene<'_>,
    format: OutputFormat,
    presenter: &dyn OutputPresenter,
) -> Result<()> {
    eprintln!("{}", FormatterFactory::progress_message(format));

    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(scene)?;

    presenter.present(&formatted_output)
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let current_dir =
                std::env::current_dir().context("Failed to determine the current directory")?;
            discover_config(&current_dir)
        }
    }
}

/// CLI flags take precedence over the config file, which takes precedence over defaults
fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let depth = match args.depth.or(config.and_then(|c| c.search_depth)) {
        Some(depth) => SearchDepth::new(depth)?,
        None => SearchDepth::default(),
    };

    let format = match args.format {
        Some(format) => format,
        None => match config {
            Some(config) => config.output_format()?.unwrap_or_default(),
            None => OutputFormat::default(),
        },
    };

    let api_url = args
        .api_url
        .clone()
        .or_else(|| config.and_then(|c| c.api_url.clone()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let defaults = CanvasConfig::default();
    let canvas = CanvasConfig {
        width: config.and_then(|c| c.width).unwrap_or(defaults.width),
        height: config.and_then(|c| c.height).unwrap_or(defaults.height),
        node_diameter: config
            .and_then(|c| c.node_size)
            .unwrap_or(defaults.node_diameter),
        ..defaults
    };

    Ok(Settings {
        api_url,
        depth,
        format,
        canvas,
    })
}
