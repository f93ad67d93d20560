//! Interactive prompt for exploring a rendered dependency tree.
//!
//! Reads one command per line and drives the view controller: clicking
//! nodes opens the detail popup, `analyze` re-roots the diagram on the
//! selected package and `show` re-renders the current scene.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tode::adapters::outbound::console::PopupPresenter;
use tode::application::dto::{AnalysisSource, OutputFormat};
use tode::application::view_state::DependencyViewController;
use tode::ports::inbound::DependencyAnalysisPort;
use tode::ports::outbound::{OutputPresenter, ProgressReporter};
use tode::shared::Result;
use tode::visualization::domain::Point;

use crate::render_output;

const HELP: &str = "\
Commands:
  click <x> <y>    Click the canvas at (x, y) and open the node under it
  select <name>    Open the popup for the package named <name>
  analyze          Analyze the package shown in the popup
  close            Close the popup
  backdrop         Click outside the popup
  search <name>    Analyze a single package
  upload <path>    Analyze a package.json file
  show             Render the current diagram to the configured output
  status           Summarize the displayed tree
  recent           List the files analyzed during this session
  help             Show this help
  quit             Leave the prompt";

/// A single line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum PromptCommand {
    Click(Point),
    Select(String),
    Analyze,
    Close,
    Backdrop,
    Search(String),
    Upload(PathBuf),
    Show,
    Status,
    Recent,
    Help,
    Quit,
}

impl PromptCommand {
    /// Parses one input line, `Ok(None)` for a blank line
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let parsed = match command.to_lowercase().as_str() {
            "click" => {
                let coords: Vec<&str> = rest.split_whitespace().collect();
                match coords.as_slice() {
                    [x, y] => {
                        let x = parse_coordinate(x)?;
                        let y = parse_coordinate(y)?;
                        PromptCommand::Click(Point::new(x, y))
                    }
                    _ => return Err("Usage: click <x> <y>".to_string()),
                }
            }
            "select" => PromptCommand::Select(required(rest, "select <name>")?),
            "search" => PromptCommand::Search(required(rest, "search <name>")?),
            "upload" => PromptCommand::Upload(PathBuf::from(required(rest, "upload <path>")?)),
            "analyze" => PromptCommand::Analyze,
            "close" => PromptCommand::Close,
            "backdrop" => PromptCommand::Backdrop,
            "show" => PromptCommand::Show,
            "status" => PromptCommand::Status,
            "recent" => PromptCommand::Recent,
            "help" | "?" => PromptCommand::Help,
            "quit" | "exit" => PromptCommand::Quit,
            other => {
                return Err(format!(
                    "Unknown command: {}. Type 'help' for a list of commands",
                    other
                ))
            }
        };
        Ok(Some(parsed))
    }
}

fn parse_coordinate(value: &str) -> std::result::Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid coordinate: {}", value))
}

fn required(value: &str, usage: &str) -> std::result::Result<String, String> {
    if value.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(value.to_string())
    }
}

/// Line-oriented session around a view controller
pub struct Prompt<'c, P, R> {
    controller: &'c mut DependencyViewController<P, R>,
    popup: PopupPresenter,
    format: OutputFormat,
    presenter: Box<dyn OutputPresenter>,
}

impl<'c, P, R> Prompt<'c, P, R>
where
    P: DependencyAnalysisPort,
    R: ProgressReporter,
{
    pub fn new(
        controller: &'c mut DependencyViewController<P, R>,
        popup: PopupPresenter,
        format: OutputFormat,
        presenter: Box<dyn OutputPresenter>,
    ) -> Self {
        Self {
            controller,
            popup,
            format,
            presenter,
        }
    }

    /// Runs until `quit` or end of input
    ///
    /// Failed commands are reported on `out` and never end the session;
    /// only I/O errors on `input` or `out` are returned.
    pub async fn run<I: BufRead, W: Write>(&mut self, mut input: I, mut out: W) -> Result<()> {
        writeln!(out, "Type 'help' for a list of commands.")?;
        loop {
            write!(out, "tode> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            let command = match PromptCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    writeln!(out, "{}", message)?;
                    continue;
                }
            };

            if command == PromptCommand::Quit {
                return Ok(());
            }
            self.execute(command, &mut out).await?;
        }
    }

    async fn execute<W: Write>(&mut self, command: PromptCommand, out: &mut W) -> Result<()> {
        match command {
            PromptCommand::Click(point) => {
                if self.controller.click(point) {
                    self.print_popup(out)?;
                } else {
                    writeln!(out, "No node at ({}, {})", point.x, point.y)?;
                }
            }
            PromptCommand::Select(name) => {
                if self.controller.select_by_name(&name) {
                    self.print_popup(out)?;
                } else {
                    writeln!(out, "No node named '{}' in the current tree", name)?;
                }
            }
            PromptCommand::Analyze => match self.controller.analyze_selected().await {
                Ok(true) => self.print_status(out)?,
                Ok(false) => writeln!(out, "No package selected. Click a node first.")?,
                Err(e) => writeln!(out, "❌ {}", e)?,
            },
            PromptCommand::Close => {
                self.controller.close_popup();
                writeln!(out, "Popup closed.")?;
            }
            PromptCommand::Backdrop => {
                self.controller.backdrop_click();
                writeln!(out, "Popup closed.")?;
            }
            PromptCommand::Search(term) => {
                self.submit(AnalysisSource::Search(term), out).await?;
            }
            PromptCommand::Upload(path) => {
                self.submit(AnalysisSource::Upload(path), out).await?;
            }
            PromptCommand::Show => match self.controller.scene() {
                Some(scene) => {
                    if let Err(e) = render_output(&scene, self.format, self.presenter.as_ref()) {
                        writeln!(out, "❌ {}", e)?;
                    }
                }
                None => writeln!(out, "Nothing to show. Search or upload first.")?,
            },
            PromptCommand::Status => self.print_status(out)?,
            PromptCommand::Recent => {
                let recent = self
                    .popup
                    .render_recent_files(self.controller.state().recent_files());
                writeln!(out, "{}", recent)?;
            }
            PromptCommand::Help => writeln!(out, "{}", HELP)?,
            PromptCommand::Quit => {}
        }
        Ok(())
    }

    async fn submit<W: Write>(&mut self, source: AnalysisSource, out: &mut W) -> Result<()> {
        match self.controller.submit(source).await {
            Ok(()) => self.print_status(out),
            Err(e) => {
                writeln!(out, "❌ {}", e)?;
                Ok(())
            }
        }
    }

    fn print_popup<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(popup) = self.popup.render_popup(self.controller.state().popup()) {
            writeln!(out, "{}", popup)?;
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<()> {
        let state = self.controller.state();
        if let Some(error) = state.error() {
            writeln!(out, "Last error: {}", error)?;
        }

        match self.controller.scene() {
            Some(scene) => {
                let root = scene
                    .root()
                    .map(|root| format!("{}@{}", root.node.name, root.node.version))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "🌳 {}: {} node(s), {} overlapping",
                    root,
                    scene.nodes.len(),
                    scene.overlapping_nodes().count()
                )?;
            }
            None => writeln!(out, "No dependency tree displayed.")?,
        }
        Ok(())
    }
}
