use crate::visualization::domain::{DependencyNode, PackageStatus, PopupState, RecentFiles};
use owo_colors::OwoColorize;

/// Renders the detail popup and recent-files panel as terminal text
pub struct PopupPresenter {
    colored: bool,
}

impl PopupPresenter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn status_label(&self, status: PackageStatus) -> String {
        if !self.colored {
            return status.to_string();
        }
        match status {
            PackageStatus::Ok => status.green().to_string(),
            PackageStatus::Outdated => status.yellow().to_string(),
            PackageStatus::Vulnerable => status.red().bold().to_string(),
            PackageStatus::Unknown => status.blue().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Popup contents, `None` while the popup is closed
    pub fn render_popup(&self, popup: &PopupState) -> Option<String> {
        popup.selected().map(|node| self.render_node(node))
    }

    fn render_node(&self, node: &DependencyNode) -> String {
        let mut lines = vec![
            format!("┌ {}", self.heading(&node.display_name())),
            format!("│ name:        {}", node.name),
            format!("│ version:     {}", node.version),
            format!("│ status:      {}", self.status_label(node.status)),
        ];
        if let Some(description) = &node.description {
            lines.push(format!("│ description: {}", description));
        }
        if let Some(link) = &node.repo_link {
            lines.push(format!("│ repository:  {}", link));
        }
        lines.push(format!("│ dependencies: {}", node.child_count()));
        lines.push("└ [analyze] [close]".to_string());
        lines.join("\n")
    }

    pub fn render_recent_files(&self, recent: &RecentFiles) -> String {
        if recent.is_empty() {
            return "No recent files in this session.".to_string();
        }

        let mut lines = vec![self.heading("Recent files:")];
        for file in recent.iter() {
            lines.push(format!(
                "  {}  ({})",
                file.file_name,
                file.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        lines.join("\n")
    }
}

impl Default for PopupPresenter {
    fn default() -> Self {
        Self::new(true)
    }
}
