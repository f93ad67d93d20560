use crate::ports::outbound::SceneFormatter;
use crate::shared::Result;
use crate::visualization::domain::{NodeDrawable, PackageStatus, Scene};

/// Markdown table header for the status summary
const SUMMARY_TABLE_HEADER: &str = "| Status | Count |\n";

/// Markdown table separator line for the status summary
const SUMMARY_TABLE_SEPARATOR: &str = "|--------|-------|\n";

/// Markdown table header for overlapping nodes
const OVERLAP_TABLE_HEADER: &str = "| Package | Version | Depth | Overlaps |\n";

/// Markdown table separator line for overlapping nodes
const OVERLAP_TABLE_SEPARATOR: &str = "|---------|---------|-------|----------|\n";

/// MarkdownFormatter adapter for a human-readable dependency report
///
/// This adapter implements the SceneFormatter port with an indented tree
/// listing, a status summary and the list of crowded nodes.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Escapes characters with inline meaning in list items
    fn escape_markdown_inline(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '*' | '_' | '`' | '[' | ']' | '\\') {
                escaped.push('\\');
            }
            if c == '\n' {
                escaped.push(' ');
            } else {
                escaped.push(c);
            }
        }
        escaped
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneFormatter for MarkdownFormatter {
    fn format(&self, scene: &Scene<'_>) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, scene);
        self.render_tree(&mut output, scene);
        self.render_summary(&mut output, scene);
        self.render_overlaps(&mut output, scene);

        Ok(output)
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, scene: &Scene<'_>) {
        match scene.root() {
            Some(root) => output.push_str(&format!(
                "# Dependency Tree: {}@{}\n\n",
                Self::escape_markdown_inline(&root.node.name),
                Self::escape_markdown_inline(&root.version)
            )),
            None => output.push_str("# Dependency Tree\n\n"),
        }
    }

    fn render_tree(&self, output: &mut String, scene: &Scene<'_>) {
        output.push_str("## Tree\n\n");
        for node in &scene.nodes {
            output.push_str(&"  ".repeat(node.depth));
            output.push_str(&Self::tree_line(node));
            output.push('\n');
        }
        output.push('\n');
    }

    fn tree_line(node: &NodeDrawable<'_>) -> String {
        let mut line = format!(
            "- **{}** {} ({})",
            Self::escape_markdown_inline(&node.node.name),
            Self::escape_markdown_inline(&node.version),
            node.status
        );
        if let Some(link) = &node.node.repo_link {
            line.push_str(&format!(" [repo](<{}>)", link.replace('>', "%3E")));
        }
        if let Some(description) = &node.node.description {
            line.push_str(&format!(": {}", Self::escape_markdown_inline(description)));
        }
        if node.is_emphasized() {
            line.push_str(&format!(" ⚠️ overlaps {} node(s)", node.overlap_count));
        }
        line
    }

    fn render_summary(&self, output: &mut String, scene: &Scene<'_>) {
        output.push_str("## Status Summary\n\n");
        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);

        for status in PackageStatus::ALL {
            let count = scene.nodes.iter().filter(|n| n.status == status).count();
            output.push_str(&format!("| {} | {} |\n", status, count));
        }
        output.push_str(&format!("| **Total** | {} |\n\n", scene.nodes.len()));
    }

    fn render_overlaps(&self, output: &mut String, scene: &Scene<'_>) {
        output.push_str("## Overlapping Nodes\n\n");

        let overlapping: Vec<&NodeDrawable<'_>> = scene.overlapping_nodes().collect();
        if overlapping.is_empty() {
            output.push_str("No overlapping nodes.\n");
            return;
        }

        output.push_str(
            "These nodes are drawn closer to another node than the node diameter.\n\n",
        );
        output.push_str(OVERLAP_TABLE_HEADER);
        output.push_str(OVERLAP_TABLE_SEPARATOR);
        for node in overlapping {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&node.node.name),
                Self::escape_markdown_table_cell(&node.version),
                node.depth,
                node.overlap_count
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::domain::DependencyNode;
    use crate::visualization::services::SceneBuilder;

    fn sample_tree() -> DependencyNode {
        DependencyNode::new("my-app", "1.0.0")
            .with_status(PackageStatus::Ok)
            .with_dependency(
                DependencyNode::new("react", "18.2.0")
                    .with_status(PackageStatus::Ok)
                    .with_repo_link("https://github.com/facebook/react")
                    .with_dependency(
                        DependencyNode::new("loose-envify", "1.4.0")
                            .with_status(PackageStatus::Outdated),
                    ),
            )
            .with_dependency(
                DependencyNode::new("event-stream", "3.3.6")
                    .with_status(PackageStatus::Vulnerable)
                    .with_description("Streams | made easy"),
            )
    }

    #[test]
    fn test_format_tree_listing() {
        let tree = sample_tree();
        let scene = SceneBuilder::default().render(&tree);
        let markdown = MarkdownFormatter::new().format(&scene).unwrap();

        assert!(markdown.starts_with("# Dependency Tree: my-app@1.0.0\n"));
        assert!(markdown.contains("\n- **my-app** 1.0.0 (ok)\n"));
        assert!(markdown.contains(
            "\n  - **react** 18.2.0 (ok) [repo](<https://github.com/facebook/react>)\n"
        ));
        assert!(markdown.contains("\n    - **loose-envify** 1.4.0 (outdated)\n"));
        assert!(markdown.contains("(vulnerable): Streams | made easy"));
    }

    #[test]
    fn test_format_status_summary() {
        let tree = sample_tree();
        let scene = SceneBuilder::default().render(&tree);
        let markdown = MarkdownFormatter::new().format(&scene).unwrap();

        assert!(markdown.contains("| ok | 2 |"));
        assert!(markdown.contains("| outdated | 1 |"));
        assert!(markdown.contains("| vulnerable | 1 |"));
        assert!(markdown.contains("| unknown | 0 |"));
        assert!(markdown.contains("| **Total** | 4 |"));
        assert!(markdown.contains("No overlapping nodes."));
    }

    #[test]
    fn test_format_overlap_table() {
        let mut tree = DependencyNode::new("root", "1.0.0");
        for i in 0..20 {
            tree = tree.with_dependency(DependencyNode::new(format!("dep|{}", i), "1.0.0"));
        }
        let scene = SceneBuilder::default().render(&tree);
        let markdown = MarkdownFormatter::new().format(&scene).unwrap();

        assert!(markdown.contains(OVERLAP_TABLE_HEADER));
        assert!(markdown.contains("| dep\\|0 | 1.0.0 | 1 |"));
        assert!(markdown.contains("⚠️ overlaps"));
    }

    #[test]
    fn test_escape_markdown_inline() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_inline("a_b*c`d"),
            "a\\_b\\*c\\`d"
        );
    }
}
