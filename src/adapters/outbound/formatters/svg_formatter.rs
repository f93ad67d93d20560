use crate::ports::outbound::SceneFormatter;
use crate::shared::Result;
use crate::visualization::domain::{NodeDrawable, Scene};
use crate::visualization::policies::StatusPalette;
use std::fmt::Write;

const LINK_STROKE_WIDTH: f64 = 2.0;
const LINK_STROKE_OPACITY: f64 = 0.5;
const NODE_STROKE_WIDTH: f64 = 2.0;
const EMPHASIS_STROKE_WIDTH: f64 = 4.0;
const LABEL_FONT_SIZE: u32 = 12;
const VERSION_FONT_SIZE: u32 = 10;

/// SvgFormatter adapter rendering a scene as a standalone SVG document
///
/// This adapter implements the SceneFormatter port. Links are drawn first
/// and nodes on top, in scene order, so later nodes cover earlier ones the
/// same way hit testing resolves clicks.
pub struct SvgFormatter;

impl SvgFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for use in XML content and attribute values
    fn escape_xml(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Formats a coordinate with at most two decimals
    fn num(value: f64) -> String {
        let rounded = (value * 100.0).round() / 100.0;
        // normalizes -0
        format!("{}", rounded + 0.0)
    }
}

impl Default for SvgFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneFormatter for SvgFormatter {
    fn format(&self, scene: &Scene<'_>) -> Result<String> {
        let mut output = String::new();
        let width = Self::num(scene.width);
        let height = Self::num(scene.height);

        writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        )?;

        self.render_links(&mut output, scene)?;
        self.render_nodes(&mut output, scene)?;

        output.push_str("</svg>\n");
        Ok(output)
    }
}

/// Helper methods for rendering sections
impl SvgFormatter {
    fn render_links(&self, output: &mut String, scene: &Scene<'_>) -> Result<()> {
        writeln!(
            output,
            r#"  <g class="links" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}">"#,
            StatusPalette::LINK_STROKE,
            LINK_STROKE_WIDTH,
            LINK_STROKE_OPACITY
        )?;
        for link in &scene.links {
            writeln!(
                output,
                r#"    <path class="link" d="M{},{}L{},{}"/>"#,
                Self::num(link.from.x),
                Self::num(link.from.y),
                Self::num(link.to.x),
                Self::num(link.to.y)
            )?;
        }
        output.push_str("  </g>\n");
        Ok(())
    }

    fn render_nodes(&self, output: &mut String, scene: &Scene<'_>) -> Result<()> {
        output.push_str("  <g class=\"nodes\">\n");
        for node in &scene.nodes {
            self.render_node(output, node)?;
        }
        output.push_str("  </g>\n");
        Ok(())
    }

    fn render_node(&self, output: &mut String, node: &NodeDrawable<'_>) -> Result<()> {
        let class = if node.is_emphasized() {
            format!("node status-{} overlapping", node.status)
        } else {
            format!("node status-{}", node.status)
        };
        let stroke_width = if node.is_emphasized() {
            EMPHASIS_STROKE_WIDTH
        } else {
            NODE_STROKE_WIDTH
        };

        writeln!(
            output,
            r#"    <g class="{}" data-index="{}" transform="translate({},{})">"#,
            class,
            node.index,
            Self::num(node.center.x),
            Self::num(node.center.y)
        )?;

        let mut title = format!("{}@{} ({})", node.node.name, node.version, node.status);
        if let Some(description) = &node.node.description {
            title.push('\n');
            title.push_str(description);
        }
        writeln!(output, "      <title>{}</title>", Self::escape_xml(&title))?;

        writeln!(
            output,
            r#"      <circle r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            Self::num(node.radius()),
            node.fill,
            StatusPalette::stroke_for(node.is_emphasized()),
            stroke_width
        )?;
        writeln!(
            output,
            r#"      <text text-anchor="middle" dy="-0.2em" font-size="{}">{}</text>"#,
            LABEL_FONT_SIZE,
            Self::escape_xml(&node.label)
        )?;
        writeln!(
            output,
            r#"      <text text-anchor="middle" dy="1.1em" font-size="{}">{}</text>"#,
            VERSION_FONT_SIZE,
            Self::escape_xml(&node.version)
        )?;

        if node.is_emphasized() {
            let offset = node.radius() * 0.7;
            writeln!(
                output,
                r#"      <text class="overlap-badge" x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}">+{}</text>"#,
                Self::num(offset),
                Self::num(-offset),
                VERSION_FONT_SIZE,
                StatusPalette::EMPHASIS_STROKE,
                node.overlap_count
            )?;
        }

        output.push_str("    </g>\n");
        Ok(())
    }
}
