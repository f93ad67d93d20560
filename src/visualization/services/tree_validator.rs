use crate::shared::error::TodeError;
use crate::shared::Result;
use crate::visualization::domain::{DependencyNode, SearchDepth};

/// Sanity checks applied to every tree the dependency API returns
///
/// The renderer compares every pair of nodes, so an unbounded response
/// must never reach it.
pub struct TreeValidator;

impl TreeValidator {
    /// Upper bound on the number of nodes accepted from the API
    pub const MAX_NODES: usize = 500;

    /// npm package names are limited to 214 characters
    pub const MAX_NAME_LENGTH: usize = 214;

    /// Validates `root` against the depth that was requested
    ///
    /// # Errors
    /// Returns `InvalidDependencyTree` when the tree is deeper than
    /// `requested`, has too many nodes, or contains an empty or overlong name.
    pub fn validate(root: &DependencyNode, requested: SearchDepth) -> Result<()> {
        let max_depth = requested.value() as usize;
        let mut visited = 0usize;
        let mut stack: Vec<(&DependencyNode, usize)> = vec![(root, 0)];

        while let Some((node, depth)) = stack.pop() {
            visited += 1;
            if visited > Self::MAX_NODES {
                return Err(invalid(format!(
                    "tree has more than {} nodes",
                    Self::MAX_NODES
                )));
            }

            if depth > max_depth {
                return Err(invalid(format!(
                    "'{}' is at depth {}, but only {} level(s) were requested",
                    node.name, depth, max_depth
                )));
            }

            Self::validate_name(&node.name)?;

            for child in node.children() {
                stack.push((child, depth + 1));
            }
        }

        Ok(())
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(invalid("package name is empty".to_string()));
        }
        if name.chars().count() > Self::MAX_NAME_LENGTH {
            return Err(invalid(format!(
                "package name exceeds {} characters",
                Self::MAX_NAME_LENGTH
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> anyhow::Error {
    TodeError::InvalidDependencyTree { reason }.into()
}
