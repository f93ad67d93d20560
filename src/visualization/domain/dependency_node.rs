use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Health status reported by the dependency API for a single package
///
/// Any status string the API sends that is not one of the known values,
/// or a `null` status, deserializes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    Ok,
    Outdated,
    Vulnerable,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PackageStatus {
    pub const ALL: [PackageStatus; 4] = [
        PackageStatus::Ok,
        PackageStatus::Outdated,
        PackageStatus::Vulnerable,
        PackageStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Ok => "ok",
            PackageStatus::Outdated => "outdated",
            PackageStatus::Vulnerable => "vulnerable",
            PackageStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Child dependencies keyed by package name, in API order
pub type DependencyMap = IndexMap<String, DependencyNode>;

/// A package in the dependency tree returned by the API
///
/// The tree is owned recursively, so cycles and shared subtrees cannot be
/// represented: every node has exactly one position in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyNode {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PackageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyMap>,
}

/// Treats an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DependencyNode {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            status: PackageStatus::Unknown,
            description: None,
            repo_link: None,
            dependencies: None,
        }
    }

    pub fn with_status(mut self, status: PackageStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_repo_link(mut self, repo_link: impl Into<String>) -> Self {
        self.repo_link = Some(repo_link.into());
        self
    }

    /// Appends a child, keyed by the child's own name
    pub fn with_dependency(mut self, child: DependencyNode) -> Self {
        let key = child.name.clone();
        self.dependencies
            .get_or_insert_with(DependencyMap::new)
            .insert(key, child);
        self
    }

    /// Direct children in insertion order
    pub fn children(&self) -> impl Iterator<Item = &DependencyNode> {
        self.dependencies.iter().flat_map(|deps| deps.values())
    }

    pub fn child_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, |deps| deps.len())
    }

    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// Name as shown on a rendered node: hyphens become spaces
    pub fn display_name(&self) -> String {
        self.name.replace('-', " ")
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.children().map(|c| c.depth() + 1).max().unwrap_or(0)
    }

    /// Total number of nodes including this one
    pub fn node_count(&self) -> usize {
        1 + self.children().map(|c| c.node_count()).sum::<usize>()
    }

    /// First node with the given name in pre-order
    pub fn find(&self, name: &str) -> Option<&DependencyNode> {
        if self.name == name {
            return Some(self);
        }
        self.children().find_map(|c| c.find(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_node() {
        let json = r#"{
            "name": "root",
            "version": "1.0.0",
            "status": "ok",
            "description": "The root package",
            "repoLink": "https://github.com/example/root",
            "dependencies": {
                "b-lib": {"name": "b-lib", "version": "2.0.0", "status": "vulnerable"},
                "a-lib": {"name": "a-lib", "version": "0.1.0", "status": "outdated"}
            }
        }"#;

        let node: DependencyNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.name, "root");
        assert_eq!(node.status, PackageStatus::Ok);
        assert_eq!(node.repo_link.as_deref(), Some("https://github.com/example/root"));
        let names: Vec<&str> = node.children().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b-lib", "a-lib"]);
        assert_eq!(node.children().next().unwrap().status, PackageStatus::Vulnerable);
    }

    #[test]
    fn test_unknown_status_string_maps_to_unknown() {
        let node: DependencyNode =
            serde_json::from_str(r#"{"name": "x", "version": "1", "status": "deprecated"}"#)
                .unwrap();
        assert_eq!(node.status, PackageStatus::Unknown);
    }

    #[test]
    fn test_missing_optional_fields() {
        let node: DependencyNode =
            serde_json::from_str(r#"{"name": "x", "dependencies": null, "repoLink": null}"#)
                .unwrap();
        assert_eq!(node.version, "");
        assert_eq!(node.status, PackageStatus::Unknown);
        assert!(node.dependencies.is_none());
        assert!(node.repo_link.is_none());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_null_status_and_version_fall_back_to_defaults() {
        let node: DependencyNode = serde_json::from_str(
            r#"{
                "name": "root",
                "version": null,
                "status": null,
                "dependencies": {
                    "child": {"name": "child", "version": "1.0.0", "status": null}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(node.version, "");
        assert_eq!(node.status, PackageStatus::Unknown);
        assert_eq!(node.children().next().unwrap().status, PackageStatus::Unknown);
    }

    #[test]
    fn test_many_siblings_keep_wire_order() {
        let body: Vec<String> = (0..2000)
            .map(|i| format!(r#""dep-{i}": {{"name": "dep-{i}", "version": "1.0.0"}}"#))
            .collect();
        let json = format!(r#"{{"name": "hub", "dependencies": {{{}}}}}"#, body.join(","));

        let node: DependencyNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node.child_count(), 2000);
        assert_eq!(node.children().next().unwrap().name, "dep-0");
        assert_eq!(node.children().last().unwrap().name, "dep-1999");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result: Result<DependencyNode, _> = serde_json::from_str(r#"{"version": "1.0.0"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_name_replaces_hyphens() {
        let node = DependencyNode::new("is-plain-object", "5.0.0");
        assert_eq!(node.display_name(), "is plain object");
        assert_eq!(DependencyNode::new("react", "18").display_name(), "react");
    }

    #[test]
    fn test_depth_and_node_count() {
        let tree = DependencyNode::new("root", "1")
            .with_dependency(
                DependencyNode::new("a", "1").with_dependency(DependencyNode::new("a1", "1")),
            )
            .with_dependency(DependencyNode::new("b", "1"));

        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(DependencyNode::new("solo", "1").depth(), 0);
    }

    #[test]
    fn test_find_returns_first_in_pre_order() {
        let tree = DependencyNode::new("root", "1")
            .with_dependency(
                DependencyNode::new("a", "1")
                    .with_dependency(DependencyNode::new("shared", "1.0.0")),
            )
            .with_dependency(DependencyNode::new("shared", "2.0.0"));

        assert_eq!(tree.find("shared").unwrap().version, "1.0.0");
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PackageStatus::Vulnerable.to_string(), "vulnerable");
        assert_eq!(PackageStatus::default(), PackageStatus::Unknown);
    }
}
