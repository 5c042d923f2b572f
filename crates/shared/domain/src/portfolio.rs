//! Portfolio hierarchy: projects that aggregate the vulnerable components
//! they depend on. The dataset is fixed at session start and never mutated;
//! all session behavior lives in the `dscope-portfolio` feature slice.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Kind tag of a portfolio node.
///
/// This is a tag, not a type boundary: nothing in the model forbids a
/// `Component` from carrying children, even though the sample dataset only
/// nests components under projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Project,
    Component,
}

/// Vulnerability counts per severity for an aggregating node.
///
/// Independently supplied aggregate: it is NOT required to sum to the node's
/// `vulnerabilities` count, and no reconciliation is performed.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl SeverityBreakdown {
    /// Sum of all four buckets.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low
    }
}

/// One entry in the hierarchical dataset.
///
/// Ids must be unique across the entire tree; children order is significant
/// and preserved (insertion order = display order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub vulnerabilities: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_breakdown: Option<SeverityBreakdown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an aggregating project node.
    pub fn project(
        id: impl Into<String>,
        name: impl Into<String>,
        vulnerabilities: u32,
        severity_breakdown: SeverityBreakdown,
        children: Vec<Self>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Project,
            vulnerabilities,
            severity_breakdown: Some(severity_breakdown),
            children,
        }
    }

    /// Creates a leaf component node.
    pub fn component(id: impl Into<String>, name: impl Into<String>, vulnerabilities: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Component,
            vulnerabilities,
            severity_breakdown: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The fixed in-memory sample portfolio.
///
/// Two projects, each aggregating two vulnerable dependencies. Every session
/// is handed this dataset at start and treats it as read-only.
#[must_use]
pub fn sample_portfolio() -> Vec<Node> {
    vec![
        Node::project(
            "proj-1",
            "Billing API",
            7,
            SeverityBreakdown { critical: 1, high: 2, medium: 3, low: 1 },
            vec![
                Node::component("comp-1", "log4j 2.17.0", 3),
                Node::component("comp-2", "jackson-databind 2.13.0", 2),
            ],
        ),
        Node::project(
            "proj-2",
            "Admin Portal",
            3,
            SeverityBreakdown { critical: 0, high: 1, medium: 2, low: 0 },
            vec![
                Node::component("comp-3", "react 18.3.1", 1),
                Node::component("comp-4", "lodash 4.17.21", 2),
            ],
        ),
    ]
}
