//! Table view-models shared by the HTML and terminal renderers

use crate::{client_url, ClusterInfo, Namespace, Node, Pod};
use serde::Serialize;

/// Label of the per-pod client link
pub const OPEN_LABEL: &str = "Open";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Link { href: String, label: String },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Plain-text form, used where links cannot be clicked
    pub fn plain(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Link { href, .. } => href,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn nodes(nodes: &[Node]) -> Self {
        Self {
            headers: vec!["Node Name", "Status"],
            rows: nodes
                .iter()
                .map(|node| vec![Cell::text(&node.name), Cell::text(&node.status)])
                .collect(),
        }
    }

    pub fn namespaces(namespaces: &[Namespace]) -> Self {
        Self {
            headers: vec!["Namespace Name"],
            rows: namespaces.iter().map(|ns| vec![Cell::text(&ns.name)]).collect(),
        }
    }

    /// Every pod links to the client of the namespace it was queried for
    pub fn pods(namespace: &str, pods: &[Pod]) -> Self {
        let href = client_url(namespace);
        Self {
            headers: vec!["Pod Name", "Status", "Link"],
            rows: pods
                .iter()
                .map(|pod| {
                    vec![
                        Cell::text(&pod.name),
                        Cell::text(&pod.status),
                        Cell::Link { href: href.clone(), label: OPEN_LABEL.to_string() },
                    ]
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Heading plus table, as shown under the cluster-info container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub table: Table,
}

impl Section {
    pub fn cluster(info: &ClusterInfo) -> Vec<Section> {
        vec![
            Section { heading: "Nodes", table: Table::nodes(&info.nodes) },
            Section { heading: "Namespaces", table: Table::namespaces(&info.namespaces) },
        ]
    }
}

/// Paragraph text for an error reported inside a `/status` body
pub fn status_error_text(message: &str) -> String {
    format!("Error: {}", message)
}
