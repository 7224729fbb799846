use indexmap::IndexMap;
use tracing::trace;

use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, coerce_numeric};
use crate::core::spec::{ChartSpec, SeriesBinding};
use crate::core::types::{Record, find_column_exact};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Node named by a source/target cell.
    Endpoint,
    /// Row-dimension node of a bipartite (x field by series) network.
    Dimension,
    /// Series node of a bipartite network.
    Measure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    pub name: String,
    /// Appearances as link source or target.
    pub degree: usize,
    pub role: NodeRole,
    /// Position of the originating binding, for measure nodes.
    pub ordinal: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkData {
    /// Deduplicated, first-seen order.
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
}

impl NetworkData {
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

/// Builds nodes and links from `source`/`target`/`value` columns.
///
/// Columns are matched by case-insensitive exact name. Rows with an empty
/// source or target are dropped; a missing or non-numeric value weighs 1.
/// Without source/target columns, an x field plus visible bindings form a
/// bipartite network (row label to series name) with one link per non-zero
/// numeric cell.
#[must_use]
pub fn reshape_network(
    rows: &[Record],
    spec: &ChartSpec,
    diagnostics: &mut Diagnostics,
) -> NetworkData {
    let source_field = find_column_exact(rows, "source");
    let target_field = find_column_exact(rows, "target");

    let data = match (source_field, target_field) {
        (Some(source), Some(target)) => {
            let value_field = find_column_exact(rows, "value");
            edge_list(rows, source, target, value_field)
        }
        _ => {
            let x_field = spec.x_axis_field.as_deref().filter(|f| !f.is_empty());
            let visible: Vec<&SeriesBinding> = spec.visible_series().collect();
            match x_field {
                Some(x_field) if !visible.is_empty() => bipartite(rows, x_field, &visible),
                _ => {
                    if !rows.is_empty() {
                        diagnostics.missing_binding("source/target");
                    }
                    NetworkData::default()
                }
            }
        }
    };

    trace!(
        nodes = data.nodes.len(),
        links = data.links.len(),
        "reshape network"
    );
    data
}

fn edge_list(
    rows: &[Record],
    source_field: &str,
    target_field: &str,
    value_field: Option<&str>,
) -> NetworkData {
    let mut nodes: IndexMap<String, NetworkNode> = IndexMap::new();
    let mut links = Vec::new();

    for row in rows {
        let source = cell_label(row.get(source_field));
        let target = cell_label(row.get(target_field));
        if source.is_empty() || target.is_empty() {
            continue;
        }
        let value = value_field
            .and_then(|field| coerce_numeric(row.get(field)).value())
            .unwrap_or(1.0);

        touch(&mut nodes, &source, NodeRole::Endpoint, 0);
        touch(&mut nodes, &target, NodeRole::Endpoint, 0);
        links.push(NetworkLink {
            source,
            target,
            value,
        });
    }

    NetworkData {
        nodes: nodes.into_values().collect(),
        links,
    }
}

fn bipartite(rows: &[Record], x_field: &str, visible: &[&SeriesBinding]) -> NetworkData {
    let mut nodes: IndexMap<String, NetworkNode> = IndexMap::new();
    for (ordinal, binding) in visible.iter().enumerate() {
        nodes
            .entry(binding.display_name().to_owned())
            .or_insert_with(|| NetworkNode {
                name: binding.display_name().to_owned(),
                degree: 0,
                role: NodeRole::Measure,
                ordinal,
            });
    }

    let mut links = Vec::new();
    for row in rows {
        let source = cell_label(row.get(x_field));
        if source.is_empty() {
            continue;
        }
        if !nodes.contains_key(&source) {
            nodes.insert(
                source.clone(),
                NetworkNode {
                    name: source.clone(),
                    degree: 0,
                    role: NodeRole::Dimension,
                    ordinal: 0,
                },
            );
        }
        for binding in visible {
            let Some(value) = coerce_numeric(row.get(&binding.id))
                .value()
                .filter(|value| *value != 0.0)
            else {
                continue;
            };
            let target = binding.display_name().to_owned();
            touch(&mut nodes, &source, NodeRole::Dimension, 0);
            touch(&mut nodes, &target, NodeRole::Measure, 0);
            links.push(NetworkLink {
                source: source.clone(),
                target,
                value,
            });
        }
    }

    NetworkData {
        nodes: nodes.into_values().collect(),
        links,
    }
}

fn touch(nodes: &mut IndexMap<String, NetworkNode>, name: &str, role: NodeRole, ordinal: usize) {
    match nodes.get_mut(name) {
        Some(node) => node.degree += 1,
        None => {
            nodes.insert(
                name.to_owned(),
                NetworkNode {
                    name: name.to_owned(),
                    degree: 1,
                    role,
                    ordinal,
                },
            );
        }
    }
}
