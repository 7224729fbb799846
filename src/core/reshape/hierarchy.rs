use serde_json::{Map, Value};
use tracing::trace;

use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, coerce_numeric};
use crate::core::spec::ChartSpec;
use crate::core::types::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub name: String,
    pub value: Option<f64>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Nodes in this subtree, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        let children = match object.get("children") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_object().map(Self::from_object))
                .collect(),
            _ => Vec::new(),
        };
        Self {
            name: cell_label(object.get("name")),
            value: coerce_numeric(object.get("value")).value(),
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HierarchyData {
    pub root: Option<HierarchyNode>,
}

/// Validates a nested `{name, value?, children?}` payload.
///
/// Source order: the chart spec's hierarchy payload, the first row when it is itself
/// a node, then the first object cell of the first row that looks like a node.
#[must_use]
pub fn reshape_hierarchy(
    rows: &[Record],
    spec: &ChartSpec,
    diagnostics: &mut Diagnostics,
) -> HierarchyData {
    let root = spec
        .hierarchy
        .as_ref()
        .and_then(Value::as_object)
        .filter(|object| is_node(object))
        .map(HierarchyNode::from_object)
        .or_else(|| rows.first().and_then(node_from_row));

    match &root {
        Some(root) => trace!(nodes = root.node_count(), "reshape hierarchy"),
        None => diagnostics.missing_binding("hierarchy"),
    }
    HierarchyData { root }
}

fn node_from_row(row: &Record) -> Option<HierarchyNode> {
    if row.contains_key("name") || row.contains_key("children") {
        let object: Map<String, Value> = row
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        return Some(HierarchyNode::from_object(&object));
    }
    row.values()
        .filter_map(Value::as_object)
        .find(|object| is_node(object))
        .map(HierarchyNode::from_object)
}

fn is_node(object: &Map<String, Value>) -> bool {
    object.contains_key("name") || object.contains_key("children")
}
