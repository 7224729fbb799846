use crate::api::plan_context::PlanContext;
use crate::core::reshape::{NetworkData, NetworkNode, NodeRole};
use crate::core::{ChartKind, Color, Diagnostics, SankeyOrient};
use crate::render::{
    EmphasisPolicy, GraphCategory, GraphLayout, GraphLink, GraphNode, LabelContent, LabelPolicy,
    LabelPosition, SeriesData, SeriesDescriptor, SeriesLayout, VisualType,
};

const DIMENSION_NODE_COLOR: Color = Color::rgb(0x74, 0x83, 0x8F);
const DEFAULT_CATEGORY: &str = "Node";

/// Node marker size grows with degree.
#[must_use]
pub fn node_symbol_size(degree: usize) -> f64 {
    10.0 + degree as f64 * 2.0
}

/// Category names used by graph layouts (`Node` when none are configured).
#[must_use]
pub fn graph_category_names(ctx: &PlanContext<'_>) -> Vec<String> {
    if ctx.spec.graph_categories.is_empty() {
        vec![DEFAULT_CATEGORY.to_owned()]
    } else {
        ctx.spec.graph_categories.clone()
    }
}

#[must_use]
pub fn build_network_series(
    data: &NetworkData,
    ctx: &PlanContext<'_>,
    _diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    let descriptor = match ctx.kind {
        ChartKind::Sankey => sankey(data, ctx),
        ChartKind::Chord => chord(data, ctx),
        _ => graph(data, ctx),
    };
    vec![descriptor.with_label(LabelPolicy::shown(
        LabelContent::Name,
        LabelPosition::Right,
        ctx.spec.number_format,
    ))]
}

fn graph(data: &NetworkData, ctx: &PlanContext<'_>) -> SeriesDescriptor {
    let categories = graph_category_names(ctx)
        .into_iter()
        .enumerate()
        .map(|(index, name)| GraphCategory {
            name,
            color: ctx.palette.color(index),
        })
        .collect();
    let layout = if ctx.kind == ChartKind::CircularGraph {
        GraphLayout::Circular { curveness: 0.3 }
    } else {
        GraphLayout::Force {
            repulsion: 300.0,
            gravity: 0.1,
            edge_length: [80.0, 150.0],
        }
    };

    let nodes = data
        .nodes
        .iter()
        .map(|node| GraphNode {
            name: node.name.clone(),
            value: node.degree as f64,
            symbol_size: node_symbol_size(node.degree),
            category: 0,
            color: role_color(node, ctx),
        })
        .collect();

    SeriesDescriptor::new(
        VisualType::Graph,
        "Network",
        SeriesData::Graph {
            nodes,
            links: links(data, false),
        },
        SeriesLayout::Graph {
            layout,
            categories,
            roam: true,
        },
    )
    .with_emphasis(EmphasisPolicy::FocusAdjacency)
}

fn sankey(data: &NetworkData, ctx: &PlanContext<'_>) -> SeriesDescriptor {
    let reverse = ctx.spec.sankey_orient == SankeyOrient::RightToLeft;
    SeriesDescriptor::new(
        VisualType::Sankey,
        "Flow",
        SeriesData::Graph {
            nodes: indexed_nodes(data, ctx),
            links: links(data, reverse),
        },
        SeriesLayout::Sankey {
            vertical: ctx.spec.sankey_orient == SankeyOrient::Vertical,
        },
    )
    .with_emphasis(EmphasisPolicy::FocusAdjacency)
}

fn chord(data: &NetworkData, ctx: &PlanContext<'_>) -> SeriesDescriptor {
    SeriesDescriptor::new(
        VisualType::Chord,
        "Chord",
        SeriesData::Graph {
            nodes: indexed_nodes(data, ctx),
            links: links(data, false),
        },
        SeriesLayout::Chord,
    )
    .with_emphasis(EmphasisPolicy::FocusAdjacency)
}

/// Nodes colored by position, dimension nodes in neutral grey.
fn indexed_nodes(data: &NetworkData, ctx: &PlanContext<'_>) -> Vec<GraphNode> {
    data.nodes
        .iter()
        .enumerate()
        .map(|(index, node)| GraphNode {
            name: node.name.clone(),
            value: node.degree as f64,
            symbol_size: node_symbol_size(node.degree),
            category: 0,
            color: Some(match node.role {
                NodeRole::Dimension => DIMENSION_NODE_COLOR,
                NodeRole::Endpoint | NodeRole::Measure => ctx.palette.color(index),
            }),
        })
        .collect()
}

fn role_color(node: &NetworkNode, ctx: &PlanContext<'_>) -> Option<Color> {
    match node.role {
        NodeRole::Endpoint => None,
        NodeRole::Dimension => Some(DIMENSION_NODE_COLOR),
        NodeRole::Measure => Some(ctx.palette.color(node.ordinal)),
    }
}

fn links(data: &NetworkData, reverse: bool) -> Vec<GraphLink> {
    data.links
        .iter()
        .map(|link| {
            let (source, target) = if reverse {
                (link.target.clone(), link.source.clone())
            } else {
                (link.source.clone(), link.target.clone())
            };
            GraphLink {
                source,
                target,
                value: link.value,
            }
        })
        .collect()
}
