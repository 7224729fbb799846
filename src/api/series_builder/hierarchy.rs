use crate::api::plan_context::PlanContext;
use crate::core::reshape::{HierarchyData, HierarchyNode};
use crate::core::{ChartKind, Diagnostics, Palette};
use crate::render::{
    EmphasisPolicy, LabelContent, LabelPolicy, LabelPosition, SeriesData, SeriesDescriptor,
    SeriesLayout, TreeNode, VisualType,
};

const INITIAL_TREE_DEPTH: u32 = 3;

#[must_use]
pub fn build_hierarchy_series(
    data: &HierarchyData,
    ctx: &PlanContext<'_>,
    _diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    let name = data
        .root
        .as_ref()
        .map(|root| root.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Hierarchy".to_owned());
    let format = ctx.spec.number_format;

    let descriptor = match ctx.kind {
        ChartKind::Treemap => SeriesDescriptor::new(
            VisualType::Treemap,
            name,
            SeriesData::Tree(
                data.root
                    .iter()
                    .map(|root| treemap_root(root, ctx.palette))
                    .collect(),
            ),
            SeriesLayout::Treemap { breadcrumb: true },
        )
        .with_label(LabelPolicy::shown(LabelContent::Name, LabelPosition::Inside, format))
        .with_emphasis(EmphasisPolicy::FocusDescendant),
        ChartKind::Sunburst => SeriesDescriptor::new(
            VisualType::Sunburst,
            name,
            SeriesData::Tree(
                data.root
                    .iter()
                    .flat_map(|root| sunburst_rings(root, ctx.palette))
                    .collect(),
            ),
            SeriesLayout::Sunburst,
        )
        .with_label(LabelPolicy::shown(LabelContent::Name, LabelPosition::Inside, format))
        .with_emphasis(EmphasisPolicy::FocusAncestor),
        _ => {
            let radial = ctx.kind == ChartKind::RadialTree;
            let orient = ctx.spec.tree_orient;
            let position = if radial || orient.is_vertical() {
                LabelPosition::Top
            } else {
                LabelPosition::Right
            };
            SeriesDescriptor::new(
                VisualType::Tree,
                name,
                SeriesData::Tree(data.root.iter().map(plain).collect()),
                SeriesLayout::Tree {
                    orient,
                    radial,
                    initial_depth: INITIAL_TREE_DEPTH,
                },
            )
            .with_color(ctx.palette.color(0))
            .with_label(LabelPolicy::shown(LabelContent::Name, position, format))
            .with_emphasis(EmphasisPolicy::FocusDescendant)
        }
    };
    vec![descriptor]
}

fn plain(node: &HierarchyNode) -> TreeNode {
    TreeNode {
        name: node.name.clone(),
        value: node.value,
        color: None,
        children: node.children.iter().map(plain).collect(),
    }
}

/// Root plus first-level blocks colored by sibling index; deeper levels inherit.
fn treemap_root(root: &HierarchyNode, palette: Palette) -> TreeNode {
    let mut tree = plain(root);
    for (index, child) in tree.children.iter_mut().enumerate() {
        child.color = Some(palette.color(index));
    }
    tree
}

/// Rings start at the root's children; color index is `(sibling_index + depth) % len`.
fn sunburst_rings(root: &HierarchyNode, palette: Palette) -> Vec<TreeNode> {
    root.children
        .iter()
        .enumerate()
        .map(|(index, child)| colored(child, 1, index, palette))
        .collect()
}

fn colored(node: &HierarchyNode, depth: usize, sibling_index: usize, palette: Palette) -> TreeNode {
    TreeNode {
        name: node.name.clone(),
        value: node.value,
        color: Some(palette.color(sibling_index + depth)),
        children: node
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| colored(child, depth + 1, index, palette))
            .collect(),
    }
}
