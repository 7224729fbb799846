use std::collections::BTreeSet;

use tracing::trace;

use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, coerce_numeric};
use crate::core::spec::ChartSpec;
use crate::core::types::Record;

use super::numeric_or_zero;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixCell {
    pub x: usize,
    pub y: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatrixData {
    pub x_categories: Vec<String>,
    pub y_categories: Vec<String>,
    pub cells: Vec<MatrixCell>,
}

/// Bins rows into `[x_index, y_index, value]` cells over sorted category lists.
///
/// Rows with an empty x or y are dropped; a non-numeric value becomes zero.
/// Duplicate (x, y) pairs are kept as separate cells in row order.
#[must_use]
pub fn reshape_matrix(
    rows: &[Record],
    spec: &ChartSpec,
    diagnostics: &mut Diagnostics,
) -> MatrixData {
    let binding = spec.matrix.clone().unwrap_or_default();
    let field = |value: Option<String>| value.filter(|f| !f.is_empty());
    let (Some(x_field), Some(y_field), Some(value_field)) = (
        field(binding.x_field),
        field(binding.y_field),
        field(binding.value_field),
    ) else {
        diagnostics.missing_binding("matrix.xField/yField/valueField");
        return MatrixData::default();
    };

    let labelled: Vec<(String, String, &Record)> = rows
        .iter()
        .map(|row| {
            (
                cell_label(row.get(&x_field)),
                cell_label(row.get(&y_field)),
                row,
            )
        })
        .filter(|(x, y, _)| !x.is_empty() && !y.is_empty())
        .collect();

    let x_categories: Vec<String> = labelled
        .iter()
        .map(|(x, _, _)| x.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let y_categories: Vec<String> = labelled
        .iter()
        .map(|(_, y, _)| y.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut invalid = 0usize;
    let cells = labelled
        .iter()
        .filter_map(|(x, y, row)| {
            let x = x_categories.binary_search(x).ok()?;
            let y = y_categories.binary_search(y).ok()?;
            let numeric = coerce_numeric(row.get(&value_field));
            if numeric.is_invalid() {
                invalid += 1;
            }
            Some(MatrixCell {
                x,
                y,
                value: numeric_or_zero(numeric),
            })
        })
        .collect::<Vec<_>>();
    diagnostics.non_numeric(value_field.as_str(), invalid);

    trace!(
        x = x_categories.len(),
        y = y_categories.len(),
        cells = cells.len(),
        "reshape matrix"
    );
    MatrixData {
        x_categories,
        y_categories,
        cells,
    }
}
