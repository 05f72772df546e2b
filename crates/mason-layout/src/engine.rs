//! Shortest-column placement.
//!
//! The engine is a pure function of its inputs: it holds no state between
//! passes and recomputes every position wholesale. Greedy placement into the
//! shortest column is deterministic and O(items × columns), fast enough to
//! rerun on every resize event.

use smallvec::{smallvec, SmallVec};

/// Natural (unscaled) size of an item as measured by the host, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSize {
    pub width: f64,
    pub height: f64,
}

impl ItemSize {
    /// Create an item size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolved placement for one item, relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Offset from the container top.
    pub top: f64,
    /// Offset from the container left edge.
    pub left: f64,
    /// Width the item is scaled to (the column width).
    pub width: f64,
}

/// Inputs for a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Number of columns. Zero is treated as one column.
    pub columns: usize,
    /// Inner width of the container in pixels.
    pub container_width: f64,
    /// Gutter between columns and between stacked items, in pixels.
    pub gutter_px: f64,
}

/// Output of a layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// One entry per input item, in the original order. `None` marks an
    /// item that had no measurement this pass.
    pub positions: Vec<Option<Position>>,
    /// Height of the tallest column, without its trailing gutter. Never
    /// negative: an empty pass reports 0.
    pub container_height: f64,
}

impl Layout {
    /// Iterate over the items that received a position this pass.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &Position)> {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(index, position)| position.as_ref().map(|p| (index, p)))
    }
}

/// Compute positions for all measured items.
///
/// Items are processed in index order. Each measured item is scaled
/// uniformly to the column width and appended to the column with the
/// smallest accumulated height, ties going to the lowest column index.
/// Unmeasured items are skipped and pick up a position on a later pass.
///
/// A container narrower than its gutters produces a degenerate (zero or
/// negative) column width, which is propagated as-is rather than treated
/// as an error.
pub fn compute_layout(items: &[Option<ItemSize>], params: &LayoutParams) -> Layout {
    let columns = params.columns.max(1);
    let columns_f = columns as f64;
    let column_width =
        (params.container_width - params.gutter_px * (columns_f - 1.0)) / columns_f;

    let mut column_heights: SmallVec<[f64; 8]> = smallvec![0.0; columns];
    let mut positions = vec![None; items.len()];

    for (index, item) in items.iter().enumerate() {
        let Some(size) = item else { continue };

        let width_scale = column_width / size.width;
        let scaled_height = size.height * width_scale;
        let column = shortest_column(&column_heights);

        positions[index] = Some(Position {
            top: column_heights[column],
            left: column as f64 * (column_width + params.gutter_px),
            width: column_width,
        });
        column_heights[column] += scaled_height + params.gutter_px;
    }

    let tallest = column_heights.iter().fold(0.0_f64, |acc, &h| acc.max(h));
    let container_height = (tallest - params.gutter_px).max(0.0);

    Layout {
        positions,
        container_height,
    }
}

/// Index of the first column with the minimal accumulated height.
fn shortest_column(column_heights: &[f64]) -> usize {
    let mut shortest = 0;
    for (index, &height) in column_heights.iter().enumerate().skip(1) {
        if height < column_heights[shortest] {
            shortest = index;
        }
    }
    shortest
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(side: f64) -> Option<ItemSize> {
        Some(ItemSize::new(side, side))
    }

    #[test]
    fn test_four_squares_two_columns() {
        let items = vec![square(100.0), square(100.0), square(100.0), square(100.0)];
        let params = LayoutParams {
            columns: 2,
            container_width: 200.0,
            gutter_px: 0.0,
        };

        let layout = compute_layout(&items, &params);

        // Column width 100; squares keep their height after scaling.
        let positions: Vec<Position> = layout.positions.iter().map(|p| p.unwrap()).collect();
        assert!((positions[0].top - 0.0).abs() < 0.001);
        assert!((positions[0].left - 0.0).abs() < 0.001);
        assert!((positions[1].top - 0.0).abs() < 0.001);
        assert!((positions[1].left - 100.0).abs() < 0.001);
        // Second row lands one scaled height down, alternating columns.
        assert!((positions[2].top - 100.0).abs() < 0.001);
        assert!((positions[2].left - 0.0).abs() < 0.001);
        assert!((positions[3].top - 100.0).abs() < 0.001);
        assert!((positions[3].left - 100.0).abs() < 0.001);
        assert!((layout.container_height - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_items_scale_to_column_width() {
        let items = vec![Some(ItemSize::new(400.0, 200.0))];
        let params = LayoutParams {
            columns: 2,
            container_width: 220.0,
            gutter_px: 20.0,
        };

        let layout = compute_layout(&items, &params);

        // Column width (220 - 20) / 2 = 100; 400x200 scales to 100x50.
        let position = layout.positions[0].unwrap();
        assert!((position.width - 100.0).abs() < 0.001);
        assert!((layout.container_height - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_shortest_column_wins() {
        // A tall item in column 0 pushes the next two items into column 1.
        let items = vec![
            Some(ItemSize::new(100.0, 300.0)),
            Some(ItemSize::new(100.0, 50.0)),
            Some(ItemSize::new(100.0, 50.0)),
        ];
        let params = LayoutParams {
            columns: 2,
            container_width: 200.0,
            gutter_px: 0.0,
        };

        let layout = compute_layout(&items, &params);

        let positions: Vec<Position> = layout.positions.iter().map(|p| p.unwrap()).collect();
        assert!((positions[1].left - 100.0).abs() < 0.001);
        assert!((positions[2].left - 100.0).abs() < 0.001);
        assert!((positions[2].top - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_tie_breaks_to_first_column() {
        let items = vec![square(100.0)];
        let params = LayoutParams {
            columns: 3,
            container_width: 300.0,
            gutter_px: 0.0,
        };

        let layout = compute_layout(&items, &params);

        assert!((layout.positions[0].unwrap().left - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_unmeasured_items_skipped() {
        let items = vec![square(100.0), None, square(100.0)];
        let params = LayoutParams {
            columns: 2,
            container_width: 200.0,
            gutter_px: 10.0,
        };

        let layout = compute_layout(&items, &params);

        assert!(layout.positions[0].is_some());
        assert!(layout.positions[1].is_none());
        assert!(layout.positions[2].is_some());
        assert_eq!(layout.positioned().count(), 2);
        // The skipped item must not consume column height: both measured
        // items sit at the top of their own column.
        assert!((layout.positions[2].unwrap().top - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_gutter_spacing() {
        let items = vec![square(100.0), square(100.0), square(100.0)];
        let params = LayoutParams {
            columns: 2,
            container_width: 210.0,
            gutter_px: 10.0,
        };

        let layout = compute_layout(&items, &params);

        let positions: Vec<Position> = layout.positions.iter().map(|p| p.unwrap()).collect();
        // Column width (210 - 10) / 2 = 100; column 1 starts past one gutter.
        assert!((positions[1].left - 110.0).abs() < 0.001);
        // Item 2 stacks below item 0 with one gutter in between.
        assert!((positions[2].top - 110.0).abs() < 0.001);
        // Tallest column: 100 + 10 + 100; trailing gutter removed.
        assert!((layout.container_height - 210.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_pass_reports_zero_height() {
        let params = LayoutParams {
            columns: 3,
            container_width: 300.0,
            gutter_px: 16.0,
        };

        assert!((compute_layout(&[], &params).container_height - 0.0).abs() < 0.001);
        assert!(
            (compute_layout(&[None, None], &params).container_height - 0.0).abs() < 0.001
        );
    }

    #[test]
    fn test_zero_columns_treated_as_one() {
        let items = vec![square(100.0), square(100.0)];
        let params = LayoutParams {
            columns: 0,
            container_width: 100.0,
            gutter_px: 0.0,
        };

        let layout = compute_layout(&items, &params);

        let positions: Vec<Position> = layout.positions.iter().map(|p| p.unwrap()).collect();
        assert!((positions[0].left - 0.0).abs() < 0.001);
        assert!((positions[1].left - 0.0).abs() < 0.001);
        assert!((positions[1].top - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_width_propagates() {
        // Container narrower than its gutters: column width goes negative.
        let items = vec![square(100.0)];
        let params = LayoutParams {
            columns: 3,
            container_width: 10.0,
            gutter_px: 20.0,
        };

        let layout = compute_layout(&items, &params);

        assert!(layout.positions[0].unwrap().width < 0.0);
    }

    fn arb_items() -> impl Strategy<Value = Vec<Option<ItemSize>>> {
        proptest::collection::vec(
            proptest::option::of(
                (1.0f64..2000.0, 1.0f64..2000.0).prop_map(|(w, h)| ItemSize::new(w, h)),
            ),
            0..64,
        )
    }

    proptest! {
        #[test]
        fn prop_idempotent(items in arb_items(), columns in 1usize..8, width in 100.0f64..2000.0, gutter in 0.0f64..48.0) {
            let params = LayoutParams { columns, container_width: width, gutter_px: gutter };
            let first = compute_layout(&items, &params);
            let second = compute_layout(&items, &params);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_height_matches_tallest_column(items in arb_items(), columns in 1usize..8, width in 100.0f64..2000.0, gutter in 0.0f64..48.0) {
            let params = LayoutParams { columns, container_width: width, gutter_px: gutter };
            let layout = compute_layout(&items, &params);

            // Replay the column accumulation from the reported positions.
            let column_width = (width - gutter * (columns as f64 - 1.0)) / columns as f64;
            let mut heights = vec![0.0f64; columns];
            for (index, position) in layout.positioned() {
                let size = items[index].unwrap();
                let column = (position.left / (column_width + gutter)).round() as usize;
                heights[column] += size.height * (column_width / size.width) + gutter;
            }
            let expected = (heights.iter().fold(0.0f64, |a, &b| a.max(b)) - gutter).max(0.0);
            prop_assert!((layout.container_height - expected).abs() < 1e-6);
        }

        #[test]
        fn prop_every_measured_item_positioned(items in arb_items(), columns in 1usize..8) {
            let params = LayoutParams { columns, container_width: 1000.0, gutter_px: 16.0 };
            let layout = compute_layout(&items, &params);
            for (item, position) in items.iter().zip(&layout.positions) {
                prop_assert_eq!(item.is_some(), position.is_some());
            }
        }
    }
}
