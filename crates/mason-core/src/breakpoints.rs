//! Responsive column-count resolution.
//!
//! A column configuration is either a fixed count or a table of viewport
//! breakpoints: minimum viewport width mapped to the column count that
//! applies at or above that width.

use indexmap::IndexMap;

/// Column configuration for a masonry container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnBreakpoints {
    /// The same column count at every viewport width.
    Fixed(usize),
    /// Minimum viewport width in pixels mapped to column count.
    Responsive(IndexMap<u32, usize>),
}

impl ColumnBreakpoints {
    /// Create a fixed column count.
    pub fn fixed(columns: usize) -> Self {
        ColumnBreakpoints::Fixed(columns)
    }

    /// Create a responsive table from (min width, column count) pairs.
    pub fn responsive(entries: impl IntoIterator<Item = (u32, usize)>) -> Self {
        ColumnBreakpoints::Responsive(entries.into_iter().collect())
    }

    /// Resolve the column count for the given viewport width.
    ///
    /// Fixed counts are returned directly. Responsive tables are evaluated
    /// from the widest threshold down; the first threshold at or below the
    /// viewport width wins. A viewport narrower than every threshold gets
    /// the smallest threshold's count, and an empty table resolves to 1.
    pub fn resolve(&self, viewport_width: f64) -> usize {
        match self {
            ColumnBreakpoints::Fixed(columns) => *columns,
            ColumnBreakpoints::Responsive(table) => {
                let mut entries: Vec<(u32, usize)> =
                    table.iter().map(|(width, columns)| (*width, *columns)).collect();
                entries.sort_by(|a, b| b.0.cmp(&a.0));

                for (min_width, columns) in &entries {
                    if viewport_width >= f64::from(*min_width) {
                        return *columns;
                    }
                }

                entries.last().map_or(1, |(_, columns)| *columns)
            }
        }
    }
}

impl Default for ColumnBreakpoints {
    fn default() -> Self {
        ColumnBreakpoints::Fixed(3)
    }
}

impl From<usize> for ColumnBreakpoints {
    fn from(columns: usize) -> Self {
        ColumnBreakpoints::Fixed(columns)
    }
}
