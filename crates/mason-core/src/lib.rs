//! Core value types for the Mason masonry layout engine.
//!
//! This crate holds the pieces of configuration that exist before any layout
//! happens: gutter sizes (with CSS-style unit parsing) and responsive column
//! breakpoints. Both resolve to plain numbers that feed the layout engine.

mod breakpoints;
mod units;

pub use breakpoints::ColumnBreakpoints;
pub use units::{parse_css_px, Gutter, GutterParseError, DEFAULT_GUTTER_PX, REM_BASE_PX};
