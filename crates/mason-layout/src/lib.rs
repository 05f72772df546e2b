//! Masonry layout computation.
//!
//! This crate computes per-item positions for a Pinterest-style column
//! layout: items scale uniformly to the column width and always extend the
//! currently shortest column.
//!
//! # Example
//!
//! ```
//! use mason_layout::{compute_layout, ItemSize, LayoutParams};
//!
//! let items = vec![
//!     Some(ItemSize::new(100.0, 100.0)),
//!     Some(ItemSize::new(100.0, 150.0)),
//!     Some(ItemSize::new(100.0, 80.0)),
//! ];
//! let layout = compute_layout(
//!     &items,
//!     &LayoutParams { columns: 2, container_width: 420.0, gutter_px: 20.0 },
//! );
//!
//! assert_eq!(layout.positions.len(), 3);
//! ```

mod engine;

pub use engine::{compute_layout, ItemSize, Layout, LayoutParams, Position};
