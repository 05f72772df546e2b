//! Host-facing rendering lifecycle for masonry layouts.
//!
//! The engine is headless: a host UI layer owns the actual elements and
//! feeds this crate viewport resizes, element measurements, and timer
//! callbacks. In return it reads back a [`RenderFrame`] describing what to
//! draw: a skeleton while measurements are pending, then absolutely
//! positioned items at a fixed container height.
//!
//! # Example
//!
//! ```
//! use mason_layout::ItemSize;
//! use mason_render::{MasonryController, MasonryOptions, Phase};
//!
//! let mut controller = MasonryController::new(MasonryOptions::default());
//! controller.set_items(2);
//! controller.attach(1280.0, 960.0);
//! assert_eq!(controller.phase(), Phase::Skeleton);
//!
//! let measurements = vec![
//!     Some(ItemSize::new(400.0, 300.0)),
//!     Some(ItemSize::new(400.0, 500.0)),
//! ];
//! let token = controller.relayout(measurements.as_slice()).unwrap();
//!
//! // ... the host waits out the settle delay, then:
//! controller.settle(token);
//! assert_eq!(controller.phase(), Phase::Positioned);
//! ```

mod controller;
mod viewport;

pub use controller::{
    MasonryController, MasonryOptions, MeasureSource, Phase, RenderFrame, SettleToken,
    SETTLE_DELAY,
};
pub use viewport::{Subscription, Viewport};
