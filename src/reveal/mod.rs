//! Reveal-on-scroll: a one-shot fade-up driven by viewport visibility.
//!
//! The pieces here are free of the DOM except for the browser observers, so the
//! latch and its timing can be exercised without a rendering environment.

pub mod easing;
pub mod geometry;
pub mod observer;
pub mod timeline;

pub use geometry::RootMargin;
pub use observer::{OnceVisible, SharedObserver};
pub use timeline::{RevealAction, RevealConfig, RevealTimeline};
