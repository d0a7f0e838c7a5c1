//! Geometry and style engine for multi-layer proportional bars.
//!
//! This crate owns the sizing arithmetic: given construction parameters, a
//! measured viewport and a frame of normalised usage fractions, it computes
//! per-layer pixel offsets, lengths and corner styling for a fixed grid of
//! bar slots. It never touches a rendering surface — `meter-widgets` (or
//! any other adapter) applies the computed [`LayerCell`]s to whatever the
//! host environment draws with.

pub mod cell;
pub mod geometry;
pub mod params;
pub mod renderer;

pub use cell::{BarSlot, LayerCell};
pub use params::RenderParams;
pub use renderer::{BarRenderer, Viewport};
