//! Iced surface adapter for the bar geometry engine.
//!
//! `meter-render` computes offsets, lengths and corner styles; this crate
//! only maps the visible [`LayerCell`](meter_render::LayerCell)s onto iced
//! elements. Swapping the rendering surface means swapping this crate,
//! not the geometry.

pub mod bars;

pub use bars::view;
