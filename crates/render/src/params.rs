use meter_core::{Align, Orientation};
use meter_theme::Color;

/// Construction parameters for a [`BarRenderer`](crate::BarRenderer).
///
/// Immutable after construction: the bar/layer grid is sized from these
/// once and only cell visibility, position and style change per update.
#[derive(Debug, Clone)]
pub struct RenderParams {
    pub orientation: Orientation,
    /// A header row sits above the bars; vertical height gets clamped to
    /// leave room for it.
    pub header: bool,
    /// Compact variant: smaller corner radii, cross-axis fill alignment.
    pub mini: bool,
    /// Fixed width bound. `0.0` = no bound.
    pub width: f32,
    /// Fixed height bound. `0.0` = no bound.
    pub height: f32,
    pub num_bars: usize,
    /// Stacked layers per bar slot; fixed for the component's lifetime.
    pub layers: usize,
    /// Layer palette, indexed by `LayerUsage::color`.
    pub colors: Vec<Color>,
    pub x_align: Align,
    pub y_align: Align,
    /// Extra style string forwarded verbatim to the surface adapter.
    pub style: String,
    /// Opaque layer-breakdown identifier, not interpreted here.
    pub breakdown: Option<String>,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            header: false,
            mini: false,
            width: 0.0,
            height: 0.0,
            num_bars: 1,
            layers: 1,
            colors: Vec::new(),
            x_align: Align::Center,
            y_align: Align::Center,
            style: String::new(),
            breakdown: None,
        }
    }
}

impl RenderParams {
    /// Apply construction-time normalisation: mini mode fills the
    /// cross axis instead of centering.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.mini {
            self.y_align = Align::Fill;
        }
        self
    }

    /// Fixed extent across the bars (the axis the bars share).
    #[must_use]
    pub fn cross_axis_size(&self) -> f32 {
        match self.orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }
}
