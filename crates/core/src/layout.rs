/// Direction in which bars grow.
///
/// Vertical bars grow bottom-up from the baseline; horizontal bars grow
/// left-to-right from the origin. No other stacking model is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// Alignment hint passed through to the rendering surface.
///
/// The geometry core never interprets this; it travels with the
/// construction parameters so the surface adapter can honour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
    Fill,
}
