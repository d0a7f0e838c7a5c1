use crate::snapshot::SystemSnapshot;

/// Input for one stacked segment: a palette index plus the fraction of the
/// bar's usable extent it should fill, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerUsage {
    pub color: usize,
    pub value: f32,
}

impl LayerUsage {
    pub fn new(color: usize, value: f32) -> Self {
        Self { color, value }
    }
}

/// Per-update input for the bar renderer.
///
/// Outer index = bar position, inner index = layer (0 = first-drawn layer).
/// A bar may carry fewer layer entries than the renderer was configured
/// with — the missing layers are simply hidden. Extra bars beyond the
/// configured count are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageFrame {
    pub bars: Vec<Vec<LayerUsage>>,
}

impl UsageFrame {
    pub fn new(bars: Vec<Vec<LayerUsage>>) -> Self {
        Self { bars }
    }

    /// A frame with no data at all — renders as fully hidden bars.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bar(&self, index: usize) -> Option<&[LayerUsage]> {
        self.bars.get(index).map(Vec::as_slice)
    }
}

/// Every concrete indicator (CPU, memory, …) must implement this trait.
///
/// Sources are purely functional: they receive a read-only resource
/// snapshot and return the stacked fractions for the renderer. All
/// geometry is handled by the `meter-render` crate.
pub trait UsageSource: Send + Sync + std::fmt::Debug {
    /// Unique string identifier, e.g. `"cpu"` or `"memory"`.
    fn id(&self) -> &str;

    /// Turn a snapshot into per-bar, per-layer usage fractions.
    fn usage_frame(&self, snapshot: &SystemSnapshot) -> UsageFrame;
}
