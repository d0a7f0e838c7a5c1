use meter_theme::CellStyle;

/// One visual segment of a bar.
///
/// Owned exclusively by its parent [`BarSlot`]; only the renderer mutates
/// it, and only through [`BarRenderer::update_bars`](crate::BarRenderer::update_bars).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerCell {
    pub visible: bool,
    /// Offset from the slot origin, device-independent units.
    pub x: f32,
    pub y: f32,
    pub style: CellStyle,
}

impl LayerCell {
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Fixed-position container for one bar's stacked layers.
///
/// Index 0 is the innermost (first-drawn) layer. The cell count is fixed
/// at construction; updates only toggle visibility and rewrite geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSlot {
    pub cells: Vec<LayerCell>,
}

impl BarSlot {
    /// Build a slot with `layers` cells. Only layer 0 starts visible;
    /// higher layers stay hidden until the first update populates them.
    pub fn new(layers: usize) -> Self {
        let cells = (0..layers)
            .map(|k| LayerCell {
                visible: k == 0,
                ..Default::default()
            })
            .collect();
        Self { cells }
    }

    pub fn hide_all(&mut self) {
        for cell in &mut self.cells {
            cell.hide();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_layer_starts_visible() {
        let slot = BarSlot::new(3);
        assert!(slot.cells[0].visible);
        assert!(!slot.cells[1].visible);
        assert!(!slot.cells[2].visible);
    }

    #[test]
    fn hide_all_hides_everything() {
        let mut slot = BarSlot::new(2);
        slot.hide_all();
        assert!(slot.cells.iter().all(|c| !c.visible));
    }
}
