use std::cell::Cell;
use std::rc::Rc;

use meter_config::{ConfigNotifier, Listener};
use meter_core::{Orientation, UsageFrame};
use meter_theme::{style_class, CellStyle, Color, ThemeMode};

use crate::cell::BarSlot;
use crate::geometry::{self, FRAME_INSET, HEADER_RESERVE};
use crate::params::RenderParams;

/// Measured on-screen geometry of the renderer's container, supplied by
/// the host on every update.
///
/// `None` at the call site means the component is detached (no renderable
/// surface), in which case updates are skipped entirely. `parent_height`
/// must be the measured height of the containing element; it only matters
/// for vertical bars with a header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub parent_height: f32,
    /// Device pixel density multiplier from the display.
    pub scale_factor: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            parent_height: 0.0,
            scale_factor: 1.0,
        }
    }
}

/// Multi-layer proportional bar renderer.
///
/// Owns a fixed `num_bars × layers` grid of [`LayerCell`]s and recomputes
/// their geometry on every [`update_bars`] call. Purely synchronous; all
/// mutation happens on the caller's thread, in call order.
///
/// [`LayerCell`]: crate::LayerCell
/// [`update_bars`]: BarRenderer::update_bars
#[derive(Debug)]
pub struct BarRenderer {
    params: RenderParams,
    bar_thickness: f32,
    style_class: String,
    bars: Vec<BarSlot>,
    style_stale: Rc<Cell<bool>>,
    // held only so the registration is released when the renderer drops
    _theme_listener: Listener,
}

impl BarRenderer {
    /// Build the cell grid and register for theme-change notifications.
    ///
    /// The registration lives exactly as long as the renderer: dropping
    /// the renderer deregisters the callback.
    pub fn new(params: RenderParams, mode: ThemeMode, notifier: &ConfigNotifier) -> Self {
        let params = params.normalized();
        let bar_thickness = geometry::bar_thickness(params.num_bars, params.cross_axis_size());
        let bars = (0..params.num_bars)
            .map(|_| BarSlot::new(params.layers))
            .collect();

        let style_stale = Rc::new(Cell::new(false));
        let flag = Rc::clone(&style_stale);
        let _theme_listener = notifier.subscribe(move || flag.set(true));

        Self {
            style_class: style_class(params.orientation, params.mini, mode),
            bar_thickness,
            bars,
            style_stale,
            _theme_listener,
            params,
        }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    pub fn bars(&self) -> &[BarSlot] {
        &self.bars
    }

    /// Per-bar extent across the primary axis, fixed at construction.
    pub fn bar_thickness(&self) -> f32 {
        self.bar_thickness
    }

    pub fn style_class(&self) -> &str {
        &self.style_class
    }

    /// `true` once the config notifier has fired since the last
    /// [`set_style`](BarRenderer::set_style).
    pub fn needs_restyle(&self) -> bool {
        self.style_stale.get()
    }

    /// Recompute the style class for the current theme mode.
    pub fn set_style(&mut self, mode: ThemeMode) {
        self.style_class = style_class(self.params.orientation, self.params.mini, mode);
        self.style_stale.set(false);
    }

    /// Apply a fresh usage frame to the cell grid.
    ///
    /// Degrades instead of failing: missing bars or layers are hidden,
    /// malformed numeric input collapses to the 1-unit minimum, excess
    /// bars in the frame are ignored. Calling twice with the same input
    /// leaves the grid in an identical state.
    pub fn update_bars(&mut self, frame: &UsageFrame, viewport: Option<&Viewport>) {
        // detached from any renderable surface: nothing to lay out
        let Some(vp) = viewport else { return };

        let mut width = vp.width;
        let mut height = vp.height;
        if self.params.width > 0.0 && width > self.params.width {
            width = self.params.width;
        }

        if self.params.orientation == Orientation::Vertical && self.params.header {
            if self.params.height > 0.0 && height > self.params.height {
                height = self.params.height;
            }
            // reserve room for the header row in the parent
            if height > vp.parent_height - HEADER_RESERVE {
                height = vp.parent_height - HEADER_RESERVE;
            }
        }

        let size = match self.params.orientation {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        } - FRAME_INSET;

        if frame.is_empty() {
            self.hide_all();
            return;
        }

        let orientation = self.params.orientation;
        let mini = self.params.mini;
        let scale = vp.scale_factor;
        let thickness = self.bar_thickness;

        for (i, slot) in self.bars.iter_mut().enumerate() {
            let Some(values) = frame.bar(i) else {
                slot.hide_all();
                continue;
            };

            let mut start = 0.0_f32;
            for (l, cell) in slot.cells.iter_mut().enumerate() {
                let Some(entry) = values.get(l) else {
                    cell.hide();
                    continue;
                };

                let fill = geometry::fill_size(entry.value, size, scale);
                let (x, y) = geometry::layer_position(orientation, start, fill, size);

                let background = match self.params.colors.get(entry.color) {
                    Some(color) => *color,
                    None => {
                        tracing::debug!(
                            index = entry.color,
                            bar = i,
                            layer = l,
                            "palette index out of range"
                        );
                        Color::TRANSPARENT
                    }
                };

                cell.x = x;
                cell.y = y;
                cell.style = CellStyle {
                    radii: geometry::corner_radii(start, fill, size, orientation, mini, scale),
                    background,
                    thickness,
                    length: fill,
                };
                cell.visible = true;

                start += fill;
            }
        }
    }

    /// Hide every cell in every slot (the no-data state).
    pub fn hide_all(&mut self) {
        for slot in &mut self.bars {
            slot.hide_all();
        }
    }
}
