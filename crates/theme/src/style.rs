use crate::colors::Color;
use meter_core::Orientation;

/// Global theme mode, resolved from the `[theme]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse a config string; anything that isn't `"light"` means dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Per-corner border radii of one bar segment.
///
/// Only the outermost edges of a stacked bar get rounded corners; interior
/// segment boundaries stay square so the stack reads as one rounded bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const SQUARE: Self = Self {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Convert to an [`iced::border::Radius`] for the surface adapter.
    #[inline]
    pub fn to_iced(self) -> iced::border::Radius {
        iced::border::Radius {
            top_left: self.top_left,
            top_right: self.top_right,
            bottom_right: self.bottom_right,
            bottom_left: self.bottom_left,
        }
    }
}

/// Computed visual style of one layer segment, ready to hand to whatever
/// rendering surface hosts the bars.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub radii: CornerRadii,
    pub background: Color,
    /// Extent across the bar (fixed per construction).
    pub thickness: f32,
    /// Extent along the primary axis.
    pub length: f32,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            radii: CornerRadii::SQUARE,
            background: Color::TRANSPARENT,
            thickness: 0.0,
            length: 0.0,
        }
    }
}

/// Deterministic style-class mapping: orientation × mini × theme mode.
///
/// Re-evaluated at construction and whenever the config notifier fires.
#[must_use]
pub fn style_class(orientation: Orientation, mini: bool, mode: ThemeMode) -> String {
    let mut class = String::from(match orientation {
        Orientation::Vertical => "meter-bars-vertical",
        Orientation::Horizontal => "meter-bars-horizontal",
    });
    if mini {
        class.push_str("-mini");
    }
    class.push_str(" meter-bg-");
    class.push_str(mode.as_str());
    class
}
