pub mod colors;
pub mod style;

pub use colors::{parse_palette, Color};
pub use style::{style_class, CellStyle, CornerRadii, ThemeMode};
