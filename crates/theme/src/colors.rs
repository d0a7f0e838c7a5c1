/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Parse a CSS-style hex color string (`#RGB`, `#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };
        let nibble = |s: &str| -> Option<u8> {
            let n = u8::from_str_radix(s, 16).ok()?;
            Some(n << 4 | n)
        };

        match hex.len() {
            3 => Some(Self {
                r: nibble(&hex[0..1])? as f32 / 255.0,
                g: nibble(&hex[1..2])? as f32 / 255.0,
                b: nibble(&hex[2..3])? as f32 / 255.0,
                a: 1.0,
            }),
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in the surface adapter.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Parse an ordered list of hex color strings into a palette.
///
/// Invalid entries become transparent rather than being dropped, so
/// palette indices supplied by usage sources stay stable.
pub fn parse_palette<S: AsRef<str>>(names: &[S]) -> Vec<Color> {
    names
        .iter()
        .map(|s| Color::from_hex(s.as_ref()).unwrap_or(Color::TRANSPARENT))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rrggbb() {
        let c = Color::from_hex("#89b4fa").unwrap();
        assert!((c.r - 0x89 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn parse_rrggbbaa() {
        let c = Color::from_hex("#00000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parse_shorthand() {
        assert_eq!(Color::from_hex("#fff"), Color::from_hex("#ffffff"));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(Color::from_hex("not-a-color"), None);
        assert_eq!(Color::from_hex("#1234"), None);
    }

    #[test]
    fn palette_keeps_indices() {
        let palette = parse_palette(&["#ffffff", "bogus", "#000000"]);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[1], Color::TRANSPARENT);
    }
}
