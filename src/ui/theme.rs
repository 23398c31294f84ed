use ratatui::style::Color;

use chirptui::ThemeMode;

/// Cover band and placeholder gradient endpoints
pub const GRADIENT_START: (u8, u8, u8) = (0x66, 0x7e, 0xea);
pub const GRADIENT_END: (u8, u8, u8) = (0x76, 0x4b, 0xa2);

/// Colors for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    /// Handles, timestamps, counters
    pub muted: Color,
    pub primary: Color,
    /// Dividers and unfocused borders
    pub outline: Color,
    /// Row behind the selected card
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub info: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: Color::Rgb(0xff, 0xff, 0xff),
                surface: Color::Rgb(0xf7, 0xf9, 0xf9),
                text: Color::Rgb(0x0f, 0x14, 0x19),
                muted: Color::Rgb(0x53, 0x64, 0x71),
                primary: Color::Rgb(0x1d, 0x9b, 0xf0),
                outline: Color::Rgb(0xcf, 0xd9, 0xde),
                highlight: Color::Rgb(0xe8, 0xf5, 0xfd),
                error: Color::Rgb(0xf4, 0x21, 0x2e),
                success: Color::Rgb(0x00, 0xba, 0x7c),
                info: Color::Rgb(0x1d, 0x9b, 0xf0),
            },
            ThemeMode::Dark => Self {
                background: Color::Rgb(0x00, 0x00, 0x00),
                surface: Color::Rgb(0x16, 0x18, 0x1c),
                text: Color::Rgb(0xe7, 0xe9, 0xea),
                muted: Color::Rgb(0x71, 0x76, 0x7b),
                primary: Color::Rgb(0x1d, 0x9b, 0xf0),
                outline: Color::Rgb(0x2f, 0x33, 0x36),
                highlight: Color::Rgb(0x08, 0x1c, 0x2b),
                error: Color::Rgb(0xf4, 0x21, 0x2e),
                success: Color::Rgb(0x00, 0xba, 0x7c),
                info: Color::Rgb(0x1d, 0x9b, 0xf0),
            },
        }
    }
}

/// Linear blend between two RGB colors, `t` in 0.0..=1.0
pub fn gradient_color(start: (u8, u8, u8), end: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(mix(start.0, end.0), mix(start.1, end.1), mix(start.2, end.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
        assert_eq!(light.primary, dark.primary);
    }

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient_color(GRADIENT_START, GRADIENT_END, 0.0), Color::Rgb(0x66, 0x7e, 0xea));
        assert_eq!(gradient_color(GRADIENT_START, GRADIENT_END, 1.0), Color::Rgb(0x76, 0x4b, 0xa2));
        // Out of range clamps
        assert_eq!(gradient_color(GRADIENT_START, GRADIENT_END, 7.0), Color::Rgb(0x76, 0x4b, 0xa2));
    }
}
