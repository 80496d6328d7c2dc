// Simple color struct for the particle palette, created from an unsigned 32
// representing RRGGBB. Canvas 2d wants CSS color strings, so serialization
// lives here too.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The five particle colors from the WORLDSIM theme.
pub const PALETTE: [Color; 5] = [
    Color::from_u32(0x00d4ff),
    Color::from_u32(0x7c3aed),
    Color::from_u32(0xf59e0b),
    Color::from_u32(0x10b981),
    Color::from_u32(0xef4444),
];

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // Alpha is clamped to [0, 1] so the canvas never sees an invalid
    // rgba() string.
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        let alpha = alpha.max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_unpacks_channels() {
        let c = Color::from_u32(0x00d4ff);
        assert_eq!(c.r, 0x00);
        assert_eq!(c.g, 0xd4);
        assert_eq!(c.b, 0xff);
    }

    #[test]
    fn css_hex_matches_palette() {
        let css: Vec<String> = PALETTE.iter().map(|c| c.to_css()).collect();
        assert_eq!(
            css,
            vec!["#00d4ff", "#7c3aed", "#f59e0b", "#10b981", "#ef4444"]
        );
    }

    #[test]
    fn css_alpha_is_clamped() {
        let c = Color::from_u32(0xef4444);
        assert_eq!(c.to_css_with_alpha(0.25), "rgba(239, 68, 68, 0.25)");
        assert_eq!(c.to_css_with_alpha(-1.0), "rgba(239, 68, 68, 0)");
        assert_eq!(c.to_css_with_alpha(7.0), "rgba(239, 68, 68, 1)");
    }
}
