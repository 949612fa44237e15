//! Color value type shared by the palette tables and the document template.
//!
//! Palette colors are authored as 8-bit sRGB triplets plus a separate opacity.
//! The opacity never participates in color-space conversion; only the RGB part
//! is handed to the converter, addressed by its canonical hex key.

/// A palette color: an sRGB triplet and an opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// 8-bit sRGB components as authored in the palette.
    pub rgb: (u8, u8, u8),
    /// Opacity in `[0, 1]`, kept out of color-space conversion entirely.
    pub alpha: f64,
}

impl Color {
    /// Construct an opaque color from an 8-bit RGB triplet.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: (r, g, b),
            alpha: 1.0,
        }
    }

    /// Return the same color with the given opacity.
    #[must_use]
    pub const fn fade(self, alpha: f64) -> Self {
        Self {
            rgb: self.rgb,
            alpha,
        }
    }

    /// What: Canonical hex key identifying this color's RGB value.
    ///
    /// Output:
    /// - Six uppercase hex digits, no `#`, alpha excluded.
    ///
    /// Details:
    /// - Two colors that differ only in alpha share one hex key, so conversion
    ///   work happens once per distinct RGB value rather than once per usage.
    #[must_use]
    pub fn hex_key(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("{r:02X}{g:02X}{b:02X}")
    }
}
