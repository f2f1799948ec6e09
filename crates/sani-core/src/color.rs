#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. Malformed input yields opaque black.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let byte = |range: std::ops::Range<usize>, fallback: u8| {
            s.get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .unwrap_or(fallback)
        };
        match s.len() {
            3 => {
                // #abc == #aabbcc
                let nibble = |i: usize| byte(i..i + 1, 0) * 0x11;
                Color(nibble(0), nibble(1), nibble(2), 255)
            }
            6 => Color(byte(0..2, 0), byte(2..4, 0), byte(4..6, 0), 255),
            8 => Color(byte(0..2, 0), byte(2..4, 0), byte(4..6, 0), byte(6..8, 255)),
            _ => {
                log::warn!("invalid hex color {hex:?}");
                Color::BLACK
            }
        }
    }

    /// Channel-wise linear blend; `t` is not clamped.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        fn ch(a: u8, b: u8, t: f32) -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
        }
        Color(
            ch(self.0, other.0, t),
            ch(self.1, other.1, t),
            ch(self.2, other.2, t),
            ch(self.3, other.3, t),
        )
    }

    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }
}
