//! Packed ARGB8888 colors.

pub const WHITE: u32 = 0xFFFFFFFF;
pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const GRID: u32 = 0xFF333333;
pub const WIREFRAME: u32 = WHITE;
pub const VERTEX: u32 = 0xFFFFFF00;
pub const FILL: u32 = 0xFFEEEEEE;

/// Packs 8-bit channels into an ARGB `u32`.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Scales every channel of `color` (alpha included) by `intensity`.
///
/// The intensity is clamped to [0, 1] first, so the result never
/// brightens the input.
#[inline]
pub fn modulate(color: u32, intensity: f32) -> u32 {
    let intensity = intensity.clamp(0.0, 1.0);
    let scale = |shift: u32| ((((color >> shift) & 0xFF) as f32) * intensity) as u32;

    (scale(24) << 24) | (scale(16) << 16) | (scale(8) << 8) | scale(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_intensity_keeps_color() {
        assert_eq!(modulate(0xFF804020, 1.0), 0xFF804020);
    }

    #[test]
    fn half_intensity_halves_every_channel() {
        assert_eq!(modulate(0xFF804020, 0.5), 0x7F402010);
    }

    #[test]
    fn intensity_is_clamped() {
        assert_eq!(modulate(0xFF804020, 3.0), 0xFF804020);
        assert_eq!(modulate(0xFF804020, -1.0), 0x00000000);
    }

    #[test]
    fn argb_packs_channels() {
        assert_eq!(argb(0xFF, 0x12, 0x34, 0x56), 0xFF123456);
    }
}
