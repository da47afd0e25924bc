//! Color model: RGBA values used by draw calls and the native `Pixel` stored in a `Bitmap`

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

// ============================================================================
// Channel Arithmetic
// ============================================================================

/// Blend a single channel by an integer weight in 0..=255.
/// Uses fast approximation: (x + 1 + (x >> 8)) >> 8 instead of x / 255,
/// which is exact at weights 0 and 255.
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let result = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((result + 1 + (result >> 8)) >> 8) as u8
}

/// Interpolate a single channel by `t` in [0, 1], rounded to nearest
#[inline]
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Normalized product of two channels (255 * 255 -> 255)
#[inline]
fn mul_channel(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

// ============================================================================
// Color
// ============================================================================

/// 8-bit-per-channel RGBA color.
///
/// An alpha of 0 means fully transparent: compositing skips such colors
/// instead of drawing them as black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Linear interpolation toward `other`; `t` is clamped to [0, 1]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: lerp_channel(self.a, other.a, t),
        }
    }

    /// Apply `tint` as a modifier: multiply by it, then move from the
    /// original toward the product by the tint's own alpha.
    /// Opaque white is the identity.
    pub fn tint(self, tint: Color) -> Color {
        self.lerp(self * tint, tint.a as f32 / 255.0)
    }
}

impl Add for Color {
    type Output = Color;

    /// Saturating per-channel add
    fn add(self, rhs: Color) -> Color {
        Color {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
            a: self.a.saturating_add(rhs.a),
        }
    }
}

impl Mul for Color {
    type Output = Color;

    /// Per-channel product normalized to 0-255
    fn mul(self, rhs: Color) -> Color {
        Color {
            r: mul_channel(self.r, rhs.r),
            g: mul_channel(self.g, rhs.g),
            b: mul_channel(self.b, rhs.b),
            a: mul_channel(self.a, rhs.a),
        }
    }
}

// ============================================================================
// Pixel
// ============================================================================

/// A pixel as stored in a `Bitmap`.
///
/// Laid out B, G, R, padding so the buffer can be handed to the presenter
/// as little-endian XRGB8888 without conversion.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pad: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, pad: 0 }
    }

    /// Interpolate toward `other`; `t` is clamped to [0, 1]
    pub fn lerp(self, other: Pixel, t: f32) -> Pixel {
        let t = t.clamp(0.0, 1.0);
        Pixel::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t),
        )
    }

    /// "Over" compositing: blend `color` onto this pixel weighted by its alpha
    #[inline]
    pub fn blend(self, color: Color) -> Pixel {
        let alpha = color.a as u16;
        Pixel::new(
            blend_channel(color.r, self.r, alpha),
            blend_channel(color.g, self.g, alpha),
            blend_channel(color.b, self.b, alpha),
        )
    }
}

impl From<Color> for Pixel {
    /// Drops alpha; the native format has no alpha channel
    fn from(color: Color) -> Self {
        Pixel::new(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAL: Color = Color::rgba(20, 140, 130, 200);

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(Color::RED.lerp(Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 1.0), Color::BLUE);
        assert_eq!(TEAL.lerp(Color::WHITE, 0.0), TEAL);
        assert_eq!(TEAL.lerp(Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn test_lerp_clamps_t() {
        assert_eq!(Color::RED.lerp(Color::BLUE, -3.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 7.5), Color::BLUE);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color::RED.lerp(Color::BLUE, 0.5);
        assert_eq!(mid, Color::rgb(128, 0, 128));
    }

    #[test]
    fn test_white_is_multiplicative_identity() {
        assert_eq!(Color::RED * Color::WHITE, Color::RED);
        assert_eq!(TEAL * Color::WHITE, TEAL);
        assert_eq!(Color::RED.lerp(Color::RED * Color::WHITE, 1.0), Color::RED);
    }

    #[test]
    fn test_multiply_scales_channels() {
        let half = Color::rgb(128, 128, 128);
        let c = Color::rgb(200, 100, 0) * half;
        assert_eq!(c, Color::rgb(100, 50, 0));
    }

    #[test]
    fn test_tint() {
        assert_eq!(TEAL.tint(Color::WHITE), TEAL);
        // Fully transparent tint leaves the base alone
        assert_eq!(TEAL.tint(Color::TRANSPARENT), TEAL);
        // Opaque tint is a plain multiply
        assert_eq!(Color::WHITE.tint(Color::GREEN), Color::GREEN);
    }

    #[test]
    fn test_add_saturates() {
        let c = Color::rgba(200, 10, 0, 255) + Color::rgba(100, 10, 0, 1);
        assert_eq!(c, Color::rgba(255, 20, 0, 255));
    }

    #[test]
    fn test_pixel_from_color_drops_alpha() {
        let p = Pixel::from(Color::rgba(1, 2, 3, 4));
        assert_eq!(p, Pixel::new(1, 2, 3));
        assert_eq!((p.r, p.g, p.b), (1, 2, 3));
    }

    #[test]
    fn test_blend_opaque_and_transparent() {
        let dst = Pixel::new(10, 20, 30);
        assert_eq!(dst.blend(Color::RED), Pixel::from(Color::RED));
        assert_eq!(dst.blend(Color::RED.with_alpha(0)), dst);
    }

    #[test]
    fn test_blend_half_alpha() {
        let p = Pixel::new(0, 0, 0).blend(Color::rgba(255, 255, 255, 128));
        assert_eq!(p, Pixel::new(128, 128, 128));
    }

    #[test]
    fn test_pixel_lerp() {
        let a = Pixel::new(0, 0, 0);
        let b = Pixel::new(255, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
