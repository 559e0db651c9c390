/// Linear RGBA color, components in `[0, 1]`.
///
/// Used for framebuffer clears; alpha is passed through untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`; non-finite channels become `0`.
    #[inline]
    pub fn clamped(self) -> Self {
        fn unit(v: f32) -> f32 {
            if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
        }

        Self::rgba(unit(self.r), unit(self.g), unit(self.b), unit(self.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_limits_channels() {
        let c = Color::rgba(-0.5, 0.25, 1.5, 2.0).clamped();
        assert_eq!(c, Color::rgba(0.0, 0.25, 1.0, 1.0));
    }

    #[test]
    fn clamped_zeroes_non_finite() {
        let c = Color::rgba(f32::NAN, f32::INFINITY, 0.5, 1.0);
        assert!(!c.is_finite());
        assert_eq!(c.clamped(), Color::rgba(0.0, 0.0, 0.5, 1.0));
    }
}
