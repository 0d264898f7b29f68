/// Viewport size in logical pixels.
///
/// Renderers upload this as the basis for converting logical px positions to
/// NDC in their vertex shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_is_invalid() {
        assert!(!Viewport::new(0.0, 480.0).is_valid());
        assert!(!Viewport::new(640.0, 0.0).is_valid());
    }

    #[test]
    fn regular_window_is_valid() {
        assert!(Viewport::new(640.0, 480.0).is_valid());
    }
}
