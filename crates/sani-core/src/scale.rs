//! Design-relative sizing.
//!
//! Layouts are declared against a 375×812 reference screen and converted to
//! device pixels here. None of these functions clamp: zero and negative
//! inputs go through the same arithmetic.

pub const BASE_WIDTH: f32 = 375.0;
pub const BASE_HEIGHT: f32 = 812.0;
pub const DEFAULT_MODERATE_FACTOR: f32 = 0.5;

/// Device viewport, sampled once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::base()
    }
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The reference screen the design was drawn for.
    pub const fn base() -> Self {
        Self::new(BASE_WIDTH, BASE_HEIGHT)
    }

    /// `p` percent of the viewport width.
    pub fn width_percent(&self, p: f32) -> f32 {
        self.width * p / 100.0
    }

    /// `p` percent of the viewport height.
    pub fn height_percent(&self, p: f32) -> f32 {
        self.height * p / 100.0
    }

    pub fn scale_by_width(&self, size: f32) -> f32 {
        size * (self.width / BASE_WIDTH)
    }

    pub fn scale_by_height(&self, size: f32) -> f32 {
        size * (self.height / BASE_HEIGHT)
    }

    /// Width scaling damped by `factor`: 0 keeps `size`, 1 is
    /// [`scale_by_width`](Self::scale_by_width).
    pub fn moderate_scale(&self, size: f32, factor: f32) -> f32 {
        size + (self.scale_by_width(size) - size) * factor
    }

    /// [`moderate_scale`](Self::moderate_scale) with the default factor. Used
    /// for fonts, icons and corner radii.
    pub fn moderate(&self, size: f32) -> f32 {
        self.moderate_scale(size, DEFAULT_MODERATE_FACTOR)
    }
}
