//! Surface sizing and image-fit geometry for the ripple quad.

use crate::constants::MIN_DEVICE_PIXEL_RATIO;
use glam::Vec2;

/// Clip-space corners of the full-surface quad, in triangle-fan order:
/// top-left, bottom-left, bottom-right, top-right.
pub const QUAD_VERTICES: [[f32; 2]; 4] = [[-1.0, 1.0], [-1.0, -1.0], [1.0, -1.0], [1.0, 1.0]];

/// Device pixel ratio used for backing stores; never below the site minimum.
#[inline]
pub fn effective_dpr(reported: f64) -> f64 {
    let reported = if reported.is_finite() && reported > 0.0 {
        reported
    } else {
        1.0
    };
    reported.max(MIN_DEVICE_PIXEL_RATIO)
}

/// Backing-store size of a drawing surface in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Buffer size for a surface displayed at `css_width` x `css_height`.
    /// `dpr` is the already-clamped ratio from [`effective_dpr`].
    pub fn from_css(css_width: f64, css_height: f64, dpr: f64) -> Self {
        let scale = |v: f64| (v.max(0.0) * dpr) as u32;
        Self {
            width: scale(css_width),
            height: scale(css_height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Texture-space window selected by an aspect-preserving "cover" fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    pub offset: Vec2,
    pub scale: Vec2,
}

impl CoverFit {
    pub const FULL: CoverFit = CoverFit {
        offset: Vec2::ZERO,
        scale: Vec2::ONE,
    };

    /// Fit an image of `image_aspect` (w/h) onto a surface of
    /// `surface_aspect`. The longer axis of the image is cropped evenly on
    /// both sides; the shorter axis spans the full texture.
    pub fn compute(image_aspect: f32, surface_aspect: f32) -> Self {
        if !(image_aspect > 0.0 && surface_aspect > 0.0)
            || !image_aspect.is_finite()
            || !surface_aspect.is_finite()
        {
            return Self::FULL;
        }
        if surface_aspect > image_aspect {
            let sy = image_aspect / surface_aspect;
            Self {
                offset: Vec2::new(0.0, (1.0 - sy) / 2.0),
                scale: Vec2::new(1.0, sy),
            }
        } else {
            let sx = surface_aspect / image_aspect;
            Self {
                offset: Vec2::new((1.0 - sx) / 2.0, 0.0),
                scale: Vec2::new(sx, 1.0),
            }
        }
    }

    /// Texture coordinates matching [`QUAD_VERTICES`] corner for corner.
    /// Texture row 0 is the image top, so the top-left vertex samples
    /// `offset` directly.
    pub fn tex_coords(&self) -> [[f32; 2]; 4] {
        let Vec2 { x: ox, y: oy } = self.offset;
        let Vec2 { x: sx, y: sy } = self.scale;
        [[ox, oy], [ox, oy + sy], [ox + sx, oy + sy], [ox + sx, oy]]
    }
}

/// Map a client-space pointer position into device pixels relative to the
/// surface whose top-left corner sits at `origin` (client space).
#[inline]
pub fn pointer_to_surface(client: Vec2, origin: Vec2, dpr: f64) -> Vec2 {
    (client - origin) * dpr as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_aspect_uses_whole_texture() {
        let fit = CoverFit::compute(1.5, 1.5);
        assert_eq!(fit, CoverFit::FULL);
    }

    #[test]
    fn degenerate_aspects_fall_back_to_full() {
        assert_eq!(CoverFit::compute(0.0, 1.0), CoverFit::FULL);
        assert_eq!(CoverFit::compute(1.0, f32::NAN), CoverFit::FULL);
    }
}
