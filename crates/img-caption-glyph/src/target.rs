use embedded_graphics::{geometry::Point, geometry::Size, primitives::Rectangle};
use image::{Rgba, RgbaImage};

/// Destination a [`crate::GlyphContext`] draws onto.
pub trait GlyphTarget {
    /// Pixel dimensions; drawing is clipped to this rectangle from the origin.
    fn size(&self) -> Size;

    /// Composite `color` at `at` with glyph `coverage` in `0.0..=1.0`.
    fn blend(&mut self, at: Point, color: Rgba<u8>, coverage: f32);

    /// Whether glyph outlines should be rasterized at all.
    fn rasterizes(&self) -> bool {
        true
    }

    /// Clip rectangle covering the full target.
    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }
}

impl<T> GlyphTarget for &mut T
where
    T: GlyphTarget + ?Sized,
{
    fn size(&self) -> Size {
        (**self).size()
    }

    fn blend(&mut self, at: Point, color: Rgba<u8>, coverage: f32) {
        (**self).blend(at, color, coverage)
    }

    fn rasterizes(&self) -> bool {
        (**self).rasterizes()
    }
}

impl GlyphTarget for RgbaImage {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    fn blend(&mut self, at: Point, color: Rgba<u8>, coverage: f32) {
        let (Ok(x), Ok(y)) = (u32::try_from(at.x), u32::try_from(at.y)) else {
            return;
        };
        if let Some(dst) = self.get_pixel_mut_checked(x, y) {
            *dst = blend_over(*dst, color, coverage);
        }
    }
}

/// Shadow target: same bounds as a real canvas, no pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureTarget {
    size: Size,
}

impl MeasureTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// Shadow for `target`, sharing its bounds.
    pub fn matching<T>(target: &T) -> Self
    where
        T: GlyphTarget + ?Sized,
    {
        Self {
            size: target.size(),
        }
    }
}

impl GlyphTarget for MeasureTarget {
    fn size(&self) -> Size {
        self.size
    }

    fn blend(&mut self, _at: Point, _color: Rgba<u8>, _coverage: f32) {}

    fn rasterizes(&self) -> bool {
        false
    }
}

/// Source-over composite of `src`, scaled by `coverage`, onto `dst`.
///
/// Both colors are straight (non-premultiplied) alpha.
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let coverage = if coverage.is_finite() {
        coverage.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let src_a = f32::from(src[3]) / 255.0 * coverage;
    if src_a <= 0.0 {
        return dst;
    }
    let dst_a = f32::from(dst[3]) / 255.0;
    let keep = dst_a * (1.0 - src_a);
    let out_a = src_a + keep;
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let value = (f32::from(s) * src_a + f32::from(d) * keep) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
