use bytemuck::Zeroable;
use derive_more::Constructor;

mod transform;

pub use transform::Transform;

/// Width and height of an image or image region.
///
/// Pixel sizes are `Size<u32>`. Sprite code works with `Size<f32>` because
/// the transform pipeline is real-valued; use [`Size::truncated`] to get back
/// to whole pixels.
#[derive(Constructor, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> From<(T, T)> for Size<T> {
    fn from((w, h): (T, T)) -> Self {
        Self::new(w, h)
    }
}

impl From<Size<u32>> for Size<f32> {
    fn from(value: Size<u32>) -> Self {
        Self::new(value.w as f32, value.h as f32)
    }
}

impl Size<f32> {
    pub fn truncated(&self) -> Size<u32> {
        Size::new(self.w as u32, self.h as u32)
    }
}

/// An axis-aligned rectangle stored as origin + size.
///
/// Frame rectangles on a texture are `Rect<u32>` with (0; 0) at the
/// texture's top-left corner.
#[derive(Constructor, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T> From<(T, T, T, T)> for Rect<T> {
    fn from((x, y, w, h): (T, T, T, T)) -> Self {
        Self::new(x, y, w, h)
    }
}

impl<T: Copy> Rect<T> {
    #[inline]
    pub fn size(&self) -> Size<T> {
        Size::new(self.w, self.h)
    }
}

impl From<Rect<u32>> for Rect<f32> {
    fn from(value: Rect<u32>) -> Self {
        Self::new(
            value.x as f32,
            value.y as f32,
            value.w as f32,
            value.h as f32,
        )
    }
}

impl Rect<f32> {
    /// Corners in clockwise order starting from the top-left.
    #[inline]
    pub fn points(&self) -> [[f32; 2]; 4] {
        [
            [self.x, self.y],
            [self.x + self.w, self.y],
            [self.x + self.w, self.y + self.h],
            [self.x, self.y + self.h],
        ]
    }
}

/// A color with straight (non-premultiplied) channels.
///
/// Color modulation in draw params is `Rgba<f32>` where 1.0 is the identity
/// for every channel.
#[derive(Constructor, Clone, Copy, Default, Debug, PartialEq, Eq, Zeroable)]
pub struct Rgba<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
}

impl<T: Copy> Rgba<T> {
    pub fn all(value: T) -> Self {
        Self::new(value, value, value, value)
    }
}

impl<T> From<(T, T, T, T)> for Rgba<T> {
    fn from((r, g, b, a): (T, T, T, T)) -> Self {
        Self::new(r, g, b, a)
    }
}
