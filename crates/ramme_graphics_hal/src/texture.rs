use std::rc::Rc;

use crate::{Graphics, Rect, Size};

pub trait Texture<G: Graphics> {
    /// Size of the whole texture in pixels.
    fn size(&self) -> Size<u32>;
}

/// A read-only window onto a region of a shared texture.
///
/// Cloning is cheap: the backing texture is reference counted and pixel data
/// is never copied. The region is not validated against the texture bounds;
/// a region outside the texture is the backend's concern.
pub struct SubTexture<G: Graphics> {
    texture: Rc<G::Texture>,
    rect: Rect<u32>,
}

impl<G: Graphics> Clone for SubTexture<G> {
    fn clone(&self) -> Self {
        Self {
            texture: self.texture.clone(),
            rect: self.rect,
        }
    }
}

impl<G: Graphics> SubTexture<G> {
    pub fn new(texture: Rc<G::Texture>, rect: Rect<u32>) -> Self {
        Self { texture, rect }
    }

    /// A view covering the whole texture.
    pub fn full(texture: Rc<G::Texture>) -> Self {
        let size = texture.size();
        Self::new(texture, Rect::new(0, 0, size.w, size.h))
    }

    pub fn texture(&self) -> &Rc<G::Texture> {
        &self.texture
    }

    pub fn rect(&self) -> Rect<u32> {
        self.rect
    }

    pub fn size(&self) -> Size<u32> {
        self.rect.size()
    }

    /// The region in normalized texture space, with (0; 0) the texture's
    /// top-left corner and (1; 1) its bottom-right corner.
    pub fn texture_space(&self) -> Rect<f32> {
        let texture = self.texture.size();
        Rect::new(
            self.rect.x as f32 / texture.w as f32,
            self.rect.y as f32 / texture.h as f32,
            self.rect.w as f32 / texture.w as f32,
            self.rect.h as f32 / texture.h as f32,
        )
    }
}
