use crate::{
    draw_params::{ImageDrawParams, RectShaderParams},
    texture::SubTexture,
    Graphics, Size,
};

/// A draw target.
///
/// Draws are synchronous composites into the target, issued from the render
/// thread once per frame tick; nothing here blocks or suspends.
pub trait FrameBuffer<G: Graphics> {
    /// Size of the target in pixels.
    fn size(&self) -> Size<u32>;

    /// Composites a sub-texture onto the target with the accumulated
    /// transform, color modulation and blending from `params`.
    fn draw_image(&mut self, image: &SubTexture<G>, params: ImageDrawParams);

    /// Draws a `size`-sized rectangle through `shader`, sampling the image
    /// slots bound in `params`. The rectangle passes through the same
    /// transform as a plain image draw.
    fn draw_rect_shader(&mut self, size: Size<u32>, shader: &G::Shader, params: RectShaderParams<G>);
}
