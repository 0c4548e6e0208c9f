use ramme_graphics_hal::{
    draw_params::Blend, texture::SubTexture, uniforms::Uniforms, Graphics, Rgba,
};
use smart_default::SmartDefault;

/// Where and how a frame lands on the target.
///
/// `origin_x`/`origin_y` are fractions of the frame size (0..1 per axis)
/// selecting the anchor point: the anchor is the pivot for scaling and
/// rotation, and the point that ends up at `(x, y)`.
#[derive(SmartDefault, Clone, Debug)]
pub struct DrawOptions {
    pub x: f32,
    pub y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    #[default = 1.0]
    pub scale_x: f32,
    #[default = 1.0]
    pub scale_y: f32,
    /// Rotation around the anchor, in radians.
    pub rotate: f32,
    /// Per-channel color modulation. Ignored by shader draws.
    #[default(Rgba::all(1.0))]
    pub color: Rgba<f32>,
    #[default(Blend::alpha())]
    pub blend: Blend,
}

impl DrawOptions {
    /// Top-left anchored placement at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    /// Center-anchored placement at `(x, y)`.
    pub fn centered(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            origin_x: 0.5,
            origin_y: 0.5,
            ..Default::default()
        }
    }
}

/// Shader program, uniforms and auxiliary images for
/// [`Sprite::draw_with_shader`](crate::Sprite::draw_with_shader).
///
/// There are exactly three auxiliary slots; the sprite's own frame always
/// takes slot 0, the auxiliary images follow at slots 1-3.
pub struct ShaderOptions<'a, G: Graphics> {
    pub shader: &'a G::Shader,
    pub uniforms: Uniforms,
    pub images: [Option<&'a SubTexture<G>>; 3],
}

impl<'a, G: Graphics> ShaderOptions<'a, G> {
    pub fn new(shader: &'a G::Shader) -> Self {
        Self {
            shader,
            uniforms: Uniforms::default(),
            images: [None, None, None],
        }
    }
}
