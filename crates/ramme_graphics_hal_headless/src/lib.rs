//! A windowless [`Graphics`] backend that records draw commands instead of
//! rasterizing them.
//!
//! Useful in unit tests and on CI, where there is no window or GPU: issue
//! draws as usual, then assert on [`HeadlessFrameBuffer::commands`].

use nalgebra::Matrix3;
use ramme_graphics_hal::{
    draw_params::{Blend, ImageDrawParams, RectShaderParams},
    frame_buffer::FrameBuffer,
    texture::{SubTexture, Texture},
    uniforms::Uniforms,
    Graphics, Rect, Rgba, Size,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Graphics for Headless {
    type Texture = HeadlessTexture;
    type Shader = HeadlessShader;
    type FrameBuffer = HeadlessFrameBuffer;
}

/// A texture that is nothing but a size.
#[derive(Clone, Copy, Debug)]
pub struct HeadlessTexture {
    size: Size<u32>,
}

impl HeadlessTexture {
    pub fn new(size: impl Into<Size<u32>>) -> Self {
        Self { size: size.into() }
    }
}

impl Texture<Headless> for HeadlessTexture {
    fn size(&self) -> Size<u32> {
        self.size
    }
}

/// An opaque stand-in for a compiled shader program.
#[derive(Clone, Debug, Default)]
pub struct HeadlessShader {
    pub label: String,
}

impl HeadlessShader {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// One recorded draw, in issue order.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    Image {
        texture_size: Size<u32>,
        region: Rect<u32>,
        transform: Matrix3<f32>,
        color: Rgba<f32>,
        blend: Blend,
    },
    RectShader {
        size: Size<u32>,
        shader: String,
        transform: Matrix3<f32>,
        blend: Blend,
        uniforms: Uniforms,
        /// Regions of the bound image slots; `None` for unbound slots.
        images: [Option<Rect<u32>>; 4],
    },
}

#[derive(Debug, Default)]
pub struct HeadlessFrameBuffer {
    size: Size<u32>,
    pub commands: Vec<DrawCommand>,
}

impl HeadlessFrameBuffer {
    pub fn new(size: impl Into<Size<u32>>) -> Self {
        Self {
            size: size.into(),
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl FrameBuffer<Headless> for HeadlessFrameBuffer {
    fn size(&self) -> Size<u32> {
        self.size
    }

    fn draw_image(&mut self, image: &SubTexture<Headless>, params: ImageDrawParams) {
        self.commands.push(DrawCommand::Image {
            texture_size: image.texture().size(),
            region: image.rect(),
            transform: *params.transform.matrix(),
            color: params.color,
            blend: params.blend,
        });
    }

    fn draw_rect_shader(
        &mut self,
        size: Size<u32>,
        shader: &HeadlessShader,
        params: RectShaderParams<Headless>,
    ) {
        self.commands.push(DrawCommand::RectShader {
            size,
            shader: shader.label.clone(),
            transform: *params.transform.matrix(),
            blend: params.blend,
            uniforms: params.uniforms.clone(),
            images: params.images.map(|slot| slot.map(|image| image.rect())),
        });
    }
}
