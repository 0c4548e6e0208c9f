use std::rc::Rc;

use rand::Rng;

use ramme_graphics_hal::{
    draw_params::{ImageDrawParams, RectShaderParams},
    frame_buffer::FrameBuffer,
    texture::SubTexture,
    Graphics, Rect, Size, Transform,
};

use crate::draw_options::{DrawOptions, ShaderOptions};

/// What happens to the origin fraction while a flip is in effect.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum FlipOrigin {
    /// The anchor mirrors with the image: `origin` reads as `1 - origin` on
    /// the flipped axis, so a sprite anchored at its feet stays anchored at
    /// its feet.
    #[default]
    Reflect,
    /// The anchor stays put; only the image mirrors around it.
    Fixed,
}

/// An animation strip: an ordered list of equally sized frames cut out of
/// one shared texture.
///
/// The frame rectangles are sliced into [`SubTexture`] views once at
/// construction. Frame selection is stateless — every draw call takes the
/// frame index — because timing and frame advancement belong to whatever
/// drives the sprite, not to the sprite itself. The only mutable state is
/// the flip flags.
///
/// Index-taking methods expect `index < len()` and panic otherwise. An empty
/// frame list yields a zero-sized sprite for which any index-based call
/// panics.
pub struct Sprite<G: Graphics> {
    frames: Vec<Rect<u32>>,
    texture: Rc<G::Texture>,
    sub_views: Vec<SubTexture<G>>,
    size: Size<f32>,
    flipped_h: bool,
    flipped_v: bool,
    flip_origin: FlipOrigin,
}

impl<G: Graphics> Clone for Sprite<G> {
    fn clone(&self) -> Self {
        Self {
            frames: self.frames.clone(),
            texture: self.texture.clone(),
            sub_views: self.sub_views.clone(),
            size: self.size,
            flipped_h: self.flipped_h,
            flipped_v: self.flipped_v,
            flip_origin: self.flip_origin,
        }
    }
}

impl<G: Graphics> Sprite<G> {
    /// Slices `texture` into one sub-view per frame rectangle.
    ///
    /// The frame size is taken from the first rectangle; the rest are
    /// assumed equal and not validated. Rectangles outside the texture
    /// bounds are the backend's concern.
    pub fn new(texture: Rc<G::Texture>, frames: Vec<Rect<u32>>) -> Self {
        let sub_views = frames
            .iter()
            .map(|frame| SubTexture::new(texture.clone(), *frame))
            .collect();
        let size = frames
            .first()
            .map(|frame| frame.size().into())
            .unwrap_or_default();

        Self {
            frames,
            texture,
            sub_views,
            size,
            flipped_h: false,
            flipped_v: false,
            flip_origin: FlipOrigin::default(),
        }
    }

    /// Frame size. All frames share it.
    pub fn size(&self) -> Size<f32> {
        self.size
    }

    /// Frame size in whole pixels.
    pub fn size_px(&self) -> Size<u32> {
        self.size.truncated()
    }

    pub fn width(&self) -> f32 {
        self.size.w
    }

    /// Shortcut for [`width`](Self::width).
    pub fn w(&self) -> f32 {
        self.width()
    }

    pub fn height(&self) -> f32 {
        self.size.h
    }

    /// Shortcut for [`height`](Self::height).
    pub fn h(&self) -> f32 {
        self.height()
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Rect<u32>] {
        &self.frames
    }

    /// The shared backing texture.
    pub fn texture(&self) -> &Rc<G::Texture> {
        &self.texture
    }

    /// The precomputed view for one frame.
    pub fn sub_view(&self, index: usize) -> &SubTexture<G> {
        &self.sub_views[index]
    }

    /// A uniformly random frame index.
    ///
    /// # Panics
    ///
    /// Panics if the sprite has no frames.
    pub fn random_index(&self) -> usize {
        rand::thread_rng().gen_range(0..self.frames.len())
    }

    /// Wraps `index` into `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if the sprite has no frames.
    pub fn loop_index(&self, index: usize) -> usize {
        if index >= self.frames.len() {
            index % self.frames.len()
        } else {
            index
        }
    }

    /// Whether `index` is the last frame (or past it).
    pub fn is_end(&self, index: usize) -> bool {
        index + 1 >= self.frames.len()
    }

    /// Toggles horizontal mirroring for subsequent draws.
    pub fn flip_h(&mut self) {
        self.flipped_h = !self.flipped_h;
    }

    /// Toggles vertical mirroring for subsequent draws.
    pub fn flip_v(&mut self) {
        self.flipped_v = !self.flipped_v;
    }

    pub fn set_flip_h(&mut self, flipped: bool) {
        self.flipped_h = flipped;
    }

    pub fn set_flip_v(&mut self, flipped: bool) {
        self.flipped_v = flipped;
    }

    pub fn flipped_h(&self) -> bool {
        self.flipped_h
    }

    pub fn flipped_v(&self) -> bool {
        self.flipped_v
    }

    pub fn flip_origin(&self) -> FlipOrigin {
        self.flip_origin
    }

    pub fn set_flip_origin(&mut self, flip_origin: FlipOrigin) {
        self.flip_origin = flip_origin;
    }

    /// Builds the frame transform for `opts`, in this order: flip negations,
    /// scale about the anchor, rotation about the anchor, placement. The
    /// order is a contract — swapping scale and rotation changes the picture
    /// whenever both are non-default.
    fn transform(&self, opts: &DrawOptions) -> Transform {
        let Size { w, h } = self.size;
        let (mut sx, mut sy) = (opts.scale_x, opts.scale_y);
        let (mut ox, mut oy) = (opts.origin_x, opts.origin_y);

        if self.flipped_h {
            sx = -sx;
            if self.flip_origin == FlipOrigin::Reflect {
                ox = 1.0 - ox;
            }
        }
        if self.flipped_v {
            sy = -sy;
            if self.flip_origin == FlipOrigin::Reflect {
                oy = 1.0 - oy;
            }
        }

        let mut transform = Transform::identity();
        if sx != 1.0 || sy != 1.0 {
            transform.translate(-w * ox, -h * oy);
            transform.scale(sx, sy);
            transform.translate(w * ox, h * oy);
        }
        if opts.rotate != 0.0 {
            transform.translate(-w * ox, -h * oy);
            transform.rotate(opts.rotate);
            transform.translate(w * ox, h * oy);
        }
        transform.translate(opts.x - w * ox, opts.y - h * oy);

        transform
    }

    /// Composites frame `index` onto `target`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn draw(&self, target: &mut G::FrameBuffer, index: usize, opts: &DrawOptions) {
        target.draw_image(
            &self.sub_views[index],
            ImageDrawParams {
                transform: self.transform(opts),
                color: opts.color,
                blend: opts.blend,
            },
        );
    }

    /// Draws frame `index` through a shader.
    ///
    /// The geometry goes through the same transform pipeline as [`draw`]
    /// (color modulation does not apply; uniforms are passed through
    /// instead). The frame's sub-view takes image slot 0, the three
    /// auxiliary images from `shader_opts` take slots 1-3.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// [`draw`]: Self::draw
    pub fn draw_with_shader(
        &self,
        target: &mut G::FrameBuffer,
        index: usize,
        opts: &DrawOptions,
        shader_opts: &ShaderOptions<G>,
    ) {
        let [aux0, aux1, aux2] = shader_opts.images;
        target.draw_rect_shader(
            self.size.truncated(),
            shader_opts.shader,
            RectShaderParams {
                transform: self.transform(opts),
                blend: opts.blend,
                uniforms: &shader_opts.uniforms,
                images: [Some(&self.sub_views[index]), aux0, aux1, aux2],
            },
        );
    }
}
