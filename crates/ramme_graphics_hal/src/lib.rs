pub use ramme_geometry::*;

pub mod draw_params;
pub mod frame_buffer;
pub mod texture;
pub mod uniforms;

use frame_buffer::FrameBuffer;
use texture::Texture;

/// The host rendering engine.
///
/// Sprite code never names a concrete engine; it is generic over this trait
/// and only ever sees the associated types. A backend crate implements
/// [`Graphics`] once, and everything layered on top works with it unchanged.
pub trait Graphics: Sized + Clone + 'static {
    /// A renderable image owned by the engine.
    type Texture: Texture<Self>;

    /// A compiled shader program handle. Opaque to this layer; uniform and
    /// image bindings are passed by name and slot with each draw call.
    type Shader;

    /// A draw target accepting composite and shader draws.
    type FrameBuffer: FrameBuffer<Self>;
}
