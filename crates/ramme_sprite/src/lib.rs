//! Sprite slicing and transform-composed drawing over
//! [`ramme_graphics_hal`].
//!
//! A [`Sprite`] cuts a shared texture into an ordered list of frame
//! rectangles and draws a caller-selected frame onto any
//! [`FrameBuffer`](ramme_graphics_hal::frame_buffer::FrameBuffer), plain or
//! through a shader. [`SpriteSheet`] produces the frame rectangles for
//! uniform grids.

pub mod draw_options;
pub mod sprite;
pub mod sprite_sheet;

pub use draw_options::{DrawOptions, ShaderOptions};
pub use sprite::{FlipOrigin, Sprite};
pub use sprite_sheet::SpriteSheet;
