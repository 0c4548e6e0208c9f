use smart_default::SmartDefault;

use crate::{texture::SubTexture, uniforms::Uniforms, Graphics, Rgba, Transform};

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendingEquation {
    #[default]
    Add,
    Subtract,
    ReverseSubtract,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendingFactor {
    #[default]
    Zero,
    One,
    SourceColor,
    OneMinusSourceColor,
    DestinationColor,
    OneMinusDestinationColor,
    SourceAlpha,
    OneMinusSourceAlpha,
    DestinationAlpha,
    OneMinusDestinationAlpha,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlendingFunction {
    pub source: BlendingFactor,
    pub destination: BlendingFactor,
}

impl Default for BlendingFunction {
    fn default() -> Self {
        Self {
            source: BlendingFactor::One,
            destination: BlendingFactor::Zero,
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeparateBlending<T> {
    pub rgb: T,
    pub alpha: T,
}

impl<T: Copy> SeparateBlending<T> {
    pub const fn all(t: T) -> Self {
        Self { rgb: t, alpha: t }
    }
}

/// The composite mode applied when a draw lands on the target.
///
/// The default replaces destination pixels outright; sprites normally want
/// [`Blend::alpha`].
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blend {
    pub equation: SeparateBlending<BlendingEquation>,
    pub function: SeparateBlending<BlendingFunction>,
}

impl Blend {
    /// Source-over blending for straight-alpha images.
    pub fn alpha() -> Self {
        Self {
            function: SeparateBlending::all(BlendingFunction {
                source: BlendingFactor::SourceAlpha,
                destination: BlendingFactor::OneMinusSourceAlpha,
            }),
            ..Default::default()
        }
    }

    /// Additive blending, used for glows and light effects.
    pub fn additive() -> Self {
        Self {
            function: SeparateBlending::all(BlendingFunction {
                source: BlendingFactor::SourceAlpha,
                destination: BlendingFactor::One,
            }),
            ..Default::default()
        }
    }
}

/// Parameters for compositing a sub-texture onto a frame buffer.
#[derive(SmartDefault, Clone, Debug)]
pub struct ImageDrawParams {
    pub transform: Transform,
    /// Per-channel color modulation; 1.0 everywhere leaves pixels untouched.
    #[default(Rgba::all(1.0))]
    pub color: Rgba<f32>,
    #[default(Blend::alpha())]
    pub blend: Blend,
}

/// Parameters for a shader-driven rectangle draw.
///
/// There is no color modulation here: anything of the sort is the shader's
/// job, fed through `uniforms`.
pub struct RectShaderParams<'a, G: Graphics> {
    pub transform: Transform,
    pub blend: Blend,
    pub uniforms: &'a Uniforms,
    /// Texture slots visible to the shader. Slot 0 is the primary image,
    /// slots 1-3 are auxiliary.
    pub images: [Option<&'a SubTexture<G>>; 4],
}
