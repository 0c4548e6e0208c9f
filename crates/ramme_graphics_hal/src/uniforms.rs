use std::collections::HashMap;

use derive_more::{Deref, DerefMut};

/// A single shader uniform value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat3([[f32; 3]; 3]),
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(value: [f32; 2]) -> Self {
        Self::Vec2(value)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(value: [f32; 3]) -> Self {
        Self::Vec3(value)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(value: [f32; 4]) -> Self {
        Self::Vec4(value)
    }
}

/// Shader uniforms addressed by name.
///
/// The backend resolves names to locations; this layer only carries the
/// mapping.
#[derive(Default, Clone, Debug, PartialEq, Deref, DerefMut)]
pub struct Uniforms(HashMap<String, UniformValue>);

impl Uniforms {
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<UniformValue>) -> &mut Self {
        self.insert(name.into(), value.into());
        self
    }
}

impl<N: Into<String>, V: Into<UniformValue>> FromIterator<(N, V)> for Uniforms {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}
