use nalgebra::{Matrix3, Point2, Rotation2, Translation2, Vector2};

/// Affine transform accumulator for 2D draw calls.
///
/// Every operation post-composes onto what is already accumulated, so code
/// reads in application order:
///
/// ```
/// # use ramme_geometry::Transform;
/// let mut t = Transform::identity();
/// t.scale(2.0, 2.0);
/// t.translate(10.0, 0.0);
/// // A point is scaled first, then moved.
/// assert_eq!(t.apply([1.0, 0.0]), [12.0, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Transform(Matrix3<f32>);

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Drops everything accumulated so far.
    pub fn reset(&mut self) {
        self.0 = Matrix3::identity();
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.0 = Translation2::new(x, y).to_homogeneous() * self.0;
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.0 = Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)) * self.0;
    }

    /// Angle is in radians, measured towards positive Y.
    pub fn rotate(&mut self, radians: f32) {
        self.0 = Rotation2::new(radians).to_homogeneous() * self.0;
    }

    pub fn apply(&self, point: [f32; 2]) -> [f32; 2] {
        self.0
            .transform_point(&Point2::new(point[0], point[1]))
            .into()
    }

    pub fn matrix(&self) -> &Matrix3<f32> {
        &self.0
    }
}

impl From<Matrix3<f32>> for Transform {
    fn from(matrix: Matrix3<f32>) -> Self {
        Self(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_point(actual: [f32; 2], expected: [f32; 2]) {
        assert_approx_eq!(f32, actual[0], expected[0], epsilon = 1e-5);
        assert_approx_eq!(f32, actual[1], expected[1], epsilon = 1e-5);
    }

    #[test]
    fn identity_maps_points_to_themselves() {
        let t = Transform::identity();
        assert_point(t.apply([3.0, -7.5]), [3.0, -7.5]);
    }

    #[test]
    fn operations_compose_in_application_order() {
        let mut t = Transform::identity();
        t.translate(1.0, 0.0);
        t.scale(2.0, 2.0);
        // Translation happens before scaling, so it is scaled too.
        assert_point(t.apply([0.0, 0.0]), [2.0, 0.0]);

        let mut t = Transform::identity();
        t.scale(2.0, 2.0);
        t.translate(1.0, 0.0);
        assert_point(t.apply([0.0, 0.0]), [1.0, 0.0]);
    }

    #[test]
    fn rotation_is_counterclockwise_towards_positive_y() {
        let mut t = Transform::identity();
        t.rotate(FRAC_PI_2);
        assert_point(t.apply([1.0, 0.0]), [0.0, 1.0]);
    }

    #[test]
    fn reset_restores_identity() {
        let mut t = Transform::identity();
        t.scale(3.0, 3.0);
        t.rotate(1.0);
        t.reset();
        assert_point(t.apply([5.0, 6.0]), [5.0, 6.0]);
    }

    #[test]
    fn matches_reference_matrix() {
        let mut t = Transform::identity();
        t.rotate(0.3);
        t.translate(4.0, 5.0);

        let reference =
            Translation2::new(4.0, 5.0).to_homogeneous() * Rotation2::new(0.3).to_homogeneous();
        for (a, b) in t.matrix().iter().zip(reference.iter()) {
            assert_approx_eq!(f32, *a, *b, epsilon = 1e-6);
        }
    }
}
