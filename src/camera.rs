use crate::geometry::{Fp, Mat3f, Vec2f, Vec3f, EPS};

/// Smallest sensor dimension a resize is allowed to produce. Window systems
/// report zero-sized drawables mid-resize; those get clamped, not propagated.
pub static MIN_SENSOR: Fp = 1.0;

/// Pinhole camera with an arbitrary-orientation view plane. The orientation
/// columns are the right/up/forward basis; `sensor` is the virtual image
/// plane size and `focus` its distance from the eye. This parametrization
/// superseded an earlier axis-aligned width/height one, which survives as
/// [`Camera::axis_aligned`].
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3f,
    pub orientation: Mat3f,
    pub sensor: Vec2f,
    pub focus: Fp,
}

impl Camera {
    pub fn new(position: Vec3f, orientation: Mat3f, sensor: Vec2f, focus: Fp) -> Camera {
        Camera {
            position,
            orientation,
            sensor,
            focus,
        }
    }

    /// Legacy parametrization: view plane perpendicular to +z, no rotation.
    pub fn axis_aligned(position: Vec3f, width: Fp, height: Fp, focus: Fp) -> Camera {
        Camera::new(position, Mat3f::identity(), Vec2f::new(width, height), focus)
    }

    /// Builds the orthonormal right/up/forward basis from a view direction,
    /// keeping the triple right-handed so the orientation stays a rotation.
    pub fn look_at(position: Vec3f, target: Vec3f, up: Vec3f, sensor: Vec2f, focus: Fp) -> Camera {
        let forward = (target - position).normalize();
        let right = up.cross(&forward).normalize();
        let true_up = forward.cross(&right);
        Camera::new(
            position,
            Mat3f::from_columns(&[right, true_up, forward]),
            sensor,
            focus,
        )
    }

    pub fn right(&self) -> Vec3f {
        self.orientation.column(0).into_owned()
    }

    pub fn up(&self) -> Vec3f {
        self.orientation.column(1).into_owned()
    }

    pub fn forward(&self) -> Vec3f {
        self.orientation.column(2).into_owned()
    }

    /// Resize path: the view delegate reports new drawable dimensions and the
    /// sensor follows them. Degenerate values coming out of a mid-resize
    /// miscalculation are clamped rather than handed to the kernel.
    pub fn set_sensor(&mut self, width: Fp, height: Fp) {
        self.sensor = Vec2f::new(clamp_dimension(width), clamp_dimension(height));
    }

    /// True when the orientation is orthonormal and right-handed within
    /// floating tolerance.
    pub fn is_rotation(&self) -> bool {
        let gram = self.orientation * self.orientation.transpose();
        (gram - Mat3f::identity()).abs().max() < EPS
            && (self.orientation.determinant() - 1.0).abs() < EPS
    }

    /// Origin and (unnormalized) direction of the primary ray through pixel
    /// center `(x, y)` of a `res_x` by `res_y` output surface.
    pub fn primary_ray(&self, x: Fp, y: Fp, res_x: Fp, res_y: Fp) -> (Vec3f, Vec3f) {
        let px = (2.0 * (x + 0.5) / res_x - 1.0) * self.sensor.x * 0.5;
        let py = -(2.0 * (y + 0.5) / res_y - 1.0) * self.sensor.y * 0.5;
        let direction = px * self.right() + py * self.up() + self.focus * self.forward();
        (self.position, direction)
    }
}

fn clamp_dimension(value: Fp) -> Fp {
    if value.is_finite() && value >= MIN_SENSOR {
        value
    } else {
        log::warn!("degenerate sensor dimension {value}, clamping to {MIN_SENSOR}");
        MIN_SENSOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_basis_is_a_rotation() {
        let camera = Camera::look_at(
            Vec3f::new(0.0, 0.0, 5.0),
            Vec3f::zeros(),
            Vec3f::y(),
            Vec2f::new(60.0, 60.0),
            1.0,
        );
        assert!(camera.is_rotation());
        assert!((camera.orientation.determinant() - 1.0).abs() < EPS);
        assert!((camera.forward() - Vec3f::new(0.0, 0.0, -1.0)).norm() < EPS);
    }

    #[test]
    fn axis_aligned_has_identity_orientation() {
        let camera = Camera::axis_aligned(Vec3f::zeros(), 30.0, 20.0, 1.0);
        assert_eq!(camera.orientation, Mat3f::identity());
        assert!(camera.is_rotation());
    }

    #[test]
    fn scaled_basis_is_not_a_rotation() {
        let mut camera = Camera::axis_aligned(Vec3f::zeros(), 30.0, 20.0, 1.0);
        camera.orientation *= 2.0;
        assert!(!camera.is_rotation());
    }

    #[test]
    fn reflection_is_not_a_rotation() {
        let mut camera = Camera::axis_aligned(Vec3f::zeros(), 30.0, 20.0, 1.0);
        camera.orientation[(0, 0)] = -1.0;
        assert!(!camera.is_rotation());
    }

    #[test]
    fn resize_clamps_degenerate_dimensions() {
        let mut camera = Camera::axis_aligned(Vec3f::zeros(), 30.0, 20.0, 1.0);
        camera.set_sensor(0.0, -4.0);
        assert_eq!(camera.sensor, Vec2f::new(MIN_SENSOR, MIN_SENSOR));

        camera.set_sensor(640.0, 480.0);
        assert_eq!(camera.sensor, Vec2f::new(640.0, 480.0));
    }

    #[test]
    fn center_ray_points_forward() {
        let camera = Camera::look_at(
            Vec3f::new(0.0, 0.0, 5.0),
            Vec3f::zeros(),
            Vec3f::y(),
            Vec2f::new(60.0, 60.0),
            1.0,
        );
        // odd resolution so a pixel center sits exactly on the axis
        let (origin, direction) = camera.primary_ray(30.0, 30.0, 61.0, 61.0);
        assert_eq!(origin, camera.position);
        assert!((direction.normalize() - camera.forward()).norm() < EPS);
    }
}
