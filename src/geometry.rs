use na::{Matrix3, Vector2, Vector3};

use crate::material::Material;

pub type Fp = f32;
pub type Vec2f = Vector2<Fp>;
pub type Vec3f = Vector3<Fp>;
pub type Mat3f = Matrix3<Fp>;

pub static EPS: Fp = 0.0001;

/// Infinite plane through `position` with unit `normal`. The normal is stored
/// as supplied; unit length is checked by scene validation, never silently
/// re-normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pub position: Vec3f,
    pub normal: Vec3f,
    pub material: Material,
}

impl Plane {
    pub fn new(position: Vec3f, normal: Vec3f, material: Material) -> Plane {
        Plane {
            position,
            normal,
            material,
        }
    }

    pub fn has_unit_normal(&self) -> bool {
        (self.normal.norm() - 1.0).abs() < EPS
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub position: Vec3f,
    pub radius: Fp,
    pub material: Material,
}

impl Sphere {
    pub fn new(position: Vec3f, radius: Fp, material: Material) -> Sphere {
        Sphere {
            position,
            radius,
            material,
        }
    }
}
