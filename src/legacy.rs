//! Adapters for the earliest scene schema: axis-aligned camera, exactly one
//! plane and one sphere with bare colors, a separate point light, and no
//! materials or frame counter. Upgrading maps those field sets onto the
//! canonical model with defaulted materials.

use crate::camera::Camera;
use crate::geometry::{Fp, Plane, Sphere, Vec3f};
use crate::material::Material;
use crate::scene::Scene;

/// Radius given to the emissive sphere that stands in for the old point
/// light, which had no extent of its own.
pub static LIGHT_RADIUS: Fp = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraV1 {
    pub position: Vec3f,
    pub width: Fp,
    pub height: Fp,
    pub focus: Fp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaneV1 {
    pub position: Vec3f,
    pub normal: Vec3f,
    pub color: Vec3f,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SphereV1 {
    pub position: Vec3f,
    pub color: Vec3f,
    pub radius: Fp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightV1 {
    pub position: Vec3f,
    pub color: Vec3f,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneV1 {
    pub camera: CameraV1,
    pub plane: PlaneV1,
    pub sphere: SphereV1,
    pub light: LightV1,
    pub background: Vec3f,
}

impl SceneV1 {
    /// Maps this snapshot into the canonical model: object colors become
    /// plain materials, the point light becomes a small emissive sphere with
    /// its brightest channel as glow, and the camera keeps its axis-aligned
    /// view plane under an identity orientation.
    pub fn upgrade(self) -> Scene {
        let lamp = Sphere::new(
            self.light.position,
            LIGHT_RADIUS,
            Material::light(self.light.color, self.light.color.max()),
        );
        Scene::new(
            Camera::axis_aligned(
                self.camera.position,
                self.camera.width,
                self.camera.height,
                self.camera.focus,
            ),
            self.background,
            vec![Plane::new(
                self.plane.position,
                self.plane.normal,
                Material::plain(self.plane.color),
            )],
            vec![
                Sphere::new(
                    self.sphere.position,
                    self.sphere.radius,
                    Material::plain(self.sphere.color),
                ),
                lamp,
            ],
        )
    }
}
