//! Packed kernel-side mirror of the scene model. Field order, sizes, and
//! padding here are the wire format shared with the per-pixel kernel: every
//! 3-wide float vector occupies 16 bytes, flags are 0/1 `u32`s, and all
//! scalars are f32. Geometry travels in parallel buffers next to the scene
//! record, with counts written from the host vectors at pack time. Layout is
//! locked by the size tests at the bottom.

use bytemuck::{Pod, Zeroable};

use crate::camera::Camera;
use crate::geometry::{Plane, Sphere, Vec3f};
use crate::material::Material;
use crate::scene::Scene;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuCamera {
    pub position: [f32; 3],
    _pad0: u32,
    pub right: [f32; 3],
    _pad1: u32,
    pub up: [f32; 3],
    _pad2: u32,
    pub forward: [f32; 3],
    _pad3: u32,
    pub sensor: [f32; 2],
    pub focus: f32,
    _pad4: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuMaterial {
    pub color: [f32; 3],
    pub is_light: u32,
    pub glow: f32,
    pub is_mirror: u32,
    pub is_transparent: u32,
    _pad0: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuPlane {
    pub position: [f32; 3],
    _pad0: u32,
    pub normal: [f32; 3],
    _pad1: u32,
    pub material: GpuMaterial,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuSphere {
    pub position: [f32; 3],
    pub radius: f32,
    pub material: GpuMaterial,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuScene {
    pub camera: GpuCamera,
    pub background: [f32; 3],
    pub frame_index: u32,
    pub plane_count: u32,
    pub sphere_count: u32,
    _pad0: [u32; 2],
}

fn vec3(v: &Vec3f) -> [f32; 3] {
    [v.x, v.y, v.z]
}

fn flag(b: bool) -> u32 {
    b as u32
}

impl From<&Camera> for GpuCamera {
    fn from(camera: &Camera) -> GpuCamera {
        GpuCamera {
            position: vec3(&camera.position),
            right: vec3(&camera.right()),
            up: vec3(&camera.up()),
            forward: vec3(&camera.forward()),
            sensor: [camera.sensor.x, camera.sensor.y],
            focus: camera.focus,
            _pad0: 0,
            _pad1: 0,
            _pad2: 0,
            _pad3: 0,
            _pad4: 0,
        }
    }
}

impl From<&Material> for GpuMaterial {
    fn from(material: &Material) -> GpuMaterial {
        GpuMaterial {
            color: vec3(&material.color),
            is_light: flag(material.is_light),
            glow: material.glow,
            is_mirror: flag(material.is_mirror),
            is_transparent: flag(material.is_transparent),
            _pad0: 0,
        }
    }
}

impl From<&Plane> for GpuPlane {
    fn from(plane: &Plane) -> GpuPlane {
        GpuPlane {
            position: vec3(&plane.position),
            normal: vec3(&plane.normal),
            material: GpuMaterial::from(&plane.material),
            _pad0: 0,
            _pad1: 0,
        }
    }
}

impl From<&Sphere> for GpuSphere {
    fn from(sphere: &Sphere) -> GpuSphere {
        GpuSphere {
            position: vec3(&sphere.position),
            radius: sphere.radius,
            material: GpuMaterial::from(&sphere.material),
        }
    }
}

/// One frame's kernel input: the scene record plus its parallel geometry
/// buffers, ready for upload as raw bytes.
#[derive(Clone, Debug)]
pub struct FramePacket {
    pub scene: GpuScene,
    pub planes: Vec<GpuPlane>,
    pub spheres: Vec<GpuSphere>,
}

impl FramePacket {
    pub fn scene_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.scene)
    }

    pub fn plane_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.planes)
    }

    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }
}

pub fn pack(scene: &Scene) -> FramePacket {
    FramePacket {
        scene: GpuScene {
            camera: GpuCamera::from(&scene.camera),
            background: vec3(&scene.background),
            frame_index: scene.frame_index(),
            plane_count: scene.plane_count() as u32,
            sphere_count: scene.sphere_count() as u32,
            _pad0: [0; 2],
        },
        planes: scene.planes.iter().map(GpuPlane::from).collect(),
        spheres: scene.spheres.iter().map(GpuSphere::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2f;
    use std::mem::size_of;

    #[test]
    fn struct_sizes_match_the_kernel_contract() {
        assert_eq!(size_of::<GpuCamera>(), 80);
        assert_eq!(size_of::<GpuMaterial>(), 32);
        assert_eq!(size_of::<GpuPlane>(), 64);
        assert_eq!(size_of::<GpuSphere>(), 48);
        assert_eq!(size_of::<GpuScene>(), 112);
    }

    #[test]
    fn packed_counts_match_host_buffers() {
        let mut scene = Scene::new(
            Camera::axis_aligned(Vec3f::new(0.0, 0.0, 5.0), 60.0, 60.0, 1.0),
            Vec3f::new(0.5, 0.5, 0.5),
            vec![Plane::new(
                Vec3f::new(0.0, -1.0, 0.0),
                Vec3f::y(),
                Material::default(),
            )],
            vec![
                Sphere::new(Vec3f::zeros(), 1.0, Material::mirror(Vec3f::zeros())),
                Sphere::new(Vec3f::x(), 0.5, Material::default()),
            ],
        );
        scene.advance();
        let packet = pack(&scene);
        assert_eq!(packet.scene.plane_count as usize, scene.planes.len());
        assert_eq!(packet.scene.sphere_count as usize, scene.spheres.len());
        assert_eq!(packet.scene.frame_index, 1);
        assert_eq!(packet.planes.len(), scene.planes.len());
        assert_eq!(packet.spheres.len(), scene.spheres.len());
        assert_eq!(
            packet.sphere_bytes().len(),
            scene.spheres.len() * size_of::<GpuSphere>()
        );
    }

    #[test]
    fn flags_pack_to_zero_or_one() {
        let mirror = GpuMaterial::from(&Material::mirror(Vec3f::new(0.9, 0.9, 0.9)));
        assert_eq!(mirror.is_mirror, 1);
        assert_eq!(mirror.is_transparent, 0);
        assert_eq!(mirror.is_light, 0);

        let lamp = GpuMaterial::from(&Material::light(Vec3f::new(1.0, 1.0, 0.8), 5.0));
        assert_eq!(lamp.is_light, 1);
        assert_eq!(lamp.glow, 5.0);
    }

    #[test]
    fn camera_basis_lands_in_the_padded_columns() {
        let camera = Camera::look_at(
            Vec3f::new(0.0, 0.0, 5.0),
            Vec3f::zeros(),
            Vec3f::y(),
            Vec2f::new(60.0, 60.0),
            1.0,
        );
        let packed = GpuCamera::from(&camera);
        assert_eq!(packed.position, [0.0, 0.0, 5.0]);
        assert_eq!(packed.forward, [0.0, 0.0, -1.0]);
        assert_eq!(packed.sensor, [60.0, 60.0]);
        assert_eq!(packed.focus, 1.0);
    }
}
