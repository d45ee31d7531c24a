use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use thiserror::Error;

use crate::camera::Camera;
use crate::geometry::{Fp, Plane, Sphere, Vec3f};

/// First invariant violation found by [`Scene::validate`]. Indices refer to
/// the plane/sphere buffers in submission order.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("camera orientation is not an orthonormal right-handed rotation")]
    CameraNotRotation,
    #[error("camera focal distance must be positive, got {0}")]
    NonPositiveFocus(Fp),
    #[error("camera sensor dimensions must be positive, got {0}x{1}")]
    DegenerateSensor(Fp, Fp),
    #[error("plane {0} normal is not unit length")]
    NonUnitPlaneNormal(usize),
    #[error("plane {0} material sets conflicting flags")]
    AmbiguousPlaneMaterial(usize),
    #[error("sphere {0} radius must be positive, got {1}")]
    NonPositiveSphereRadius(usize, Fp),
    #[error("sphere {0} material sets conflicting flags")]
    AmbiguousSphereMaterial(usize),
}

/// One frame's worth of scene state. Rebuilt or advanced by the host once per
/// frame, then packed read-only for the kernel via [`crate::gpu::pack`].
/// Geometry counts are always derived from the buffers; the packed form is the
/// only place a stored count exists, written at pack time.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub background: Vec3f,
    frame_index: u32,
    pub planes: Vec<Plane>,
    pub spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new(camera: Camera, background: Vec3f, planes: Vec<Plane>, spheres: Vec<Sphere>) -> Scene {
        Scene {
            camera,
            background,
            frame_index: 0,
            planes,
            spheres,
        }
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Steps to the next frame. Only the frame counter moves; camera and
    /// geometry changes are separate host edits.
    pub fn advance(&mut self) {
        self.frame_index += 1;
    }

    /// Deterministic sampling stream for the current frame, so temporal
    /// noise/jitter varies across frames but replays identically for the same
    /// frame index.
    pub fn frame_rng(&self) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(self.frame_index as u64)
    }

    /// Debug-path invariant check; the render path itself never recovers from
    /// malformed input, it just draws garbage.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.camera.is_rotation() {
            return Err(SceneError::CameraNotRotation);
        }
        if !(self.camera.focus > 0.0) {
            return Err(SceneError::NonPositiveFocus(self.camera.focus));
        }
        if !(self.camera.sensor.x > 0.0 && self.camera.sensor.y > 0.0) {
            return Err(SceneError::DegenerateSensor(
                self.camera.sensor.x,
                self.camera.sensor.y,
            ));
        }
        for (i, plane) in self.planes.iter().enumerate() {
            if !plane.has_unit_normal() {
                return Err(SceneError::NonUnitPlaneNormal(i));
            }
            if plane.material.kind().is_none() {
                return Err(SceneError::AmbiguousPlaneMaterial(i));
            }
        }
        for (i, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) {
                return Err(SceneError::NonPositiveSphereRadius(i, sphere.radius));
            }
            if sphere.material.kind().is_none() {
                return Err(SceneError::AmbiguousSphereMaterial(i));
            }
        }
        Ok(())
    }
}

/// Two-slot flip-flop for hosts that compose frame N+1 while the kernel still
/// reads frame N. `front` is the kernel's slot, `back_mut` the host's; `flip`
/// swaps roles once the kernel is done. Strictly serialized single-buffer use
/// does not need this.
#[derive(Clone, Debug)]
pub struct DoubleBuffer<T> {
    slots: [T; 2],
    front: usize,
}

impl<T: Clone> DoubleBuffer<T> {
    pub fn new(initial: T) -> DoubleBuffer<T> {
        DoubleBuffer {
            slots: [initial.clone(), initial],
            front: 0,
        }
    }
}

impl<T> DoubleBuffer<T> {
    pub fn front(&self) -> &T {
        &self.slots[self.front]
    }

    pub fn back_mut(&mut self) -> &mut T {
        &mut self.slots[1 - self.front]
    }

    pub fn flip(&mut self) {
        self.front = 1 - self.front;
    }
}
