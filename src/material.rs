use crate::geometry::{Fp, Vec3f};

/// Surface description shared by planes and spheres. Exactly one of the three
/// flags may be set; `glow` only matters when `is_light` is set. Overlapping
/// flags are a modeling error surfaced by [`crate::scene::Scene::validate`],
/// not something the kernel defines behavior for.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Base color, RGB in [0, 1] per channel by convention.
    pub color: Vec3f,
    pub is_light: bool,
    pub glow: Fp,
    pub is_mirror: bool,
    pub is_transparent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Plain,
    Light,
    Mirror,
    Glass,
}

impl Material {
    pub fn plain(color: Vec3f) -> Material {
        Material {
            color,
            is_light: false,
            glow: 0.0,
            is_mirror: false,
            is_transparent: false,
        }
    }

    pub fn light(color: Vec3f, glow: Fp) -> Material {
        Material {
            glow,
            is_light: true,
            ..Material::plain(color)
        }
    }

    pub fn mirror(color: Vec3f) -> Material {
        Material {
            is_mirror: true,
            ..Material::plain(color)
        }
    }

    pub fn glass(color: Vec3f) -> Material {
        Material {
            is_transparent: true,
            ..Material::plain(color)
        }
    }

    /// `None` when the flags overlap or an emitter carries a negative glow.
    pub fn kind(&self) -> Option<Kind> {
        match (self.is_light, self.is_mirror, self.is_transparent) {
            (false, false, false) => Some(Kind::Plain),
            (true, false, false) => {
                if self.glow >= 0.0 {
                    Some(Kind::Light)
                } else {
                    None
                }
            }
            (false, true, false) => Some(Kind::Mirror),
            (false, false, true) => Some(Kind::Glass),
            _ => None,
        }
    }
}

impl Default for Material {
    /// Mid-gray plain surface, the fallback for legacy scenes that predate
    /// materials.
    fn default() -> Material {
        Material::plain(Vec3f::new(0.5, 0.5, 0.5))
    }
}
