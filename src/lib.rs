//! Host-side scene description for a GPU ray caster/tracer. The host rebuilds
//! a [`scene::Scene`] once per frame and hands a packed snapshot ([`gpu`]) to
//! the per-pixel kernel; the kernel never owns or mutates scene state.

extern crate nalgebra as na;

pub mod camera;
pub mod geometry;
pub mod gpu;
pub mod legacy;
pub mod material;
pub mod scene;
