use std::fs;
use std::io::Write;

use raytracing_scene::camera::Camera;
use raytracing_scene::geometry::{Plane, Sphere, Vec2f, Vec3f};
use raytracing_scene::gpu;
use raytracing_scene::material::Material;
use raytracing_scene::scene::Scene;

// Drives the per-frame lifecycle without a kernel attached: build the demo
// scene, validate it, then advance N frames, packing each one. With an output
// path the packed frames are appended to it for inspection.
fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let frames: u32 = args
        .get(1)
        .map(|arg| arg.parse().expect("frame count must be an integer"))
        .unwrap_or(10);

    let mut scene = Scene::new(
        Camera::look_at(
            Vec3f::new(0.0, 0.0, 5.0),
            Vec3f::zeros(),
            Vec3f::y(),
            Vec2f::new(60.0, 60.0),
            1.0,
        ),
        Vec3f::new(0.5, 0.5, 0.5),
        vec![Plane::new(
            Vec3f::new(0.0, -1.0, 0.0),
            Vec3f::y(),
            Material::plain(Vec3f::new(0.8, 0.2, 0.2)),
        )],
        vec![Sphere::new(
            Vec3f::zeros(),
            1.0,
            Material::mirror(Vec3f::new(0.9, 0.9, 0.9)),
        )],
    );
    scene.validate().expect("demo scene is malformed");

    let mut out_file = args.get(2).map(|path| {
        fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .expect("Failed opening file")
    });

    for _ in 0..frames {
        let packet = gpu::pack(&scene);
        log::info!(
            "frame {}: {} planes, {} spheres, {} scene bytes",
            scene.frame_index(),
            packet.scene.plane_count,
            packet.scene.sphere_count,
            packet.scene_bytes().len()
        );
        if let Some(file) = out_file.as_mut() {
            file.write_all(packet.scene_bytes()).unwrap();
            file.write_all(packet.plane_bytes()).unwrap();
            file.write_all(packet.sphere_bytes()).unwrap();
        }
        scene.advance();
    }
    log::info!("stopped at frame {}", scene.frame_index());
}
