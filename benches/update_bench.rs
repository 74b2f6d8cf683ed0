//! Benchmarks of the per-frame controller path.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gallery_controls::camera::geometry::Plane;
use gallery_controls::camera::{Camera, GalleryControls};
use gallery_controls::input::{InputEvent, InputSurface};
use gallery_controls::options::ControlOptions;
use gallery_controls::session::WallItem;
use glam::{Vec2, Vec3};

struct BenchSurface;

impl InputSurface for BenchSurface {
    fn client_size(&self) -> Vec2 {
        Vec2::new(1280.0, 720.0)
    }
}

fn controls() -> GalleryControls<BenchSurface> {
    let options = ControlOptions::with_target(Plane::new(Vec3::Z, 0.0))
        .with_distance_range(0.5, 5.0);
    let camera = Camera::perspective(75.0, 16.0 / 9.0, Vec3::new(0.0, 0.0, 10.0));
    match GalleryControls::new(camera, BenchSurface, options) {
        Ok(controls) => controls,
        Err(e) => panic!("bench setup failed: {e}"),
    }
}

fn update_benchmark(c: &mut Criterion) {
    let mut controls = controls();
    controls.zoom_to(&Vec3::new(1.0, 1.0, 0.0));
    let _ = c.bench_function("update", |b| {
        b.iter(|| {
            controls.update();
            black_box(controls.camera().position)
        })
    });
}

fn zoom_to_benchmark(c: &mut Criterion) {
    let items = WallItem::grid(10, 10, Vec2::new(1.2, 1.0), Vec2::new(1.0, 0.8));
    let mut controls = controls();
    let mut next = 0;
    let _ = c.bench_function("zoom_to_and_settle", |b| {
        b.iter(|| {
            controls.zoom_to(&items[next % items.len()]);
            next += 1;
            black_box(controls.settle(black_box(200), 1e-3))
        })
    });
}

fn input_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_event");
    let mut controls = controls();

    let _ = group.bench_function("wheel", |b| {
        let mut delta = 1.0;
        b.iter(|| {
            delta = -delta;
            black_box(controls.handle_event(InputEvent::Wheel {
                delta,
                position: Vec2::new(640.0, 360.0),
            }))
        })
    });
    let _ = group.bench_function("key_pan", |b| {
        b.iter(|| {
            black_box(controls.handle_event(InputEvent::KeyDown {
                key: "ArrowLeft".to_owned(),
            }))
        })
    });
    let _ = group.bench_function("visible_area", |b| {
        b.iter(|| black_box(controls.target_area_visible()))
    });
    group.finish();
}

criterion_group!(benches, update_benchmark, zoom_to_benchmark, input_benchmark);
criterion_main!(benches);
