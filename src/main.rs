//! Headless walkthrough of the gallery controls.
//!
//! Builds a wall of items, replays a scripted sequence of pans, wheel
//! zooms and clicks, and logs where the camera ends up.
//!
//! Usage: `gallery-walkthrough [options.toml]`

use std::path::Path;

use gallery_controls::camera::geometry::Plane;
use gallery_controls::camera::{Camera, GalleryControls};
use gallery_controls::error::ControlsError;
use gallery_controls::input::{InputEvent, InputSurface, MouseButton};
use gallery_controls::options::ControlOptions;
use gallery_controls::session::{GallerySession, SettleStrategy, WallItem};
use gallery_controls::util::frame_timing::FrameClock;
use glam::{Vec2, Vec3};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Fixed-size offscreen surface.
struct Viewport;

impl InputSurface for Viewport {
    fn client_size(&self) -> Vec2 {
        VIEWPORT
    }

    fn focus(&mut self) {
        log::debug!("viewport focused");
    }

    fn blur(&mut self) {
        log::debug!("viewport blurred");
    }
}

fn load_options() -> Result<ControlOptions, ControlsError> {
    let mut options = match std::env::args().nth(1) {
        Some(path) => ControlOptions::load(Path::new(&path))?,
        None => ControlOptions::default().with_distance_range(0.5, 5.0),
    };
    if options.target.is_none() {
        options.target = Some(Plane::new(Vec3::Z, 0.0));
    }
    Ok(options)
}

fn log_camera(label: &str, session: &GallerySession<Viewport>) {
    let controls = session.controls();
    let area = controls.target_area_visible();
    log::info!(
        "{label}: position {:.3}, zoom alpha {:.3}, visible {:.2} x {:.2} around {:.2}",
        controls.camera().position,
        controls.zoom_alpha(),
        area.size().x,
        area.size().y,
        area.center(),
    );
}

fn run_frames(session: &mut GallerySession<Viewport>, count: usize) {
    for _ in 0..count {
        session.frame();
    }
}

fn run() -> Result<(), ControlsError> {
    let options = load_options()?;
    let camera = Camera::perspective(
        75.0,
        VIEWPORT.x / VIEWPORT.y,
        Vec3::new(0.0, 0.0, 10.0),
    );
    let controls = GalleryControls::new(camera, Viewport, options)?;
    let mut session = GallerySession::with_settle(
        controls,
        SettleStrategy::UntilConverged {
            epsilon: 1e-3,
            max_iterations: 240,
        },
    );
    let items = WallItem::grid(6, 4, Vec2::new(1.2, 1.0), Vec2::new(1.0, 0.75));
    log::info!("hung {} items on the wall", items.len());
    log_camera("start", &session);

    let center = VIEWPORT * 0.5;
    let _ = session.handle_input(InputEvent::PointerEnter);

    // Drag the wall a quarter screen to the left.
    let _ = session.handle_input(InputEvent::PointerDown {
        button: MouseButton::Left,
        position: center,
    });
    for step in 1..=8 {
        let _ = session.handle_input(InputEvent::PointerMove {
            position: center - Vec2::new(40.0 * step as f32, 0.0),
        });
    }
    let _ = session.handle_input(InputEvent::PointerUp {
        button: MouseButton::Left,
        position: center - Vec2::new(320.0, 0.0),
    });
    run_frames(&mut session, 60);
    log_camera("after pan", &session);

    for _ in 0..5 {
        let _ = session.handle_input(InputEvent::Wheel {
            delta: 1.0,
            position: center,
        });
    }
    run_frames(&mut session, 60);
    log_camera("after wheel", &session);

    let mut clock = FrameClock::new();
    for item in items.iter().filter(|item| item.id % 7 == 3) {
        session.clear_focus();
        let _ = session.open_item(item.id, item);
        if let Some(area) = session.blur_area() {
            log::info!(
                "item {} at {:.2}: blur area {:.2} .. {:.2}",
                item.id,
                item.center,
                area.min,
                area.max
            );
        }
        let elapsed = clock.tick();
        log::debug!("focus took {elapsed:?}");
    }
    log_camera("last focus", &session);

    session.controls_mut().reset()?;
    log_camera("after reset", &session);

    let mut controls = session.into_controls();
    controls.dispose();
    log::info!("done at {:.1} fps", clock.fps());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
