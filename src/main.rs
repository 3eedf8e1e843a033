//! Universe2D demo entry point.
//!
//! A small scene-runtime demo using:
//! - **raylib** for windowing and drawing
//! - **universe2d** for the scene, objects, and per-frame integration
//!
//! The demo scatters drifting boxes that pin themselves against the scene
//! edges, gives some of them a sideways shove that wears off after a couple
//! of seconds, and adds one sine-wave oscillator. Press `P` to pause and
//! resume.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use raylib::prelude::*;

use universe2d::config::EngineConfig;
use universe2d::events::EventPayload;
use universe2d::math::Vector2;
use universe2d::object::{EVENT_HIT_EDGE, GameObject, Oscillator, RectObject};
use universe2d::scene::{Scene, SceneState};
use universe2d::surface::Color as FillColor;
use universe2d::surface::raylib::RaylibSurface;
use universe2d::tasks::ReadyQueue;

/// Universe2D scene runtime
#[derive(Parser)]
#[command(version, about = "Bouncing-box demo for the Universe2D scene runtime")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of drifting boxes to spawn.
    #[arg(long, default_value_t = 12)]
    boxes: usize,
}

const BOX_SIZE: f64 = 24.0;
const PALETTE: [FillColor; 5] = [
    FillColor::RED,
    FillColor::GREEN,
    FillColor::BLUE,
    FillColor::GOLD,
    FillColor::WHITE,
];

fn spawn_boxes(scene: &mut Scene, count: usize) {
    let bounds = scene.bounds();
    for i in 0..count {
        let position = Vector2::new(
            fastrand::f64() * (bounds.x - BOX_SIZE),
            fastrand::f64() * (bounds.y - BOX_SIZE),
        );
        let mut object = RectObject::new(
            position,
            Vector2::new(BOX_SIZE, BOX_SIZE),
            PALETTE[i % PALETTE.len()],
        );
        object.body_mut().set_velocity(Vector2::new(
            fastrand::f64() * 6.0 - 3.0,
            fastrand::f64() * 6.0 - 3.0,
        ));
        object.body_mut().set_can_escape_bounds(false);
        object
            .body_mut()
            .events_mut()
            .on(EVENT_HIT_EDGE, |payload| {
                if let EventPayload::EdgeHit(axis) = payload {
                    log::debug!("box pinned against the {axis} edge");
                }
            })
            .expect("hit_edge is registered on every body");

        // Give every third box a sideways shove that wears off.
        if i % 3 == 0 {
            object
                .body_mut()
                .apply_force(Vector2::new(12.0, 0.0), Some(2500.0))
                .expect("duration is positive");
        }

        scene.add(Box::new(object));
    }
    log::info!("spawned {count} boxes");
}

fn spawn_oscillator(scene: &mut Scene) {
    let bounds = scene.bounds();
    let oscillator = Oscillator::new(
        Vector2::new(bounds.x * 0.5, bounds.y * 0.5),
        Vector2::new(bounds.x * 0.25, bounds.y * 0.1),
        2400.0,
        Vector2::new(18.0, 18.0),
        FillColor::WHITE,
    )
    .expect("period is positive");
    scene.add(Box::new(oscillator));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => EngineConfig::with_path(path),
        None => EngineConfig::new(),
    };
    if let Err(err) = config.load_from_file() {
        log::warn!("Running with default settings: {err}");
    }

    let mut scene = Scene::new(config.bounds());
    scene.set_background(config.background);
    scene
        .set_target_frame_rate(config.target_fps)
        .expect("config target_fps must be a positive number");

    // Everything that needs the render surface waits here until the window
    // exists.
    let mut ready: ReadyQueue<Scene> = ReadyQueue::new();
    ready.queue(&mut scene, |scene| {
        scene.attach().expect("the scene is attached exactly once");
    });
    let boxes = cli.boxes;
    ready.queue(&mut scene, move |scene| spawn_boxes(scene, boxes));
    ready.queue(&mut scene, spawn_oscillator);

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title(&config.window_title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps as u32);

    // The surface exists now; run the deferred setup.
    ready.execute(&mut scene);

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_P) {
            if scene.state() == SceneState::Paused {
                scene.resume();
                log::info!("resumed");
            } else {
                scene.pause();
                log::info!("paused");
            }
        }

        let mut d = rl.begin_drawing(&thread);
        if scene.state() == SceneState::Paused {
            d.clear_background(Color::DARKGRAY);
            d.draw_text("paused - press P to resume", 20, 20, 20, Color::RAYWHITE);
        } else {
            let mut surface = RaylibSurface::new(&mut d);
            if let Err(err) = scene.tick(&mut surface) {
                log::error!("frame aborted: {err}");
            }
        }
    }
}
