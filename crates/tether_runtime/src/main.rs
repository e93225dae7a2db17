//! Tether Engine Runtime
//!
//! Boots logging and services, then drives the object registry through a
//! short frame loop of spawning, destroying and compacting before shutting
//! everything down with the two-phase sweep.

mod scene;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tether_core::{ObjectRegistry, VERSION};
use tether_metrics::FrameTimer;
use tether_services::RuntimeSettings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Tether Engine v{}", VERSION);

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tether.json"));
    let settings = tether_services::init_services(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;

    scene::register_classes().context("registering scene classes")?;
    let mut registry = ObjectRegistry::with_static_classes(settings.registry.clone());

    run_frames(&mut registry, &settings.runtime)?;

    registry.delete_all(true);
    for (name, value) in registry.counters().snapshot() {
        tracing::info!(counter = name, value, "registry counter");
    }
    Ok(())
}

fn run_frames(registry: &mut ObjectRegistry, runtime: &RuntimeSettings) -> Result<()> {
    let mut timer = FrameTimer::new(60);

    for frame in 0..runtime.frames {
        timer.begin();

        for i in 0..runtime.spawns_per_frame {
            scene::spawn_actor(registry, (i % 3 + 1) as usize)?;
        }
        if frame % 2 == 1 {
            registry.new_object(&scene::CAMERA_CLASS)?;
        }

        // Retire every other actor spawned so far.
        let actors = registry.handles_of_class(&scene::ACTOR_CLASS);
        for actor in actors.into_iter().step_by(2) {
            registry.delete_object(actor);
        }

        let cadence = runtime.compact_every_frames;
        if cadence > 0 && (frame + 1) % cadence == 0 {
            registry.compact_null_slots();
        }

        timer.end();
        tracing::debug!(
            frame,
            live = registry.live_count(),
            slots = registry.len(),
            "frame complete"
        );
    }

    let (min_ms, max_ms) = timer.frame_time_range_ms();
    tracing::info!(
        frames = timer.frames(),
        avg_ms = timer.frame_time_ms(),
        min_ms,
        max_ms,
        live = registry.live_count(),
        "frame loop finished"
    );
    Ok(())
}
