//! Pentagons entry point
//!
//! Native builds run a headless simulation on a manual clock and print the
//! final frame set as JSON. The browser build uses `pentagons::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pentagons::consts::MAX_RADIUS;
    use pentagons::{Clock, ManualClock, Population, Settings};

    env_logger::init();
    log::info!("Pentagons (native) starting...");

    // Usage: pentagons [settings.json] [ticks]
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let ticks: u32 = args.next().and_then(|t| t.parse().ok()).unwrap_or(3600);

    // 60 Hz display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    let clock = ManualClock::new(0.0);
    let mut population = Population::with_clock(settings, clock.clone());

    let mut out_of_bounds = 0usize;
    let mut max_radius_seen = 0.0f64;
    let mut frames = Vec::new();
    for _ in 0..ticks {
        frames = population.tick();
        for f in &frames {
            max_radius_seen = max_radius_seen.max(f.radius);
            if !(0.0..=1.0).contains(&f.x) || !(0.0..=1.0).contains(&f.y) {
                out_of_bounds += 1;
            }
        }
        clock.advance(FRAME_MS);
    }

    log::info!(
        "Ran {ticks} ticks ({:.1}s simulated), max radius {max_radius_seen:.3} (advisory {MAX_RADIUS}), {out_of_bounds} out-of-bounds frames",
        clock.now_ms() / 1000.0
    );
    log::info!("Replay with seed {}", population.seed());

    match serde_json::to_string_pretty(&frames) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize frames: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is pentagons::web::wasm_start, this is just to satisfy the compiler
}
