//! Ballpit headless runner
//!
//! Runs the simulation without a renderer and logs what happens.
//!
//! Usage: `ballpit [BODY_COUNT] [CONFIG_JSON]`
//! (set `RUST_LOG=info` or `RUST_LOG=debug` to see output)

use std::process::ExitCode;

use ballpit::SimConfig;
use ballpit::sim::{World, kinetic_energy};

const FRAME_MS: f64 = 1000.0 / 60.0;
const FRAMES: u32 = 60 * 20;
const SEED: u64 = 0x5eed;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ballpit (headless) starting...");

    let mut args = std::env::args().skip(1);
    let body_count: usize = match args.next().map(|arg| arg.parse()) {
        None => 24,
        Some(Ok(count)) => count,
        Some(Err(e)) => {
            log::error!("Body count must be a number: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = match args.next() {
        None => SimConfig::default(),
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
    };

    let mut world = World::new(config, SEED);
    log::info!("World initialized with seed: {}", world.seed());

    let mut total_collisions = 0;
    let mut time = 0.0;
    for frame in 0..FRAMES {
        // One body every ~8 frames until the requested count is reached
        if frame % 8 == 0 && world.bodies().len() < body_count {
            world.add_body();
        }

        if let Some(report) = world.frame(time) {
            total_collisions += report.collisions;
        }
        time += FRAME_MS;

        if frame % 60 == 0 {
            log::info!(
                "t={:>5.1}s bodies={} collisions={} energy={:.6}",
                time / 1000.0,
                world.bodies().len(),
                total_collisions,
                kinetic_energy(world.bodies())
            );
        }
    }

    println!(
        "Simulated {} ticks with {} bodies, {} collisions resolved",
        world.ticks(),
        world.bodies().len(),
        total_collisions
    );
    ExitCode::SUCCESS
}

fn load_config(path: &str) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(SimConfig::from_json(&json)?)
}
