//! Asteroid Field entry point
//!
//! Headless demo: runs one round with a spinning, always-firing ship and
//! prints a JSON summary when it ends.
//!
//! Usage: `asteroid-field [asteroid_count] [seed]`

#[cfg(not(target_arch = "wasm32"))]
use asteroid_field::{
    Settings,
    consts::TICK_MS,
    platform::Runner,
    sim::{GameEvent, RoundPhase, TickInput},
};

/// Stop a round that neither side can finish (about ten minutes of play)
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_TICKS: u64 = 20_000;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, serde::Serialize)]
struct Summary {
    seed: u64,
    asteroids: u32,
    phase: RoundPhase,
    score: u64,
    ticks: u64,
    shots: u32,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let asteroids: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);

    log::info!("Asteroid Field (headless) starting with seed {}", seed);

    let mut runner = match Runner::new(Settings::default(), seed, asteroids, 800.0, 600.0) {
        Ok(runner) => runner,
        Err(e) => {
            log::error!("Could not start round: {}", e);
            std::process::exit(2);
        }
    };

    let autopilot = TickInput {
        rotate_right: true,
        fire: true,
        ..Default::default()
    };

    let mut shots = 0;
    while runner.simulation().is_running() && runner.simulation().time_ticks < MAX_DEMO_TICKS {
        runner.frame(TICK_MS as f32, &autopilot);
        for event in runner.drain_events() {
            match event {
                GameEvent::BulletFired { .. } => shots += 1,
                GameEvent::ScoreChanged(score) => log::debug!("Score: {}", score),
                GameEvent::RoundEnded(reason) => log::info!("Round ended: {:?}", reason),
                _ => {}
            }
        }
    }

    let sim = runner.simulation();
    let summary = Summary {
        seed: sim.seed(),
        asteroids,
        phase: sim.phase,
        score: sim.score,
        ticks: sim.time_ticks,
        shots,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; hosts drive `platform::Runner` directly
}
