//! Atoms Saver entry point
//!
//! Headless demo standing in for the screensaver host: it plays the role of
//! the host timer, invoking the engine once per nominal tick interval. Real
//! window and persistence plumbing stays host-side.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use atoms_saver::consts::TICK_INTERVAL_MS;
use atoms_saver::platform::NullTarget;
use atoms_saver::{Engine, Settings};

const DEMO_TICKS: u32 = 400;

fn main() {
    env_logger::init();

    let settings = Settings::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut engine = match Engine::new(&settings, 800, 600, seed) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("failed to start: {e}");
            std::process::exit(1);
        }
    };
    let mut target = NullTarget;

    log::info!(
        "atoms-saver running headless: {} atoms, seed {seed}",
        settings.atom_count
    );
    for n in 0..DEMO_TICKS {
        engine.advance(&mut target);
        if n % 40 == 0 {
            let total_speed: f32 = engine
                .simulation()
                .atoms()
                .iter()
                .map(|a| a.vel.length())
                .sum();
            log::info!("tick {n}: total speed {total_speed:.1}");
        }
        std::thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }
    log::info!("done after {DEMO_TICKS} ticks");
}
