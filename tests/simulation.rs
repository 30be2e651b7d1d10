//! End-to-end checks through the public API.

use atoms_saver::consts::{ATOM_COLOR, ATOM_SHININESS, BACKGROUND};
use atoms_saver::platform::{NullTarget, PresentTarget};
use atoms_saver::render::{self, Frame};
use atoms_saver::sim::{Atom, Simulation, tick};
use atoms_saver::{Engine, Settings};
use glam::Vec2;

/// Two atoms on a direct collision course: one tick advances both by their
/// pre-collision velocities, swaps the equal-and-opposite velocities, and
/// repaints the frame with both sprites.
#[test]
fn scripted_collision_tick_and_repaint() {
    let atoms = vec![
        Atom::new(
            Vec2::new(100.0, 200.0),
            Vec2::new(5.0, 0.0),
            25.0,
            ATOM_COLOR,
            ATOM_SHININESS,
        ),
        Atom::new(
            Vec2::new(155.0, 200.0),
            Vec2::new(-5.0, 0.0),
            25.0,
            ATOM_COLOR,
            ATOM_SHININESS,
        ),
    ];
    let mut sim = Simulation::with_atoms(atoms, 400, 400);
    let mut frame = Frame::new(400, 400);

    tick(&mut sim);
    render::draw(&sim, &mut frame);

    let a = &sim.atoms()[0];
    let b = &sim.atoms()[1];
    assert_eq!(a.pos, Vec2::new(105.0, 200.0));
    assert_eq!(b.pos, Vec2::new(150.0, 200.0));
    assert!((a.vel - Vec2::new(-5.0, 0.0)).length() < 1e-5);
    assert!((b.vel - Vec2::new(5.0, 0.0)).length() < 1e-5);

    // Sphere centers land on shaded pixels; far corners stay background.
    let px = |x: u32, y: u32| frame.pixels()[(y * 400 + x) as usize];
    assert_ne!(px(105, 200), BACKGROUND);
    assert_ne!(px(150, 200), BACKGROUND);
    assert_eq!(px(5, 5), BACKGROUND);
}

/// The exchange moves the normal component between equal masses and walls
/// negate components, so total kinetic energy stays put over a long run.
#[test]
fn kinetic_energy_is_conserved_over_a_long_run() {
    let mut sim = Simulation::new(&Settings::default(), 400, 400, 2024).unwrap();
    let energy =
        |sim: &Simulation| -> f32 { sim.atoms().iter().map(|a| a.vel.length_squared()).sum() };
    let e0 = energy(&sim);
    for _ in 0..500 {
        tick(&mut sim);
    }
    let e1 = energy(&sim);
    let rel = ((e1 - e0) / e0.max(1e-6)).abs();
    assert!(rel < 1e-3, "kinetic energy drifted: {e0} -> {e1}");
}

/// Atoms never stray past the walls by more than one tick's travel.
#[test]
fn atoms_stay_near_the_viewport() {
    let mut sim = Simulation::new(&Settings::default(), 400, 300, 7).unwrap();
    // Collisions redistribute speed between atoms, but total kinetic energy
    // caps any single atom's speed (and so its per-tick overshoot) well
    // below this margin.
    let margin = 50.0;
    for _ in 0..500 {
        tick(&mut sim);
        for a in sim.atoms() {
            assert!(a.pos.x > -margin && a.pos.x < 400.0 + margin);
            assert!(a.pos.y > -margin && a.pos.y < 300.0 + margin);
        }
    }
}

/// The host-facing loop: settings resolved (here, defaults), engine seeded,
/// one advance per trigger, frame presented each time.
#[test]
fn engine_runs_like_the_host_would_drive_it() {
    struct Counting(u32);
    impl PresentTarget for Counting {
        fn present(&mut self, frame: &Frame) {
            assert_eq!((frame.width(), frame.height()), (640, 480));
            self.0 += 1;
        }
    }

    let settings = Settings::from_json(&Settings::default().to_json()).unwrap();
    let mut engine = Engine::new(&settings, 640, 480, 1).unwrap();
    let mut target = Counting(0);
    for _ in 0..10 {
        engine.advance(&mut target);
    }
    assert_eq!(target.0, 10);
    assert_eq!(engine.simulation().ticks(), 10);

    // Preview-scale settings also run, with smaller atoms.
    let mut preview = Engine::new(&Settings::preview(), 640, 480, 1).unwrap();
    preview.advance(&mut NullTarget);
    assert!(preview.simulation().atoms()[0].radius() < 3.0);
}
