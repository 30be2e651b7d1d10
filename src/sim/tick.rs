//! Discrete simulation tick
//!
//! One tick advances every atom by one unit of its velocity and resolves
//! the resulting wall and atom contacts. No internal timing: the host's
//! periodic trigger decides when a tick happens, and a tick is always one
//! fixed-size step.

use crate::sim::collision;
use crate::sim::state::Simulation;

/// Advance the simulation by one tick.
///
/// For each atom in stable order: move it (with wall ricochet), then test it
/// as the closing party against every other atom. Ordered pairs are visited
/// deliberately; both `(a, b)` and `(b, a)` may apply an impulse within one
/// tick, matching the reference dynamics.
pub fn tick(sim: &mut Simulation) {
    let (width, height) = sim.bounds();
    let n = sim.atoms.len();
    let mut contacts = 0u32;
    for i in 0..n {
        sim.atoms[i].advance(width, height);
        for j in 0..n {
            if i == j {
                continue;
            }
            let (a, b) = collision::pair_mut(&mut sim.atoms, i, j);
            if collision::resolve(a, b) {
                contacts += 1;
            }
        }
    }
    sim.ticks += 1;
    if contacts > 0 {
        log::trace!("tick {}: {} contacts resolved", sim.ticks, contacts);
    }
}
