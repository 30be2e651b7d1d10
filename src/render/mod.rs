//! Software renderer
//!
//! Sprites are shaded once per atom (`sprite`), then composited into an
//! off-screen `Frame` every tick. The sim module stays render-free; this
//! module reads simulation state and never mutates it.

pub mod frame;
pub mod sprite;

pub use frame::Frame;
pub use sprite::{Rgb, SphereSprite};

use crate::consts::BACKGROUND;
use crate::sim::Simulation;

/// Repaint one frame: clear to background, then composite every atom's
/// sprite centered on its current position, in stable atom order.
pub fn draw(sim: &Simulation, frame: &mut Frame) {
    frame.clear(BACKGROUND);
    for atom in sim.atoms() {
        frame.blit(atom.sprite(), atom.pos);
    }
}
