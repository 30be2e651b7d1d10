//! Per-tick update/render cycle
//!
//! The engine owns a [`Simulation`] and an off-screen [`Frame`] and exposes
//! the single entry point the host's periodic trigger invokes. It performs
//! no timing of its own; every invocation is one fixed-size step.

use crate::error::Result;
use crate::platform::PresentTarget;
use crate::render::{self, Frame};
use crate::settings::Settings;
use crate::sim::{Simulation, tick};

/// Simulation plus presentation state, driven by the host timer.
pub struct Engine {
    sim: Simulation,
    frame: Frame,
}

impl Engine {
    /// Seed a simulation for the given viewport and allocate its frame.
    pub fn new(settings: &Settings, width: u32, height: u32, seed: u64) -> Result<Self> {
        let sim = Simulation::new(settings, width, height, seed)?;
        Ok(Self {
            sim,
            frame: Frame::new(width, height),
        })
    }

    /// Advance one tick: move and collide every atom, repaint the frame,
    /// hand it to the host.
    pub fn advance(&mut self, target: &mut dyn PresentTarget) {
        tick(&mut self.sim);
        render::draw(&self.sim, &mut self.frame);
        target.present(&self.frame);
    }

    /// Host-owned resize: reallocate the frame and update the wall bounds
    /// used from the next tick on.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.sim.set_bounds(width, height);
        self.frame = Frame::new(width, height);
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}
