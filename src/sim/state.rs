//! Simulation context
//!
//! An explicit state object owning the atom collection, viewport bounds,
//! and the run seed. Fixed seed means reproducible placement, so the whole
//! run is replayable.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::Result;
use crate::settings::Settings;
use crate::sim::{Atom, placement};

/// Complete simulation state.
///
/// Atoms keep their `Vec` order for the lifetime of the simulation; the
/// tick loop relies on that stable iteration order.
#[derive(Debug, Clone)]
pub struct Simulation {
    seed: u64,
    pub(crate) bounds: Vec2,
    pub(crate) atoms: Vec<Atom>,
    pub(crate) ticks: u64,
}

impl Simulation {
    /// Seed a new simulation: place `settings.atom_count` atoms inside
    /// `width x height` using a `Pcg32` derived from `seed`.
    pub fn new(settings: &Settings, width: u32, height: u32, seed: u64) -> Result<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let atoms = placement::place_atoms(
            &mut rng,
            settings.atom_count,
            width,
            height,
            settings.scale,
        )?;
        log::info!(
            "simulation ready: {} atoms in {width}x{height}, seed {seed}",
            atoms.len()
        );
        Ok(Self {
            seed,
            bounds: Vec2::new(width as f32, height as f32),
            atoms,
            ticks: 0,
        })
    }

    /// Build a simulation from a caller-supplied layout, bypassing random
    /// placement. Intended for hosts (and tests) that position atoms
    /// themselves.
    pub fn with_atoms(atoms: Vec<Atom>, width: u32, height: u32) -> Self {
        Self {
            seed: 0,
            bounds: Vec2::new(width as f32, height as f32),
            atoms,
            ticks: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Viewport bounds as `(width, height)`.
    pub fn bounds(&self) -> (f32, f32) {
        (self.bounds.x, self.bounds.y)
    }

    /// Host-owned resize. Wall checks use the new bounds from the next tick;
    /// atoms outside the shrunk viewport bounce back in on their own.
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.bounds = Vec2::new(width as f32, height as f32);
    }

    /// Ticks advanced since initialization.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
