//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - One fixed-size step per tick, no wall-clock input
//! - Seeded RNG only, and only during placement
//! - Stable iteration order (Vec order)
//! - No rendering or platform dependencies

pub mod atom;
pub mod collision;
pub mod placement;
pub mod state;
pub mod tick;

pub use atom::Atom;
pub use collision::resolve;
pub use placement::place_atoms;
pub use state::Simulation;
pub use tick::tick;
