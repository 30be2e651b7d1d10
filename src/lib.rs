//! Atoms Saver - a bouncing-atoms screensaver engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (atom physics, collisions, placement)
//! - `render`: Software sprite renderer and off-screen frame buffer
//! - `engine`: Per-tick update/render cycle driven by the host timer
//! - `platform`: Host presentation abstraction
//! - `settings`: Host-facing configuration

pub mod engine;
pub mod error;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use engine::Engine;
pub use error::{Error, Result};
pub use settings::Settings;

/// Engine configuration constants
pub mod consts {
    use crate::render::Rgb;

    /// Nominal host tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 25;

    /// Atom count used when the host supplies no configuration
    pub const DEFAULT_ATOM_COUNT: u32 = 10;
    /// Collision radius of an unscaled atom, in pixels
    pub const BASE_ATOM_RADIUS: f32 = 25.0;
    /// Cosine-power falloff exponent for the sphere highlight
    pub const ATOM_SHININESS: f32 = 1.75;
    /// Sprite base color
    pub const ATOM_COLOR: Rgb = Rgb::new(255, 0, 0);

    /// Margin kept between candidate centers and the viewport edges
    pub const PLACEMENT_MARGIN: u32 = 25;
    /// Half-width of the integer velocity component draw: each component is
    /// `scale * n` with `n` uniform in `[-MAX_START_SPEED, MAX_START_SPEED)`
    pub const MAX_START_SPEED: i32 = 10;
    /// Total candidate budget before placement gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Linear oversampling factor for sprite anti-aliasing
    pub const SPRITE_OVERSAMPLE: u32 = 3;

    /// Frame and sprite background (packed 0x00RRGGBB)
    pub const BACKGROUND: u32 = 0x0000_0000;
}
