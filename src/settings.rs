//! Engine settings supplied by the host
//!
//! The host owns persistence (registry, file, whatever it has); the engine
//! only defines the shape and the defaults. JSON helpers are provided so a
//! host can round-trip settings through an opaque string store.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ATOM_COUNT;

/// Host-facing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of atoms to place at startup
    pub atom_count: u32,
    /// Size/velocity scale factor (1.0 = full screen, see [`Settings::preview`])
    pub scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            atom_count: DEFAULT_ATOM_COUNT,
            scale: 1.0,
        }
    }
}

impl Settings {
    /// Settings for an embedded miniature preview window: same atom count,
    /// atoms shrunk to a tenth of their full-screen size and speed.
    pub fn preview() -> Self {
        Self {
            scale: 0.1,
            ..Self::default()
        }
    }

    /// Serialize for the host's opaque string store.
    pub fn to_json(&self) -> String {
        // Settings has no map keys or non-string exotica; serialization
        // cannot fail, so fall back to defaults-as-json rather than panic.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Parse settings previously produced by [`Settings::to_json`].
    /// Returns `None` on malformed input so the host can fall back to defaults.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}
