use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// The engine itself is pure computation; these variants cover the two ways
/// host-supplied initialization parameters can be unsatisfiable.
#[derive(Debug, Error)]
pub enum Error {
    /// The rejection-sampling budget ran out before every atom was placed.
    #[error("placement infeasible: placed {placed} of {requested} atoms in {attempts} attempts")]
    PlacementInfeasible {
        requested: u32,
        placed: u32,
        attempts: u32,
    },

    /// Viewport too small to hold the placement margin.
    #[error("invalid bounds: {width}x{height} cannot fit the placement margin")]
    InvalidBounds { width: u32, height: u32 },
}
