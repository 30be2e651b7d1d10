//! Initial atom placement
//!
//! Rejection-samples non-overlapping centers inside the viewport margin and
//! assigns randomized start velocities. All randomness comes from the
//! simulation's seeded RNG, so a fixed seed reproduces the exact layout.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{
    ATOM_COLOR, ATOM_SHININESS, BASE_ATOM_RADIUS, MAX_PLACEMENT_ATTEMPTS, MAX_START_SPEED,
    PLACEMENT_MARGIN,
};
use crate::error::{Error, Result};
use crate::sim::Atom;

/// Place `count` atoms inside `width x height`.
///
/// Candidate centers are integer positions uniform in
/// `[margin, width - margin) x [margin, height - margin)`; a candidate is
/// accepted only if it is at least two radii away from every atom already
/// placed. Start velocity components are integer draws in
/// `[-MAX_START_SPEED, MAX_START_SPEED)`, scaled by `scale`.
///
/// The sampling loop carries a total attempt budget; a configuration that
/// cannot fit returns [`Error::PlacementInfeasible`] instead of spinning.
pub fn place_atoms(
    rng: &mut Pcg32,
    count: u32,
    width: u32,
    height: u32,
    scale: f32,
) -> Result<Vec<Atom>> {
    if width <= 2 * PLACEMENT_MARGIN || height <= 2 * PLACEMENT_MARGIN {
        return Err(Error::InvalidBounds { width, height });
    }

    let radius = scale * BASE_ATOM_RADIUS;
    let mut atoms: Vec<Atom> = Vec::with_capacity(count as usize);
    let mut attempts = 0u32;

    while (atoms.len() as u32) < count {
        if attempts >= MAX_PLACEMENT_ATTEMPTS {
            return Err(Error::PlacementInfeasible {
                requested: count,
                placed: atoms.len() as u32,
                attempts,
            });
        }
        attempts += 1;

        let x = rng.random_range(PLACEMENT_MARGIN..width - PLACEMENT_MARGIN) as f32;
        let y = rng.random_range(PLACEMENT_MARGIN..height - PLACEMENT_MARGIN) as f32;
        let candidate = Vec2::new(x, y);

        if atoms
            .iter()
            .any(|a| a.pos.distance(candidate) < 2.0 * a.radius())
        {
            continue;
        }

        let vel = Vec2::new(
            scale * rng.random_range(-MAX_START_SPEED..MAX_START_SPEED) as f32,
            scale * rng.random_range(-MAX_START_SPEED..MAX_START_SPEED) as f32,
        );
        atoms.push(Atom::new(candidate, vel, radius, ATOM_COLOR, ATOM_SHININESS));
    }

    log::debug!(
        "placed {} atoms in {} attempts ({}x{}, radius {})",
        count,
        attempts,
        width,
        height,
        radius
    );
    Ok(atoms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn five_atoms_keep_their_distance() {
        let mut rng = Pcg32::seed_from_u64(42);
        let atoms = place_atoms(&mut rng, 5, 400, 400, 1.0).unwrap();
        assert_eq!(atoms.len(), 5);

        for (i, a) in atoms.iter().enumerate() {
            assert!(a.pos.x >= 25.0 && a.pos.x < 375.0, "x out of range: {}", a.pos.x);
            assert!(a.pos.y >= 25.0 && a.pos.y < 375.0, "y out of range: {}", a.pos.y);
            for b in &atoms[i + 1..] {
                assert!(a.distance(b) >= 50.0, "atoms too close: {}", a.distance(b));
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let mut rng_a = Pcg32::seed_from_u64(7);
        let mut rng_b = Pcg32::seed_from_u64(7);
        let a = place_atoms(&mut rng_a, 8, 640, 480, 1.0).unwrap();
        let b = place_atoms(&mut rng_b, 8, 640, 480, 1.0).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
        }
    }

    #[test]
    fn velocities_are_scaled_integer_draws() {
        let mut rng = Pcg32::seed_from_u64(3);
        let atoms = place_atoms(&mut rng, 6, 400, 400, 1.0).unwrap();
        for a in &atoms {
            assert_eq!(a.vel.x, a.vel.x.trunc());
            assert!(a.vel.x >= -10.0 && a.vel.x < 10.0);
            assert!(a.vel.y >= -10.0 && a.vel.y < 10.0);
        }
    }

    #[test]
    fn crowded_bounds_fail_instead_of_hanging() {
        // Sampling region is 10x10 but atoms need 50 pixels of separation;
        // a second atom can never be placed.
        let mut rng = Pcg32::seed_from_u64(1);
        let err = place_atoms(&mut rng, 3, 60, 60, 1.0).unwrap_err();
        match err {
            Error::PlacementInfeasible {
                requested, placed, ..
            } => {
                assert_eq!(requested, 3);
                assert_eq!(placed, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn degenerate_bounds_rejected() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(matches!(
            place_atoms(&mut rng, 1, 50, 400, 1.0),
            Err(Error::InvalidBounds { .. })
        ));
    }
}
