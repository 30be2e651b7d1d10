//! Pairwise collision detection and impulse response
//!
//! Equal-mass, frictionless, perfectly elastic exchange of the velocity
//! component along the line of centers; tangential components are untouched
//! and positions are never corrected for overlap.

use glam::Vec2;

use crate::sim::Atom;

/// Resolve one ordered contact: does `a`, closing on `b`, hit it?
///
/// A contact is active when the collision circles overlap and the angle
/// between `a`'s velocity and the center-to-center vector is at most 90
/// degrees. A stationary `a` or coincident centers never count (no defined
/// approach direction). On an active contact the normal component of the
/// relative velocity moves from `a` to `b`; pair momentum is conserved.
///
/// Returns whether an impulse was applied.
pub fn resolve(a: &mut Atom, b: &mut Atom) -> bool {
    if a.distance(b) >= a.radius() + b.radius() {
        return false;
    }
    let towards = b.pos - a.pos;
    if towards == Vec2::ZERO || a.vel == Vec2::ZERO {
        return false;
    }
    if a.vel.dot(towards) < 0.0 {
        return false;
    }
    let normal = towards.normalize();
    let component = (a.vel - b.vel).dot(normal) * normal;
    b.vel += component;
    a.vel -= component;
    true
}

/// Split-borrow two distinct atoms out of the collection.
pub(crate) fn pair_mut(atoms: &mut [Atom], i: usize, j: usize) -> (&mut Atom, &mut Atom) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = atoms.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = atoms.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
