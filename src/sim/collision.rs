//! Pairwise disc collision detection and impulse response

use super::state::Body;

/// Resolve one unordered pair of discs in place.
///
/// Discs further apart than `combined_radius` are untouched regardless of
/// their velocities. Overlapping discs that are not closing keep their
/// interpenetration (there is no positional correction outside the
/// closing branch) until their velocities next diverge. Exactly
/// coincident centers have no defined collision normal; that pair is
/// skipped rather than dividing by zero.
pub fn resolve_pair(a: &mut Body, b: &mut Body, combined_radius: f64) {
    let delta = b.pos - a.pos;
    let dist = delta.length();

    if dist >= combined_radius || dist == 0.0 {
        return;
    }

    // Unit vector from a toward b
    let normal = delta / dist;
    let closing = normal.dot(b.vel - a.vel);

    // Separating or mutually at rest along the normal: nothing to do
    if closing >= 0.0 {
        return;
    }

    // Restitution-weighted harmonic impulse. Bodies carry no explicit
    // mass; inverse restitution stands in for it.
    let j = (2.0 * closing) / (1.0 / a.restitution + 1.0 / b.restitution);
    a.vel += j * normal / a.restitution;
    b.vel -= j * normal / b.restitution;

    // Split the penetration evenly along the normal
    let push = (combined_radius - dist) / 2.0;
    a.pos -= push * normal;
    b.pos += push * normal;
}
