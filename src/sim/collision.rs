//! Pairwise ball-ball collision resolution
//!
//! Detection, positional de-penetration, and momentum-conserving impulse
//! response for two equal-mass circles. The resolver mutates both balls, so
//! each unordered pair must be resolved exactly once per tick; calling it
//! again for the swapped pair in the same tick double-applies the impulse.
//! The tick orchestration owns that guarantee, not this function.

use crate::tuning::Tuning;

use super::state::Ball;

/// Resolve a potential collision between two balls. Returns true on contact.
///
/// On overlap the balls are pushed apart symmetrically along the center
/// line, then an impulse of `(1 + restitution) * (relative velocity . normal)`
/// is exchanged along the normal. Both balls are flagged moving, so a resting
/// ball can be knocked back to life by an incoming one. Exactly coincident
/// centers skip correction and response entirely (no usable normal) but still
/// count as a collision.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, tuning: &Tuning) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let contact = tuning.contact_distance();

    if distance >= contact {
        return false;
    }

    if distance > 0.0 {
        let normal = delta / distance;

        let overlap = contact - distance;
        a.pos -= normal * (overlap / 2.0);
        b.pos += normal * (overlap / 2.0);

        let rel_vel = b.vel - a.vel;
        let along_normal = rel_vel.dot(normal);
        let impulse = (1.0 + tuning.restitution) * along_normal;

        a.vel += normal * impulse;
        b.vel -= normal * impulse;

        a.moving = true;
        b.moving = true;
    }

    true
}
