//! Combat domain: static damage hazards.

use crate::core::Aabb;

/// First hazard the body overlaps, in level order.
pub fn touching_spike<'a>(body: &Aabb, hazards: &'a [Aabb]) -> Option<&'a Aabb> {
    hazards.iter().find(|hazard| body.overlaps(hazard))
}
