//! Combat domain: enemy behavior rules.

pub(crate) mod brain;
pub(crate) mod mob;

pub use brain::{BrainContact, brain_contact, damage_brain, update_brain};
pub use mob::{MobEvent, hit_mob, mob_hitbox, update_mob};
