//! Collision domain: minimum-translation resolution against static platforms.

mod resolver;

pub use resolver::{Contacts, Resolution, WALL_CONTACT_TOLERANCE, resolve, wall_contacts};
