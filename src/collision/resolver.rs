//! Collision domain: per-platform AABB separation and wall contact sensing.

use crate::core::Aabb;

/// Half-width of the band around the actor's sides that counts as wall contact.
pub const WALL_CONTACT_TOLERANCE: f32 = 2.0;

/// Contact flags produced by one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    /// Pushed up out of a platform's top surface.
    pub grounded: bool,
    /// Pushed down out of a platform's underside.
    pub ceiling: bool,
    /// Pushed sideways out of a platform.
    pub blocked: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl Contacts {
    pub fn touching_wall(&self) -> bool {
        self.wall_left || self.wall_right
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub body: Aabb,
    pub contacts: Contacts,
}

/// Separate `body` from every overlapping platform, one platform at a time
/// in list order. Each overlap is pushed out along whichever axis has the
/// shallower penetration. With `phasing` set, horizontal pushes are skipped
/// so the actor passes through walls while still landing on floors.
///
/// Corrections accumulate: a platform that no longer overlaps after an
/// earlier correction is left alone.
pub fn resolve(body: Aabb, platforms: &[Aabb], phasing: bool) -> Resolution {
    let mut body = body;
    let mut contacts = Contacts::default();

    for platform in platforms {
        if !body.overlaps(platform) {
            continue;
        }

        // Depth needed to leave through each side of the platform.
        let push_left = body.right() - platform.left();
        let push_right = platform.right() - body.left();
        let push_up = body.bottom() - platform.top();
        let push_down = platform.bottom() - body.top();

        let horizontal = push_left.min(push_right);
        let vertical = push_up.min(push_down);

        if vertical <= horizontal {
            if push_up <= push_down {
                body.y = platform.top() - body.h;
                contacts.grounded = true;
            } else {
                body.y = platform.bottom();
                contacts.ceiling = true;
            }
        } else if !phasing {
            if push_left <= push_right {
                body.x = platform.left() - body.w;
            } else {
                body.x = platform.right();
            }
            contacts.blocked = true;
        }
    }

    let (wall_left, wall_right) = wall_contacts(&body, platforms);
    contacts.wall_left = wall_left;
    contacts.wall_right = wall_right;

    Resolution { body, contacts }
}

/// Which sides of `body` are within the tolerance band of a platform's
/// vertical face. Independent of overlap: a body resting flush against a wall
/// reports contact without being moved.
pub fn wall_contacts(body: &Aabb, platforms: &[Aabb]) -> (bool, bool) {
    let mut left = false;
    let mut right = false;

    for platform in platforms {
        // Floors and ceilings the body merely rests against are not walls.
        let shared_height = body.bottom().min(platform.bottom()) - body.top().max(platform.top());
        if shared_height <= WALL_CONTACT_TOLERANCE {
            continue;
        }
        if (body.left() - platform.right()).abs() <= WALL_CONTACT_TOLERANCE {
            left = true;
        }
        if (body.right() - platform.left()).abs() <= WALL_CONTACT_TOLERANCE {
            right = true;
        }
    }

    (left, right)
}
