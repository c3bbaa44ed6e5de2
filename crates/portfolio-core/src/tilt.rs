use crate::constants::{TILT_DAMPING, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use glam::Vec2;

/// Card rotation in degrees for a pointer hovering over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    /// `pointer` in client coordinates; `origin`/`size` from the card's
    /// bounding rect. Pointer below centre tips the top edge away.
    pub fn for_pointer(pointer: Vec2, origin: Vec2, size: Vec2) -> Self {
        let local = pointer - origin;
        let center = size / 2.0;
        Self {
            rotate_x: (local.y - center.y) / TILT_DAMPING,
            rotate_y: (center.x - local.x) / TILT_DAMPING,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, TILT_LIFT_PX
        )
    }
}

pub const TILT_RESET_CSS: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";
