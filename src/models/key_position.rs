//! Physical key placement for the 38-key Totem split layout.

use crate::constants::KEY_COUNT;
use serde::{Deserialize, Serialize};

/// Where one physical key sits on the rendered board.
///
/// Coordinates are in SVG user units relative to the inner container of the
/// reference template; rotation is in degrees around the key centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPosition {
    /// Horizontal centre
    pub x: i32,
    /// Vertical centre
    pub y: i32,
    /// Rotation in degrees (0.0 = upright)
    pub rotation: f32,
}

impl KeyPosition {
    /// Creates an upright key at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
        }
    }

    /// Sets the key rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// SVG `transform` attribute value placing this key.
    ///
    /// Upright keys only translate; rotated keys append `rotate(deg)`.
    #[must_use]
    pub fn transform(&self) -> String {
        if self.rotation == 0.0 {
            format!("translate({}, {})", self.x, self.y)
        } else {
            format!(
                "translate({}, {}) rotate({:.1})",
                self.x, self.y, self.rotation
            )
        }
    }
}

const fn key(x: i32, y: i32, rotation: f32) -> KeyPosition {
    KeyPosition::new(x, y).with_rotation(rotation)
}

/// Key positions in ZMK position order: three finger rows, the outer side
/// buttons on the bottom row, then the six thumb keys.
pub const TOTEM_KEY_POSITIONS: [KeyPosition; KEY_COUNT] = [
    // Top row (0-9)
    key(78, 113, -10.0),
    key(144, 62, -4.0),
    key(212, 28, 0.0),
    key(271, 56, 0.0),
    key(330, 65, 0.0),
    key(520, 65, 0.0),
    key(580, 56, 0.0),
    key(639, 28, 0.0),
    key(706, 62, 4.0),
    key(773, 113, 10.0),
    // Home row (10-19)
    key(87, 168, -10.0),
    key(148, 118, -4.0),
    key(212, 84, 0.0),
    key(271, 112, 0.0),
    key(330, 121, 0.0),
    key(520, 121, 0.0),
    key(580, 112, 0.0),
    key(639, 84, 0.0),
    key(703, 118, 4.0),
    key(764, 168, 10.0),
    // Bottom row with side buttons (20-31)
    key(34, 209, -10.0),
    key(97, 223, -10.0),
    key(152, 174, -4.0),
    key(212, 140, 0.0),
    key(271, 168, 0.0),
    key(330, 177, 0.0),
    key(520, 177, 0.0),
    key(580, 168, 0.0),
    key(639, 140, 0.0),
    key(699, 174, 4.0),
    key(754, 223, 10.0),
    key(817, 209, 10.0),
    // Thumbs (32-37)
    key(255, 236, 0.0),
    key(320, 245, 15.0),
    key(381, 270, 30.0),
    key(470, 270, -30.0),
    key(531, 245, -15.0),
    key(596, 236, 0.0),
];
