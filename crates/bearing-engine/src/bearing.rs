//! Symbolic head pose targets

use pose_geometry::Axis;
use serde::{Deserialize, Serialize};

/// Direction a bearing commits to along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    Negative,
    Centered,
    Positive,
}

impl AxisDirection {
    /// -1, 0 or 1
    pub const fn sign(self) -> f64 {
        match self {
            AxisDirection::Negative => -1.0,
            AxisDirection::Centered => 0.0,
            AxisDirection::Positive => 1.0,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            AxisDirection::Negative => AxisDirection::Positive,
            AxisDirection::Centered => AxisDirection::Centered,
            AxisDirection::Positive => AxisDirection::Negative,
        }
    }
}

/// Signed yaw/pitch direction of a bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearingDirection {
    pub yaw: AxisDirection,
    pub pitch: AxisDirection,
}

impl BearingDirection {
    pub const fn along(&self, axis: Axis) -> AxisDirection {
        match axis {
            Axis::Yaw => self.yaw,
            Axis::Pitch => self.pitch,
        }
    }
}

/// Head pose the subject is asked to assume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bearing {
    #[default]
    Straight,
    Left,
    Right,
    Up,
    Down,
    LeftUp,
    RightUp,
    LeftDown,
    RightDown,
}

impl Bearing {
    pub const ALL: [Bearing; 9] = [
        Bearing::Straight,
        Bearing::Left,
        Bearing::Right,
        Bearing::Up,
        Bearing::Down,
        Bearing::LeftUp,
        Bearing::RightUp,
        Bearing::LeftDown,
        Bearing::RightDown,
    ];

    /// Signed axis table; every other bearing computation derives from it.
    ///
    /// Positive yaw is left, negative pitch is up.
    pub const fn direction(self) -> BearingDirection {
        use AxisDirection::{Centered, Negative, Positive};
        let (yaw, pitch) = match self {
            Bearing::Straight => (Centered, Centered),
            Bearing::Left => (Positive, Centered),
            Bearing::Right => (Negative, Centered),
            Bearing::Up => (Centered, Negative),
            Bearing::Down => (Centered, Positive),
            Bearing::LeftUp => (Positive, Negative),
            Bearing::RightUp => (Negative, Negative),
            Bearing::LeftDown => (Positive, Positive),
            Bearing::RightDown => (Negative, Positive),
        };
        BearingDirection { yaw, pitch }
    }

    /// Bearing pointing the other way on both axes
    pub fn opposite(self) -> Bearing {
        let direction = self.direction();
        let reversed = BearingDirection {
            yaw: direction.yaw.reversed(),
            pitch: direction.pitch.reversed(),
        };
        Bearing::ALL
            .into_iter()
            .find(|b| b.direction() == reversed)
            .unwrap_or(Bearing::Straight)
    }
}
