//! Logical movement directions and their fixed angle and step tables
//!
//! The engine names diagonal moves `Up`/`Down`/`Left`/`Right` and
//! axis-aligned moves `TUp`/`TDown`/`TLeft`/`TRight`.
//!
//! Two angle conventions meet here, both in degrees on a y-down screen.
//! The canonical table angles (`Direction::angle`) put 0 at `TUp` and grow
//! clockwise. `angle_between`, `classify_angle` and `direction_toward`
//! measure from the positive x axis and grow towards positive y, so 0 is
//! `TRight` and 90 is `TDown` for the eight-way buckets.

use num_traits::Zero;

use crate::field::coords::PixelPoint;
use crate::io::configuration::HEADING_THRESHOLD;
use crate::io::error::{FieldError, invalid_parameter};

/// One of the eight logical movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Diagonal towards negative x and negative y
    Left,
    /// Diagonal towards positive x and positive y
    Right,
    /// Diagonal towards positive x and negative y
    Up,
    /// Diagonal towards negative x and positive y
    Down,
    /// Axis-aligned towards negative x
    TLeft,
    /// Axis-aligned towards positive x
    TRight,
    /// Axis-aligned towards negative y
    TUp,
    /// Axis-aligned towards positive y
    TDown,
}

/// Integer code used for "no direction"
pub const EMPTY_DIRECTION_CODE: i32 = -1;

// (direction, angle, unit step), indexed by code
const DIRECTION_TABLE: [(Direction, f32, [i32; 2]); 8] = [
    (Direction::Left, 315.0, [-1, -1]),
    (Direction::Right, 135.0, [1, 1]),
    (Direction::Up, 45.0, [1, -1]),
    (Direction::Down, 225.0, [-1, 1]),
    (Direction::TLeft, 270.0, [-1, 0]),
    (Direction::TRight, 90.0, [1, 0]),
    (Direction::TUp, 0.0, [0, -1]),
    (Direction::TDown, 180.0, [0, 1]),
];

// Indexed by (dy + 1) * 3 + (dx + 1)
const DISPLACEMENT_TABLE: [Option<Direction>; 9] = [
    Some(Direction::Left),
    Some(Direction::TUp),
    Some(Direction::Up),
    Some(Direction::TLeft),
    None,
    Some(Direction::TRight),
    Some(Direction::Down),
    Some(Direction::TDown),
    Some(Direction::Right),
];

impl Direction {
    /// All directions in code order
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::TLeft,
        Self::TRight,
        Self::TUp,
        Self::TDown,
    ];

    /// Engine integer code (0..=7)
    pub const fn code(self) -> i32 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Up => 2,
            Self::Down => 3,
            Self::TLeft => 4,
            Self::TRight => 5,
            Self::TUp => 6,
            Self::TDown => 7,
        }
    }

    /// Look up a direction by engine code
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| DIRECTION_TABLE.get(index))
            .map(|entry| entry.0)
    }

    /// Canonical angle in degrees
    pub fn angle(self) -> f32 {
        self.entry().1
    }

    /// Unit step scaled by `value`
    pub fn step(self, value: i32) -> [i32; 2] {
        let unit = self.entry().2;
        [unit[0].saturating_mul(value), unit[1].saturating_mul(value)]
    }

    /// Whether this is an axis-aligned (T-prefixed) direction
    pub const fn is_axis_aligned(self) -> bool {
        matches!(self, Self::TLeft | Self::TRight | Self::TUp | Self::TDown)
    }

    fn entry(self) -> (Self, f32, [i32; 2]) {
        DIRECTION_TABLE
            .get(self.code() as usize)
            .copied()
            .unwrap_or((self, 0.0, [0, 0]))
    }
}

/// Number of buckets used when classifying a continuous angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Diagonals only
    Four,
    /// Diagonals plus horizontal axis moves
    Six,
    /// All eight directions
    Eight,
}

impl TryFrom<u8> for Arity {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            other => Err(invalid_parameter(
                "arity",
                &other,
                &"direction arity must be 4, 6 or 8",
            )),
        }
    }
}

/// Canonical angle for an engine direction code (unknown codes map to 0)
pub fn direction_angle(code: i32) -> f32 {
    Direction::from_code(code).map_or(0.0, Direction::angle)
}

/// Unit step for an engine direction code
///
/// Codes above `TDown` clamp to `TDown`; negative codes have no step.
pub fn unit_step(code: i32) -> [i32; 2] {
    let clamped = code.min(Direction::TDown.code());
    Direction::from_code(clamped).map_or([0, 0], |direction| direction.step(1))
}

fn axis_sign<T: Zero + PartialOrd>(value: &T) -> i32 {
    let zero = T::zero();
    if *value > zero {
        1
    } else if *value < zero {
        -1
    } else {
        0
    }
}

/// Classify a raw displacement by the sign of each axis
///
/// Returns `None` for the zero vector.
pub fn classify_displacement<T: Zero + PartialOrd>(dx: T, dy: T) -> Option<Direction> {
    let index = (axis_sign(&dy) + 1) * 3 + axis_sign(&dx) + 1;
    DISPLACEMENT_TABLE.get(index as usize).copied().flatten()
}

/// Classify a displacement, falling back to `fallback` for the zero vector
pub fn classify_displacement_or<T: Zero + PartialOrd>(
    dx: T,
    dy: T,
    fallback: Option<Direction>,
) -> Option<Direction> {
    classify_displacement(dx, dy).or(fallback)
}

/// Direction of `target` as seen from `source`
pub fn classify_between(source: PixelPoint, target: PixelPoint) -> Option<Direction> {
    classify_displacement(target.x - source.x, target.y - source.y)
}

/// Bucket a continuous angle in degrees into one of 4, 6 or 8 directions
pub fn classify_angle(angle: f32, arity: Arity) -> Direction {
    match arity {
        Arity::Four => {
            if angle < 90.0 {
                Direction::Right
            } else if angle < 180.0 {
                Direction::Down
            } else if angle < 270.0 {
                Direction::Left
            } else {
                Direction::Up
            }
        }
        Arity::Six => {
            if angle > 337.0 || angle < 23.0 {
                Direction::TRight
            } else if angle > 270.0 {
                Direction::Up
            } else if angle > 202.0 {
                Direction::Left
            } else if angle > 157.0 {
                Direction::TLeft
            } else if angle > 90.0 {
                Direction::Down
            } else {
                Direction::Right
            }
        }
        Arity::Eight => {
            if angle > 337.0 || angle < 23.0 {
                Direction::TRight
            } else if angle > 292.0 {
                Direction::Up
            } else if angle > 247.0 {
                Direction::TUp
            } else if angle > 202.0 {
                Direction::Left
            } else if angle > 157.0 {
                Direction::TLeft
            } else if angle > 112.0 {
                Direction::Down
            } else if angle > 67.0 {
                Direction::TDown
            } else {
                Direction::Right
            }
        }
    }
}

/// Whole-degree angle from `source` to `target`, between 0 and 360 inclusive
///
/// Measured from the positive x axis, mirrored for targets above the source.
/// Coincident points give 0.
pub fn angle_between(source: PixelPoint, target: PixelPoint) -> i32 {
    let nx = target.x - source.x;
    let ny = target.y - source.y;
    let r = nx.hypot(ny);
    if r == 0.0 {
        return 0;
    }
    let angle = (nx / r).clamp(-1.0, 1.0).acos().to_degrees().floor() as i32;
    if ny < 0.0 { 360 - angle } else { angle }
}

/// Rotation in degrees from `source` to `target`, on floored pixel deltas
pub fn rotation(source: PixelPoint, target: PixelPoint) -> f32 {
    let nx = (target.x - source.x).floor();
    let ny = (target.y - source.y).floor();
    ny.atan2(nx).to_degrees()
}

/// Bucketed direction from `source` to `target`
pub fn direction_toward(source: PixelPoint, target: PixelPoint, arity: Arity) -> Direction {
    classify_angle(angle_between(source, target) as f32, arity)
}

/// Snap a heading in radians to the axis it points along
///
/// Returns `None` when no axis projection exceeds the heading threshold.
pub fn classify_heading(radians: f32) -> Option<Direction> {
    let (sin, cos) = radians.sin_cos();
    let projections = [
        (Direction::TUp, -cos),
        (Direction::TRight, sin),
        (Direction::TLeft, -sin),
        (Direction::TDown, cos),
    ];
    projections
        .into_iter()
        .find(|&(_, projection)| projection > HEADING_THRESHOLD)
        .map(|(direction, _)| direction)
}
