use super::board::Point;
use super::direction::Direction;
use serde::Deserialize;
use std::f64::consts::{FRAC_PI_2, PI};

/// Components of a continuous step smaller than this are treated as zero so
/// that axis-aligned headings produce exact steps
const STEP_EPSILON: f64 = 1e-9;

/// The snake's direction of travel as an angle in radians, in screen
/// orientation: 0 points east (+x) and π/2 points south (+y).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Heading(f64);

impl Heading {
    pub(crate) const fn new(radians: f64) -> Heading {
        Heading(radians)
    }

    /// Return the heading pointing from `from` towards `to`
    pub(crate) fn toward(from: Point, to: Point) -> Heading {
        Heading((to.y - from.y).atan2(to.x - from.x))
    }

    /// Return the heading after applying a keyboard turn
    pub(crate) fn turn(self, turn: Turn) -> Heading {
        Heading(self.0 + turn.radians())
    }

    /// Return the offset, in cells, of one step along this heading
    pub(crate) fn step(self, movement: Movement) -> (f64, f64) {
        match movement {
            Movement::Continuous => {
                let (sin, cos) = self.0.sin_cos();
                (snap_zero(cos), snap_zero(sin))
            }
            Movement::Quantized => Direction::nearest(self.0).unit(),
        }
    }
}

fn snap_zero(v: f64) -> f64 {
    if v.abs() < STEP_EPSILON {
        0.0
    } else {
        v
    }
}

/// A heading adjustment produced by an arrow key.  Turns are relative to the
/// current heading: left & right rotate a quarter turn, while up & down
/// reverse it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Turn {
    Left,
    Up,
    Right,
    Down,
}

impl Turn {
    fn radians(self) -> f64 {
        match self {
            Turn::Left => -FRAC_PI_2,
            Turn::Up => -PI,
            Turn::Right => FRAC_PI_2,
            Turn::Down => PI,
        }
    }
}

/// How a heading is turned into a step on the board
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Movement {
    /// Step by `(cos θ, sin θ)` cells.  Positions may fall between grid
    /// cells; eating and collisions are decided by distance.
    #[default]
    Continuous,

    /// Step one whole cell in the axis direction nearest to the heading, so
    /// that the snake always stays on the grid
    Quantized,
}
