use std::f64::consts::FRAC_PI_2;

/// The four axis-aligned directions of travel, in screen orientation (`y`
/// increases downwards)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// Return the axis-aligned direction closest to the heading `angle`
    /// (radians, with 0 pointing east and π/2 pointing south)
    pub(crate) fn nearest(angle: f64) -> Direction {
        let quadrant = (angle / FRAC_PI_2).round().rem_euclid(4.0);
        if quadrant < 0.5 {
            Direction::East
        } else if quadrant < 1.5 {
            Direction::South
        } else if quadrant < 2.5 {
            Direction::West
        } else {
            Direction::North
        }
    }

    /// Return the unit vector pointing in this direction
    pub(crate) fn unit(self) -> (f64, f64) {
        match self {
            Direction::East => (1.0, 0.0),
            Direction::South => (0.0, 1.0),
            Direction::West => (-1.0, 0.0),
            Direction::North => (0.0, -1.0),
        }
    }
}
