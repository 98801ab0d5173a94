use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CanvexError;

/// A 2D point, also used as a displacement vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Displacement applied by a move or space gesture
pub type Delta = Point;

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    pub fn translate(self, delta: Delta) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

/// Axis-aligned bounds of a shape
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same size, shifted by `delta`
    pub fn translate(self, delta: Delta) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Start coordinate along `axis`
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Extent along `axis`
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Edge or corner that moves during a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::S => "s",
            Direction::E => "e",
            Direction::W => "w",
            Direction::Ne => "ne",
            Direction::Nw => "nw",
            Direction::Se => "se",
            Direction::Sw => "sw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CanvexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Direction::N),
            "s" => Ok(Direction::S),
            "e" => Ok(Direction::E),
            "w" => Ok(Direction::W),
            "ne" => Ok(Direction::Ne),
            "nw" => Ok(Direction::Nw),
            "se" => Ok(Direction::Se),
            "sw" => Ok(Direction::Sw),
            other => Err(CanvexError::UnknownDirection {
                direction: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let b = Bounds::new(10.0, 20.0, 100.0, 80.0).translate(Point::new(5.0, -5.0));
        assert_eq!(b, Bounds::new(15.0, 15.0, 100.0, 80.0));
        assert_eq!(Point::new(1.0, 1.0).translate(Point::new(2.0, 3.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("se".parse::<Direction>(), Ok(Direction::Se));
        assert_eq!(Direction::Nw.to_string(), "nw");
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(CanvexError::UnknownDirection { .. })
        ));
    }

    #[test]
    fn test_axis_accessors() {
        let b = Bounds::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.start(Axis::X), 1.0);
        assert_eq!(b.start(Axis::Y), 2.0);
        assert_eq!(b.extent(Axis::X), 3.0);
        assert_eq!(b.extent(Axis::Y), 4.0);
    }
}
