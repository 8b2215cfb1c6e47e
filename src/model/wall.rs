//! Axis-aligned wall rectangles and their JSON wire shape
//!
//! A segment starts life as a one-pixel stripe found by the scanner and only
//! grows thicker through merging. On disk each wall is written as
//! `{"coords": {"X", "Y"}, "l", "h", "w"}` where `h` is the heading in degrees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer pixel coordinate serialized with upper-case keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Column, increasing to the right
    #[serde(rename = "X")]
    pub x: usize,
    /// Row, increasing downward
    #[serde(rename = "Y")]
    pub y: usize,
}

impl Point {
    /// Create a point from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Scan axis of a wall, ordered horizontal before vertical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Orientation {
    /// Runs left to right, heading 0
    Horizontal,
    /// Runs top to bottom, heading 90
    Vertical,
}

impl Orientation {
    /// Heading in degrees as written to JSON
    pub const fn heading(self) -> u16 {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 90,
        }
    }

    /// Map a position along a scan line to image `(x, y)`
    ///
    /// `line` is the row for horizontal scans and the column for vertical ones.
    pub const fn position(self, line: usize, offset: usize) -> (usize, usize) {
        match self {
            Self::Horizontal => (offset, line),
            Self::Vertical => (line, offset),
        }
    }
}

impl From<Orientation> for u16 {
    fn from(orientation: Orientation) -> Self {
        orientation.heading()
    }
}

impl TryFrom<u16> for Orientation {
    type Error = String;

    fn try_from(heading: u16) -> Result<Self, Self::Error> {
        match heading {
            0 => Ok(Self::Horizontal),
            90 => Ok(Self::Vertical),
            other => Err(format!("unsupported wall heading {other}, expected 0 or 90")),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Rectangular wall built from one or more stacked scan runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "WireWall", from = "WireWall")]
pub struct WallSegment {
    /// Left end for horizontal walls, top end for vertical walls
    pub start: Point,
    /// Extent along the wall axis in pixels
    pub length: usize,
    /// Scan axis the wall was found on
    pub orientation: Orientation,
    /// Extent across the wall axis in pixels
    pub thickness: usize,
}

impl WallSegment {
    /// A freshly scanned one-pixel-thick run
    pub const fn run(x: usize, y: usize, length: usize, orientation: Orientation) -> Self {
        Self {
            start: Point::new(x, y),
            length,
            orientation,
            thickness: 1,
        }
    }

    /// Ordering used by the merger: orientation, then `x`, then `y`
    pub const fn sort_key(&self) -> (Orientation, usize, usize) {
        (self.orientation, self.start.x, self.start.y)
    }

    /// Pixel width and height of the covered rectangle
    pub const fn size(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.length, self.thickness),
            Orientation::Vertical => (self.thickness, self.length),
        }
    }

    /// Number of pixels covered by the rectangle
    pub const fn area(&self) -> usize {
        self.length * self.thickness
    }

    /// Check whether `next` is the stripe lying directly against this wall's far side
    ///
    /// Both must share orientation, length and start along the wall axis.
    pub const fn is_stacked_by(&self, next: &Self) -> bool {
        if !matches!(
            (self.orientation, next.orientation),
            (Orientation::Horizontal, Orientation::Horizontal)
                | (Orientation::Vertical, Orientation::Vertical)
        ) || self.length != next.length
        {
            return false;
        }

        match self.orientation {
            Orientation::Horizontal => {
                next.start.x == self.start.x && next.start.y == self.start.y + self.thickness
            }
            Orientation::Vertical => {
                next.start.y == self.start.y && next.start.x == self.start.x + self.thickness
            }
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct WireWall {
    coords: Point,
    l: usize,
    h: Orientation,
    w: usize,
}

impl From<WallSegment> for WireWall {
    fn from(wall: WallSegment) -> Self {
        Self {
            coords: wall.start,
            l: wall.length,
            h: wall.orientation,
            w: wall.thickness,
        }
    }
}

impl From<WireWall> for WallSegment {
    fn from(wire: WireWall) -> Self {
        Self {
            start: wire.coords,
            length: wire.l,
            orientation: wire.h,
            thickness: wire.w,
        }
    }
}
