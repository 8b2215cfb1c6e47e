use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decides which pixels a scanned run consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimPolicy {
    /// Every pixel a run covers is claimed, even when the run is too short to emit
    ///
    /// Matches the established output format bit for bit. The horizontal pass
    /// consumes all wall pixels, so no vertical walls are ever found.
    #[default]
    Scanned,
    /// Only pixels of emitted runs are claimed
    ///
    /// Opt-in: short horizontal fragments stay available to the vertical pass,
    /// which then recovers walls one or two pixels wide.
    Emitted,
}

impl ClaimPolicy {
    /// Whether a run's pixels are claimed, given whether the run was emitted
    pub const fn claims(self, emitted: bool) -> bool {
        match self {
            Self::Scanned => true,
            Self::Emitted => emitted,
        }
    }
}

impl FromStr for ClaimPolicy {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "scanned" => Ok(Self::Scanned),
            "emitted" => Ok(Self::Emitted),
            other => Err(format!(
                "unknown claim policy '{other}', expected 'scanned' or 'emitted'"
            )),
        }
    }
}

impl fmt::Display for ClaimPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scanned => write!(f, "scanned"),
            Self::Emitted => write!(f, "emitted"),
        }
    }
}

/// Row-major bit grid of pixels already consumed by a segment
///
/// Shared by both scan passes of one image so no pixel feeds two segments.
#[derive(Clone, Debug)]
pub struct ClaimGrid {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl ClaimGrid {
    /// Create a grid with nothing claimed
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Grid width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Test whether a pixel is claimed; out-of-range pixels count as unclaimed
    pub fn is_claimed(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Mark a pixel as consumed, returning `false` if it already was
    ///
    /// Out-of-range pixels are ignored and report `false`.
    pub fn claim(&mut self, x: usize, y: usize) -> bool {
        let Some(index) = self.index(x, y) else {
            return false;
        };
        if self.is_claimed(x, y) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Count claimed pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
