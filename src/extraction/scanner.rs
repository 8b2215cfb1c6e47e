//! Run-length scanning of the wall mask along rows and columns
//!
//! Runs are maximal sequences of wall pixels not yet claimed by an earlier
//! segment. The horizontal pass always completes before the vertical pass
//! starts, so an L- or cross-shaped blob is split into horizontal runs first
//! and only the unclaimed remainder is read vertically.

use crate::extraction::claims::{ClaimGrid, ClaimPolicy};
use crate::extraction::mask::ColorMask;
use crate::io::configuration::MIN_RUN_LENGTH;
use crate::model::wall::{Orientation, WallSegment};

/// Extract one-pixel-thick runs along a single axis
///
/// Horizontal scans walk rows top to bottom and columns left to right;
/// vertical scans walk columns left to right and rows top to bottom. Claimed
/// pixels are updated as soon as a run ends, so runs never overlap.
pub fn scan_runs(
    mask: &ColorMask,
    claims: &mut ClaimGrid,
    orientation: Orientation,
    policy: ClaimPolicy,
) -> Vec<WallSegment> {
    let (lines, span) = match orientation {
        Orientation::Horizontal => (mask.height(), mask.width()),
        Orientation::Vertical => (mask.width(), mask.height()),
    };
    let is_open = |claims: &ClaimGrid, line: usize, offset: usize| {
        let (x, y) = orientation.position(line, offset);
        mask.is_wall(x, y) && !claims.is_claimed(x, y)
    };

    let mut segments = Vec::new();
    for line in 0..lines {
        let mut offset = 0;
        while offset < span {
            if !is_open(claims, line, offset) {
                offset += 1;
                continue;
            }

            let start = offset;
            while offset < span && is_open(claims, line, offset) {
                offset += 1;
            }

            let length = offset - start;
            let emitted = length >= MIN_RUN_LENGTH;
            if policy.claims(emitted) {
                for covered in start..offset {
                    let (x, y) = orientation.position(line, covered);
                    claims.claim(x, y);
                }
            }
            if emitted {
                let (x, y) = orientation.position(line, start);
                segments.push(WallSegment::run(x, y, length, orientation));
            }
        }
    }

    segments
}

/// Run the horizontal pass to completion, then the vertical pass
///
/// Returns horizontal segments followed by vertical ones.
pub fn scan_mask(mask: &ColorMask, policy: ClaimPolicy) -> Vec<WallSegment> {
    let mut claims = ClaimGrid::new(mask.width(), mask.height());
    let mut segments = scan_runs(mask, &mut claims, Orientation::Horizontal, policy);
    segments.extend(scan_runs(mask, &mut claims, Orientation::Vertical, policy));
    segments
}
