//! Wheel geometry: pure conversions between pointer offsets and wheel cells.
//!
//! Offsets are measured from the wheel center in screen coordinates, so a
//! positive `dy` points down and angles grow clockwise on screen.

use std::f64::consts::TAU;

pub mod ring;
pub mod sector;

pub use ring::{ring_for_distance, ring_for_offset, ring_inner_edge, ring_outer_edge};
pub use sector::{sector_borders, sector_center_angle, sector_for_angle, sector_for_offset};

pub const SECTOR_COUNT: usize = 8;
pub const SECTOR_ANGLE: f64 = TAU / SECTOR_COUNT as f64;
pub const RING_COUNT: usize = 3;

/// Quotients closer than this (in sectors) to an integer are treated as
/// sitting exactly on that border.
pub const BORDER_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn distance(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// A resolved wheel cell: angular sector plus radial ring (0 = innermost).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelPoint {
    pub sector: usize,
    pub ring: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub radius: f64,
}

impl WheelLayout {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn locate(&self, offset: Offset) -> WheelPoint {
        WheelPoint {
            sector: sector_for_offset(offset.dx, offset.dy),
            ring: ring_for_offset(offset.dx, offset.dy, self.radius),
        }
    }
}
