use super::{BORDER_EPSILON, SECTOR_ANGLE, SECTOR_COUNT};
use std::f64::consts::TAU;

/// Start angle of every sector, evenly spaced from 0.
/// Sector i covers `[borders[i], borders[i] + SECTOR_ANGLE)`.
pub fn sector_borders() -> [f64; SECTOR_COUNT] {
    std::array::from_fn(|i| i as f64 * SECTOR_ANGLE)
}

/// Sector index for an angle in radians, as returned by `atan2`.
///
/// A border belongs to the sector that starts there. Non-finite angles map
/// to sector 0.
pub fn sector_for_angle(angle: f64) -> usize {
    if !angle.is_finite() {
        return 0;
    }

    // exact for angles already in [0, TAU)
    let normalized = angle.rem_euclid(TAU);
    let quotient = normalized / SECTOR_ANGLE;

    // a border computed as i * SECTOR_ANGLE may land a hair below i
    let nearest = quotient.round();
    let index = if (quotient - nearest).abs() < BORDER_EPSILON {
        nearest
    } else {
        quotient.floor()
    };

    (index as usize) % SECTOR_COUNT
}

/// Angle in radians of the middle of a sector. Indices wrap around.
pub fn sector_center_angle(sector: usize) -> f64 {
    (sector % SECTOR_COUNT) as f64 * SECTOR_ANGLE + SECTOR_ANGLE / 2.0
}

/// Sector for an offset from the wheel center (positive `dy` is down).
pub fn sector_for_offset(dx: f64, dy: f64) -> usize {
    if dx == 0.0 && dy == 0.0 {
        return 0;
    }
    sector_for_angle(dy.atan2(dx))
}
