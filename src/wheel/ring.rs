use super::RING_COUNT;

/// Ring index for a distance from the center, ring 0 being the innermost.
///
/// The radius is split into `RING_COUNT` equal-width bands. Each band owns
/// its outer edge, so a tap exactly on an edge resolves to the inner band.
/// Taps past the rim stay in the outermost ring. Degenerate input (NaN,
/// negative distance, non-positive radius) resolves to ring 0.
pub fn ring_for_distance(distance: f64, radius: f64) -> usize {
    if !distance.is_finite() || distance < 0.0 || !radius.is_finite() || radius <= 0.0 {
        return 0;
    }

    (0..RING_COUNT)
        .find(|&ring| distance <= ring_outer_edge(ring, radius))
        .unwrap_or(RING_COUNT - 1)
}

pub fn ring_for_offset(dx: f64, dy: f64, radius: f64) -> usize {
    ring_for_distance(dx.hypot(dy), radius)
}

pub fn ring_inner_edge(ring: usize, radius: f64) -> f64 {
    radius * ring.min(RING_COUNT - 1) as f64 / RING_COUNT as f64
}

pub fn ring_outer_edge(ring: usize, radius: f64) -> f64 {
    radius * (ring.min(RING_COUNT - 1) + 1) as f64 / RING_COUNT as f64
}
