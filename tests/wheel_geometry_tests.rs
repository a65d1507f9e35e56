use rfeelings::wheel::{
    Offset, RING_COUNT, SECTOR_ANGLE, SECTOR_COUNT, WheelLayout, WheelPoint, ring_for_distance,
    ring_for_offset, ring_inner_edge, ring_outer_edge, sector_borders, sector_center_angle,
    sector_for_angle, sector_for_offset,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[test]
fn test_sector_for_angle_stays_in_range() {
    // sweep (-PI, PI] in small steps, including both ends
    let steps = 10_000;
    for i in 1..=steps {
        let angle = -PI + (2.0 * PI) * (i as f64) / (steps as f64);
        let sector = sector_for_angle(angle);
        assert!(sector < SECTOR_COUNT, "angle {} gave sector {}", angle, sector);
    }
    assert!(sector_for_angle(PI) < SECTOR_COUNT);
    assert!(sector_for_angle(-PI + f64::EPSILON) < SECTOR_COUNT);
    assert!(sector_for_angle(-f64::MIN_POSITIVE) < SECTOR_COUNT);
}

#[test]
fn test_sector_center_round_trip() {
    for i in 0..SECTOR_COUNT {
        assert_eq!(sector_for_angle(sector_center_angle(i)), i);
    }
}

#[test]
fn test_center_angle_round_trip_through_atan2_range() {
    // centers above PI come back from atan2 as negative angles
    for i in 0..SECTOR_COUNT {
        let center = sector_center_angle(i);
        let wrapped = center.sin().atan2(center.cos());
        assert_eq!(sector_for_angle(wrapped), i, "sector {} via {}", i, wrapped);
    }
}

#[test]
fn test_exact_borders_belong_to_the_starting_sector() {
    for i in 0..=SECTOR_COUNT {
        let border = i as f64 * FRAC_PI_4;
        assert_eq!(
            sector_for_angle(border),
            i % SECTOR_COUNT,
            "border {} ({} * PI/4)",
            border,
            i
        );
    }
}

#[test]
fn test_negative_borders_as_returned_by_atan2() {
    // -PI/4 is the border where sector 7 starts, -PI/2 starts sector 6, ...
    for k in 1..4 {
        let border = -(k as f64) * FRAC_PI_4;
        assert_eq!(sector_for_angle(border), SECTOR_COUNT - k);
    }
    // PI is the start of sector 4, whichever side it comes from
    assert_eq!(sector_for_angle(PI), 4);
    assert_eq!(sector_for_angle(-PI), 4);
}

#[test]
fn test_just_below_a_border_stays_in_previous_sector() {
    let eps = 1e-6;
    assert_eq!(sector_for_angle(FRAC_PI_4 - eps), 0);
    assert_eq!(sector_for_angle(FRAC_PI_2 - eps), 1);
    assert_eq!(sector_for_angle(-eps), 7);
}

#[test]
fn test_sector_borders_are_evenly_spaced() {
    let borders = sector_borders();
    assert_eq!(borders.len(), SECTOR_COUNT);
    assert_eq!(borders[0], 0.0);
    for pair in borders.windows(2) {
        assert!((pair[1] - pair[0] - SECTOR_ANGLE).abs() < 1e-12);
    }
}

#[test]
fn test_sector_center_wraps_indices() {
    assert_eq!(sector_center_angle(8), sector_center_angle(0));
    assert_eq!(sector_center_angle(11), sector_center_angle(3));
}

#[test]
fn test_sector_for_offset_matches_angle() {
    assert_eq!(sector_for_offset(1.0, 0.0), sector_for_angle(0.0));
    assert_eq!(sector_for_offset(0.0, 1.0), sector_for_angle(FRAC_PI_2));
    assert_eq!(sector_for_offset(0.0, 1.0), 2);
    assert_eq!(sector_for_offset(-1.0, 0.0), 4);
    assert_eq!(sector_for_offset(0.0, -1.0), 6);
    // screen coordinates: a tap up and to the right is in the last sector
    assert_eq!(sector_for_offset(1.0, -0.1), 7);
}

#[test]
fn test_degenerate_input_resolves_to_sector_zero() {
    assert_eq!(sector_for_offset(0.0, 0.0), 0);
    assert_eq!(sector_for_offset(-0.0, -0.0), 0);
    assert_eq!(sector_for_angle(f64::NAN), 0);
    assert_eq!(sector_for_angle(f64::INFINITY), 0);
    assert_eq!(sector_for_offset(f64::NAN, 1.0), 0);
}

#[test]
fn test_rings_split_radius_in_equal_widths() {
    let r = 90.0;
    assert_eq!(ring_for_distance(0.0, r), 0);
    assert_eq!(ring_for_distance(29.9, r), 0);
    assert_eq!(ring_for_distance(30.1, r), 1);
    assert_eq!(ring_for_distance(59.9, r), 1);
    assert_eq!(ring_for_distance(60.1, r), 2);
    assert_eq!(ring_for_distance(90.0, r), 2);
}

#[test]
fn test_ring_outer_edge_is_inclusive() {
    let r = 150.0;
    for ring in 0..RING_COUNT {
        assert_eq!(ring_for_distance(ring_outer_edge(ring, r), r), ring);
    }
    assert_eq!(ring_inner_edge(0, r), 0.0);
    assert_eq!(ring_inner_edge(1, r), ring_outer_edge(0, r));
    assert_eq!(ring_outer_edge(RING_COUNT - 1, r), r);
}

#[test]
fn test_taps_past_the_rim_stay_in_outer_ring() {
    assert_eq!(ring_for_distance(1000.0, 150.0), RING_COUNT - 1);
    assert_eq!(ring_for_offset(300.0, 400.0, 150.0), RING_COUNT - 1);
}

#[test]
fn test_degenerate_ring_input() {
    assert_eq!(ring_for_distance(f64::NAN, 100.0), 0);
    assert_eq!(ring_for_distance(-5.0, 100.0), 0);
    assert_eq!(ring_for_distance(10.0, 0.0), 0);
    assert_eq!(ring_for_distance(10.0, f64::NAN), 0);
}

#[test]
fn test_layout_locate() {
    let layout = WheelLayout::new(150.0);
    assert_eq!(
        layout.locate(Offset::new(10.0, 0.0)),
        WheelPoint { sector: 0, ring: 0 }
    );
    assert_eq!(
        layout.locate(Offset::new(0.0, 75.0)),
        WheelPoint { sector: 2, ring: 1 }
    );
    assert_eq!(
        layout.locate(Offset::new(-140.0, 0.0)),
        WheelPoint { sector: 4, ring: 2 }
    );
    assert_eq!(Offset::new(3.0, 4.0).distance(), 5.0);
}
