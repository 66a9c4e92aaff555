use grid_isocontours::{
    classify, isocontour_cell, segments_for_case, CellResult, LineSegment, SegmentDirection,
};

/// Shorthand for building an expected segment
fn seg(direction: SegmentDirection, d0: f64, d1: f64) -> LineSegment {
    LineSegment::new(direction, d0, d1)
}

#[test]
fn test_case_0_no_segments() {
    assert!(isocontour_cell(1.0, 0.0, 0.0, 0.0, 0.0).is_empty());
}

#[test]
fn test_case_15_no_segments() {
    assert!(isocontour_cell(0.0, 1.0, 1.0, 1.0, 1.0).is_empty());
}

#[test]
fn test_case_1_south_to_east() {
    let cell = isocontour_cell(4.0, 1.0, 2.0, 3.0, 5.0);

    assert_eq!(cell.as_slice(), &[seg(SegmentDirection::SouthToEast, 0.5, 2.0 / 3.0)]);
}

#[test]
fn test_case_2_west_to_south() {
    let cell = isocontour_cell(4.0, 1.0, 2.0, 5.0, 3.0);

    assert_eq!(cell.as_slice(), &[seg(SegmentDirection::WestToSouth, 0.75, 0.5)]);
}

#[test]
fn test_case_3_west_to_east() {
    let cell = isocontour_cell(4.0, 1.0, 2.0, 5.0, 5.0);

    assert_eq!(cell.as_slice(), &[seg(SegmentDirection::WestToEast, 0.75, 2.0 / 3.0)]);
}

#[test]
fn test_case_4_north_to_east() {
    let cell = isocontour_cell(4.0, 1.0, 5.0, 2.0, 3.0);

    assert_eq!(cell.as_slice(), &[seg(SegmentDirection::NorthToEast, 0.75, 0.5)]);
}

#[test]
fn test_case_5_north_to_south() {
    let cell = isocontour_cell(4.0, 1.0, 5.0, 2.0, 5.0);

    assert_eq!(cell.as_slice(), &[seg(SegmentDirection::NorthToSouth, 0.75, 2.0 / 3.0)]);
}

#[test]
fn test_case_6_saddle() {
    let cell = isocontour_cell(4.0, 1.0, 5.0, 5.0, 2.0);

    assert_eq!(
        cell.as_slice(),
        &[
            seg(SegmentDirection::WestToSouth, 0.75, 1.0 / 3.0),
            seg(SegmentDirection::NorthToEast, 0.75, 1.0 / 3.0),
        ]
    );
}

#[test]
fn test_case_7_west_to_north() {
    let cell = isocontour_cell(4.0, 1.0, 5.0, 5.0, 5.0);

    assert_eq!(cell.as_slice(), &[seg(SegmentDirection::WestToNorth, 0.75, 0.75)]);
}

#[test]
fn test_case_8_reuses_case_7() {
    // NW-only and all-but-NW share the same boundary
    let cell = isocontour_cell(4.0, 5.0, 1.0, 2.0, 3.0);

    assert_eq!(cell.len(), 1);
    assert_eq!(cell[0].direction, SegmentDirection::WestToNorth);
    assert_eq!(cell[0].d0, 1.0 / 3.0);
    assert_eq!(cell[0].d1, 0.25);
}

#[test]
fn test_case_9_saddle_reuses_case_6() {
    // NW+SE saddle resolves to the same fixed diagonal as NE+SW
    let cell = isocontour_cell(5.0, 8.0, 4.0, 2.0, 6.0);

    assert_eq!(
        cell.as_slice(),
        &[
            seg(SegmentDirection::WestToSouth, 0.5, 0.75),
            seg(SegmentDirection::NorthToEast, 0.75, 0.5),
        ]
    );
}

#[test]
fn test_complement_pairs_produce_identical_segments() {
    // 1<->14, 2<->13, 3<->12, 4<->11, 5<->10, 7<->8, and the saddles
    // 6<->9: identical direction and fractions for identical corner
    // arguments, because complementary regions share one boundary
    let (isovalue, nw, ne, sw, se) = (5.0, 2.0, 7.0, 8.0, 3.0);

    for case in 0..=7u8 {
        let direct = segments_for_case(case, isovalue, nw, ne, sw, se);
        let complement = segments_for_case(15 - case, isovalue, nw, ne, sw, se);

        assert_eq!(direct, complement, "case {case} vs case {}", 15 - case);
    }
}

#[test]
fn test_reflected_corners_give_same_fractions() {
    // Reflecting corner values through the isovalue (v -> 2*iso - v) flips
    // every classification bit but leaves each crossing fraction unchanged
    let isovalue = 4.0;
    let (nw, ne, sw, se) = (1.0, 2.0, 3.0, 5.0);
    let (rnw, rne, rsw, rse) = (7.0, 6.0, 5.0, 3.0);

    assert_eq!(classify(isovalue, nw, ne, sw, se), 1);
    assert_eq!(classify(isovalue, rnw, rne, rsw, rse), 14);

    let original = isocontour_cell(isovalue, nw, ne, sw, se);
    let reflected = isocontour_cell(isovalue, rnw, rne, rsw, rse);

    assert_eq!(original, reflected);
}

#[test]
fn test_dispatch_matches_classification() {
    // isocontour_cell is exactly classify + segments_for_case
    let samples = [
        (4.0, 1.0, 2.0, 3.0, 5.0),
        (5.0, 8.0, 4.0, 2.0, 6.0),
        (0.5, 0.1, 0.9, 0.9, 0.1),
        (10.0, 10.0, 10.0, 10.0, 10.0),
    ];

    for (isovalue, nw, ne, sw, se) in samples {
        let case = classify(isovalue, nw, ne, sw, se);
        let expected: CellResult = segments_for_case(case, isovalue, nw, ne, sw, se);

        assert_eq!(isocontour_cell(isovalue, nw, ne, sw, se), expected);
    }
}
