use super::*;

#[test]
fn confidence_segments_fill_from_the_left() {
    assert_eq!(confidence_segments(4), vec![true, true, true, true, false]);
    assert_eq!(confidence_segments(2), vec![true, true, false, false, false]);
}

#[test]
fn confidence_segments_cover_the_whole_scale() {
    assert_eq!(confidence_segments(0).len(), usize::from(CONFIDENCE_SCALE));
    assert!(confidence_segments(0).iter().all(|filled| !filled));
    assert!(confidence_segments(CONFIDENCE_SCALE).iter().all(|filled| *filled));
}

#[test]
fn confidence_above_scale_saturates() {
    assert!(confidence_segments(9).iter().all(|filled| *filled));
}
