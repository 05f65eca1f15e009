use super::*;

#[test]
fn progress_is_fraction_of_scrollable_distance() {
    assert!((scroll_progress(500.0, 2000.0, 1000.0) - 0.5).abs() < f64::EPSILON);
    assert!((scroll_progress(0.0, 2000.0, 1000.0)).abs() < f64::EPSILON);
}

#[test]
fn progress_clamps_overscroll() {
    assert!((scroll_progress(1200.0, 2000.0, 1000.0) - 1.0).abs() < f64::EPSILON);
    assert!((scroll_progress(-40.0, 2000.0, 1000.0)).abs() < f64::EPSILON);
}

#[test]
fn short_documents_report_zero() {
    assert!((scroll_progress(0.0, 600.0, 900.0)).abs() < f64::EPSILON);
    assert!((scroll_progress(10.0, 900.0, 900.0)).abs() < f64::EPSILON);
}
