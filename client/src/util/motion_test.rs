use super::*;

#[test]
fn page_variant_matches_route_transition_timings() {
    let v = page_variant();
    assert_eq!(v.initial.y, 8.0);
    assert_eq!(v.initial.opacity, 0.0);
    assert_eq!(v.animate, MotionFrame::VISIBLE);
    assert_eq!(v.exit.map(|f| f.y), Some(-8.0));
    assert_eq!(v.enter, Timing::new(400, Easing::Expo));
    assert_eq!(v.leave.duration_ms, 300);
}

#[test]
fn section_variants_all_settle_fully_visible() {
    for kind in [
        SectionVariant::Fade,
        SectionVariant::SlideUp,
        SectionVariant::SlideLeft,
        SectionVariant::SlideRight,
        SectionVariant::Scale,
        SectionVariant::Pop,
        SectionVariant::Text,
    ] {
        let v = section_variant(kind);
        assert_eq!(v.animate, MotionFrame::VISIBLE, "{kind:?}");
        assert_eq!(v.initial.opacity, 0.0, "{kind:?}");
        assert!(v.exit.is_none(), "{kind:?}");
    }
}

#[test]
fn section_variant_offsets_by_kind() {
    assert_eq!(section_variant(SectionVariant::SlideUp).initial.y, 20.0);
    assert_eq!(section_variant(SectionVariant::Text).initial.y, 10.0);
    assert_eq!(section_variant(SectionVariant::SlideLeft).initial.x, -40.0);
    assert_eq!(section_variant(SectionVariant::Scale).initial.scale, 0.95);
    assert_eq!(section_variant(SectionVariant::Scale).enter.duration_ms, 700);
    assert_eq!(SectionVariant::default(), SectionVariant::SlideUp);
}

#[test]
fn with_delay_only_shifts_enter_timing() {
    let v = section_variant(SectionVariant::Text).with_delay(200);
    assert_eq!(v.enter.delay_ms, 200);
    assert_eq!(v.enter.total_ms(), 700);
    assert_eq!(v.leave.delay_ms, 0);
}

#[test]
fn frame_css_renders_transform() {
    let css = MotionFrame::hidden().offset_y(20.0).scaled(0.95).to_css();
    assert_eq!(css, "opacity:0;transform:translate3d(0px,20px,0) scale(0.95) rotate(0deg);");
}

#[test]
fn timing_css_includes_easing_and_delay() {
    let css = Timing::new(400, Easing::Expo).with_delay(100).to_css();
    assert_eq!(
        css,
        "transition:opacity 400ms cubic-bezier(0.22, 1, 0.36, 1) 100ms,transform 400ms cubic-bezier(0.22, 1, 0.36, 1) 100ms;"
    );
}

#[test]
fn exit_style_defaults_to_fade_without_exit_frame() {
    let v = section_variant(SectionVariant::Fade);
    assert!(v.exit_style().starts_with("opacity:0;"));
}

#[test]
fn loader_fades_out_over_300ms() {
    let v = loader_variant();
    assert_eq!(v.initial, MotionFrame::VISIBLE);
    assert_eq!(v.exit.map(|f| f.opacity), Some(0.0));
    assert_eq!(v.leave, Timing::new(300, Easing::Expo));
}

#[test]
fn theme_icons_spin_from_opposite_sides() {
    let moon = theme_icon_variant(true);
    let sun = theme_icon_variant(false);
    assert_eq!(moon.initial.rotate, -90.0);
    assert_eq!(sun.initial.rotate, 90.0);
    assert_eq!(moon.exit.map(|f| f.rotate), Some(90.0));
    assert_eq!(moon.initial.scale, 0.0);
}
