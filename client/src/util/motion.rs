//! Motion variant table for page, section, loader, and icon transitions.
//!
//! Each variant is plain data: a resting `initial` frame, the `animate`
//! frame it moves to, an optional `exit` frame, and the timings for each
//! direction. Components turn frames into inline CSS and let the browser's
//! transition engine interpolate between them, so nothing here touches the
//! DOM and every value can be asserted directly.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// A single style keyframe. Offsets are in px, rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl MotionFrame {
    /// Fully visible at rest.
    pub const VISIBLE: Self = Self { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, rotate: 0.0 };

    #[must_use]
    pub const fn hidden() -> Self {
        Self { opacity: 0.0, ..Self::VISIBLE }
    }

    #[must_use]
    pub const fn offset_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    #[must_use]
    pub const fn offset_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    #[must_use]
    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    #[must_use]
    pub const fn rotated(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    /// Inline `opacity` + `transform` declarations.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "opacity:{};transform:translate3d({}px,{}px,0) scale({}) rotate({}deg);",
            fmt_num(self.opacity),
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.scale),
            fmt_num(self.rotate),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Long-tail deceleration used for page and chrome transitions.
    Expo,
}

impl Easing {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Expo => "cubic-bezier(0.22, 1, 0.36, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Timing {
    #[must_use]
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self { duration_ms, delay_ms: 0, easing }
    }

    #[must_use]
    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Total time until the transition settles.
    #[must_use]
    pub const fn total_ms(&self) -> u32 {
        self.duration_ms + self.delay_ms
    }

    /// Inline `transition` declaration covering opacity and transform.
    #[must_use]
    pub fn to_css(&self) -> String {
        let ease = self.easing.css();
        format!(
            "transition:opacity {d}ms {ease} {delay}ms,transform {d}ms {ease} {delay}ms;",
            d = self.duration_ms,
            delay = self.delay_ms,
        )
    }
}

/// Named states plus timings for one animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub initial: MotionFrame,
    pub animate: MotionFrame,
    pub exit: Option<MotionFrame>,
    pub enter: Timing,
    pub leave: Timing,
}

impl Variant {
    #[must_use]
    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { enter: self.enter.with_delay(delay_ms), ..self }
    }

    /// Style for the element before it has been revealed.
    #[must_use]
    pub fn initial_style(&self) -> String {
        self.initial.to_css()
    }

    /// Style for the revealed element, including the entering transition.
    #[must_use]
    pub fn animate_style(&self) -> String {
        format!("{}{}", self.animate.to_css(), self.enter.to_css())
    }

    /// Style for the leaving element. Variants without an exit frame fade out.
    #[must_use]
    pub fn exit_style(&self) -> String {
        let frame = self.exit.unwrap_or_else(MotionFrame::hidden);
        format!("{}{}", frame.to_css(), self.leave.to_css())
    }
}

/// Scroll-reveal presets for page sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionVariant {
    Fade,
    #[default]
    SlideUp,
    SlideLeft,
    SlideRight,
    Scale,
    Pop,
    Text,
}

/// Whole-page enter/exit on route change.
#[must_use]
pub const fn page_variant() -> Variant {
    Variant {
        initial: MotionFrame::hidden().offset_y(8.0),
        animate: MotionFrame::VISIBLE,
        exit: Some(MotionFrame::hidden().offset_y(-8.0)),
        enter: Timing::new(400, Easing::Expo),
        leave: Timing::new(300, Easing::Expo),
    }
}

#[must_use]
pub const fn section_variant(kind: SectionVariant) -> Variant {
    let (initial, enter) = match kind {
        SectionVariant::Fade => (MotionFrame::hidden(), Timing::new(600, Easing::EaseOut)),
        SectionVariant::SlideUp => (MotionFrame::hidden().offset_y(20.0), Timing::new(600, Easing::EaseOut)),
        SectionVariant::SlideLeft => (MotionFrame::hidden().offset_x(-40.0), Timing::new(600, Easing::EaseOut)),
        SectionVariant::SlideRight => (MotionFrame::hidden().offset_x(40.0), Timing::new(600, Easing::EaseOut)),
        SectionVariant::Scale => (MotionFrame::hidden().scaled(0.95), Timing::new(700, Easing::EaseOut)),
        SectionVariant::Pop => (MotionFrame::hidden().scaled(0.8), Timing::new(500, Easing::Expo)),
        SectionVariant::Text => (MotionFrame::hidden().offset_y(10.0), Timing::new(500, Easing::EaseOut)),
    };
    Variant { initial, animate: MotionFrame::VISIBLE, exit: None, enter, leave: Timing::new(0, Easing::Linear) }
}

/// Full-screen loading overlay: shown immediately, fades out on dismissal.
#[must_use]
pub const fn loader_variant() -> Variant {
    Variant {
        initial: MotionFrame::VISIBLE,
        animate: MotionFrame::VISIBLE,
        exit: Some(MotionFrame::hidden()),
        enter: Timing::new(0, Easing::Linear),
        leave: Timing::new(300, Easing::Expo),
    }
}

/// Sun/moon icon swap inside the theme toggle. Icons spin in from opposite
/// sides depending on which one is arriving.
#[must_use]
pub const fn theme_icon_variant(dark: bool) -> Variant {
    let spin = if dark { -90.0 } else { 90.0 };
    Variant {
        initial: MotionFrame::hidden().scaled(0.0).rotated(spin),
        animate: MotionFrame::VISIBLE,
        exit: Some(MotionFrame::hidden().scaled(0.0).rotated(-spin)),
        enter: Timing::new(300, Easing::Expo),
        leave: Timing::new(300, Easing::Expo),
    }
}

fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').to_owned()
    }
}
