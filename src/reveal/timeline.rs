use std::rc::Rc;
use std::time::Duration;

use yew::Reducible;

use super::easing::CubicBezier;
use super::geometry::RootMargin;
use crate::config;

/// One-way latch: a wrapper starts `NotTriggered` and is `Triggered` at most once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealState {
    NotTriggered,
    /// `at` is the timestamp (ms) of the first visibility report.
    Triggered { at: f64 },
}

/// Rendered visual properties of a reveal wrapper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub opacity: f64,
    /// Downward offset in logical pixels.
    pub offset_y: f64,
}

impl Visual {
    pub const HIDDEN: Visual = Visual { opacity: 0.0, offset_y: 50.0 };
    pub const SHOWN: Visual = Visual { opacity: 1.0, offset_y: 0.0 };

    fn lerp(from: Visual, to: Visual, progress: f64) -> Visual {
        Visual {
            opacity: from.opacity + (to.opacity - from.opacity) * progress,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * progress,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px);",
            self.opacity, self.offset_y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub margin: RootMargin,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin: RootMargin::vertical(config::REVEAL_MARGIN_PX),
            delay: Duration::ZERO,
            duration: config::REVEAL_DURATION,
            easing: CubicBezier::EASE,
        }
    }
}

impl RevealConfig {
    pub fn with_margin(mut self, margin: RootMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Negative or non-finite delays collapse to zero.
    pub fn with_delay_secs(mut self, secs: f64) -> Self {
        self.delay = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        self
    }
}

/// Latch plus the time-based interpolation it drives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTimeline {
    config: RevealConfig,
    state: RevealState,
    visual: Visual,
}

impl RevealTimeline {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::NotTriggered,
            visual: Visual::HIDDEN,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Feeds a visibility report. Returns true only for the report that sets the latch.
    pub fn observe(&mut self, visible: bool, now: f64) -> bool {
        match self.state {
            RevealState::NotTriggered if visible => {
                self.state = RevealState::Triggered { at: now };
                true
            }
            _ => false,
        }
    }

    /// Timestamp at which interpolation begins.
    pub fn starts_at(&self) -> Option<f64> {
        match self.state {
            RevealState::Triggered { at } => Some(at + millis(self.config.delay)),
            RevealState::NotTriggered => None,
        }
    }

    /// Milliseconds until frames are needed: `None` before the latch is set and
    /// once the block has settled, zero while the interpolation is running.
    pub fn frames_due_in(&self, now: f64) -> Option<f64> {
        if self.is_settled() {
            return None;
        }
        self.starts_at().map(|start| (start - now).max(0.0))
    }

    pub fn visual_at(&self, now: f64) -> Visual {
        let Some(start) = self.starts_at() else {
            return Visual::HIDDEN;
        };
        if now < start {
            return Visual::HIDDEN;
        }
        let duration = millis(self.config.duration);
        if duration <= 0.0 || now >= start + duration {
            return Visual::SHOWN;
        }
        let progress = self.config.easing.sample((now - start) / duration);
        Visual::lerp(Visual::HIDDEN, Visual::SHOWN, progress)
    }

    pub fn advance(&mut self, now: f64) {
        self.visual = self.visual_at(now);
    }

    pub fn is_settled(&self) -> bool {
        self.visual == Visual::SHOWN
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

pub enum RevealAction {
    Visibility { visible: bool, at: f64 },
    Frame { at: f64 },
}

impl Reducible for RevealTimeline {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            RevealAction::Visibility { visible, at } => {
                next.observe(visible, at);
            }
            RevealAction::Frame { at } => next.advance(at),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(delay_secs: f64) -> RevealTimeline {
        RevealTimeline::new(RevealConfig::default().with_delay_secs(delay_secs))
    }

    #[test]
    fn starts_hidden_for_any_delay() {
        for delay in [0.0, 0.1, 0.3, 0.5, 2.0] {
            let tl = timeline(delay);
            assert_eq!(tl.state(), RevealState::NotTriggered);
            assert_eq!(tl.visual(), Visual::HIDDEN);
            assert_eq!(tl.visual_at(0.0), Visual::HIDDEN);
            assert_eq!(tl.visual_at(1e9), Visual::HIDDEN, "never triggered stays hidden");
        }
    }

    #[test]
    fn only_first_visible_report_latches() {
        let mut tl = timeline(0.0);
        assert!(!tl.observe(false, 10.0));
        assert!(tl.observe(true, 20.0));
        for (i, visible) in [false, true, false, true, true].into_iter().enumerate() {
            assert!(!tl.observe(visible, 30.0 + i as f64));
        }
        assert_eq!(tl.state(), RevealState::Triggered { at: 20.0 });
    }

    #[test]
    fn latch_never_reverts() {
        let mut tl = timeline(0.0);
        tl.observe(true, 0.0);
        tl.advance(2000.0);
        assert!(tl.is_settled());
        for visible in [false, false, true, false] {
            tl.observe(visible, 3000.0);
            tl.advance(3000.0);
            assert!(matches!(tl.state(), RevealState::Triggered { .. }));
            assert_eq!(tl.visual(), Visual::SHOWN);
        }
    }

    #[test]
    fn interpolation_waits_for_delay() {
        let mut tl = timeline(0.3);
        tl.observe(true, 1000.0);
        let start = tl.starts_at().unwrap();
        assert!((start - 1300.0).abs() < 1e-6);
        assert_eq!(tl.visual_at(1000.0), Visual::HIDDEN);
        assert_eq!(tl.visual_at(1299.0), Visual::HIDDEN);

        let moving = tl.visual_at(1500.0);
        assert!(moving.opacity > 0.0 && moving.opacity < 1.0);
        assert!(moving.offset_y > 0.0 && moving.offset_y < 50.0);
    }

    #[test]
    fn interpolation_completes_after_duration() {
        let mut tl = timeline(0.3);
        tl.observe(true, 1000.0);
        let end = tl.starts_at().unwrap() + 800.0;
        assert!((end - 2100.0).abs() < 1e-6);
        assert_eq!(tl.visual_at(end), Visual::SHOWN);
        assert_ne!(tl.visual_at(end - 50.0), Visual::SHOWN);
    }

    #[test]
    fn frames_are_due_only_between_trigger_and_settle() {
        let mut tl = timeline(0.3);
        assert_eq!(tl.frames_due_in(0.0), None);

        tl.observe(true, 1000.0);
        let wait = tl.frames_due_in(1100.0).unwrap();
        assert!((wait - 200.0).abs() < 1e-6);
        assert_eq!(tl.frames_due_in(1500.0), Some(0.0));

        tl.advance(1600.0);
        assert_eq!(tl.frames_due_in(1600.0), Some(0.0));
        tl.advance(2100.0);
        assert_eq!(tl.frames_due_in(2100.0), None);
        assert_eq!(tl.frames_due_in(9000.0), None);
    }

    #[test]
    fn negative_or_nan_delay_is_zero() {
        assert_eq!(timeline(-1.0).config().delay, Duration::ZERO);
        assert_eq!(timeline(f64::NAN).config().delay, Duration::ZERO);
        assert_eq!(timeline(0.25).config().delay, Duration::from_millis(250));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let tl = Rc::new(timeline(0.5));
        let same = tl.clone().reduce(RevealAction::Visibility { visible: false, at: 5.0 });
        assert!(Rc::ptr_eq(&tl, &same));

        let triggered = tl.reduce(RevealAction::Visibility { visible: true, at: 5.0 });
        let waiting = triggered.clone().reduce(RevealAction::Frame { at: 100.0 });
        assert!(Rc::ptr_eq(&triggered, &waiting), "frames during the delay do not re-render");

        let moving = waiting.reduce(RevealAction::Frame { at: 700.0 });
        assert!(moving.visual().opacity > 0.0);
        let done = moving.reduce(RevealAction::Frame { at: 1400.0 });
        assert!(done.is_settled());
    }

    #[test]
    fn style_renders_visual() {
        assert_eq!(Visual::HIDDEN.style(), "opacity: 0.000; transform: translateY(50.00px);");
        assert_eq!(Visual::SHOWN.style(), "opacity: 1.000; transform: translateY(0.00px);");
    }
}
