//! Visibility-triggered count-up counter.
//!
//! A counter sits idle at zero until its element first becomes visible,
//! then runs once from zero to its target with an ease-out curve. Later
//! visibility changes are ignored.

use std::time::Duration;

use tracing::{debug, info};

use marquee_types::Statistic;
use marquee_types::ui::{EffectTimer, ease_out_cubic};

use crate::visibility::{ElementId, Subscription, VisibilitySource};

pub const DEFAULT_COUNTER_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    pub duration: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_COUNTER_DURATION,
        }
    }
}

/// Value of a count-up run at `progress` (0.0 to 1.0).
///
/// Exactly `target` once progress reaches 1.0.
#[must_use]
pub fn count_up_value(target: u64, progress: f32) -> f64 {
    if progress >= 1.0 {
        return target as f64;
    }
    target as f64 * f64::from(ease_out_cubic(progress))
}

#[derive(Debug, Clone)]
enum CounterPhase {
    Idle,
    Running(EffectTimer),
    Finished,
}

#[derive(Debug)]
pub struct Counter {
    target: u64,
    prefix: String,
    suffix: String,
    duration: Duration,
    phase: CounterPhase,
    value: f64,
    subscription: Option<Subscription>,
    mounted: bool,
}

impl Counter {
    /// A counter with no visibility subscription; drive it with [`Counter::on_intersect`].
    #[must_use]
    pub fn new(
        target: u64,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        config: CounterConfig,
    ) -> Self {
        Self {
            target,
            prefix: prefix.into(),
            suffix: suffix.into(),
            duration: config.duration,
            phase: CounterPhase::Idle,
            value: 0.0,
            subscription: None,
            mounted: true,
        }
    }

    #[must_use]
    pub fn for_statistic(statistic: &Statistic, config: CounterConfig) -> Self {
        Self::new(
            statistic.value,
            statistic.prefix.clone(),
            statistic.suffix.clone(),
            config,
        )
    }

    /// Create a counter and subscribe it to `element` on `source`.
    pub fn mount(
        statistic: &Statistic,
        config: CounterConfig,
        source: &mut dyn VisibilitySource,
        element: ElementId,
    ) -> Self {
        let mut counter = Self::for_statistic(statistic, config);
        counter.observe(source, element);
        counter
    }

    /// Attach to a visibility source, replacing any previous subscription.
    /// Does nothing once unmounted.
    pub fn observe(&mut self, source: &mut dyn VisibilitySource, element: ElementId) {
        if !self.mounted {
            return;
        }
        self.release_observer();
        self.subscription = Some(source.subscribe(element));
    }

    /// Visibility signal. Starts the run on the first `true`; everything
    /// after that is ignored, as is anything after unmount. Returns whether
    /// this call triggered the run.
    pub fn on_intersect(&mut self, is_intersecting: bool) -> bool {
        if !self.mounted || !is_intersecting || self.has_triggered() {
            return false;
        }

        info!(goal = self.target, "Counter triggered");
        self.phase = if self.duration.is_zero() {
            self.value = self.target as f64;
            CounterPhase::Finished
        } else {
            CounterPhase::Running(EffectTimer::new(self.duration))
        };
        true
    }

    /// Drain pending visibility events from the subscription.
    pub fn poll_visibility(&mut self) {
        while let Some(visible) = self.subscription.as_mut().and_then(Subscription::try_next) {
            self.on_intersect(visible);
        }
    }

    /// Advance the run by one frame. Returns the display text when it changed.
    pub fn advance(&mut self, delta: Duration) -> Option<String> {
        if !self.mounted {
            return None;
        }
        let CounterPhase::Running(timer) = &mut self.phase else {
            return None;
        };

        timer.advance(delta);
        let finished = timer.is_finished();
        let next = count_up_value(self.target, timer.progress());
        if finished {
            self.phase = CounterPhase::Finished;
            debug!(goal = self.target, "Counter finished");
        }

        let changed = finished || next.round() != self.value.round();
        self.value = next;
        changed.then(|| self.display())
    }

    /// Poll visibility, then advance.
    pub fn tick(&mut self, delta: Duration) -> Option<String> {
        self.poll_visibility();
        self.advance(delta)
    }

    /// `prefix + round(value) + suffix`, exactly `prefix + target + suffix` once finished.
    #[must_use]
    pub fn display(&self) -> String {
        let shown = if self.is_finished() {
            self.target
        } else {
            self.value.round() as u64
        };
        format!("{}{}{}", self.prefix, shown, self.suffix)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn has_triggered(&self) -> bool {
        !matches!(self.phase, CounterPhase::Idle)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, CounterPhase::Running(_))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, CounterPhase::Finished)
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    fn release_observer(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            debug!(element = subscription.element().raw(), "Counter observer released");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Detach from the visibility source and freeze the counter where it
    /// stands. Safe to repeat.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.release_observer();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Counter, CounterConfig, count_up_value};
    use crate::visibility::{ElementId, RowSpan, ViewportTracker};

    fn counter(target: u64, suffix: &str) -> Counter {
        Counter::new(target, "", suffix, CounterConfig::default())
    }

    fn run_to_end(counter: &mut Counter) -> Vec<f64> {
        let mut samples = vec![counter.value()];
        for _ in 0..200 {
            counter.advance(Duration::from_millis(16));
            samples.push(counter.value());
        }
        samples
    }

    #[test]
    fn idle_until_visible() {
        let mut counter = counter(50, "ms");
        assert!(counter.advance(Duration::from_secs(5)).is_none());
        assert_eq!(counter.display(), "0ms");
        assert!(!counter.on_intersect(false));
        assert!(!counter.has_triggered());
    }

    #[test]
    fn reaches_target_exactly() {
        let mut counter = counter(10_000, "+");
        assert!(counter.on_intersect(true));
        run_to_end(&mut counter);
        assert!(counter.is_finished());
        assert!((counter.value() - 10_000.0).abs() < f64::EPSILON);
        assert_eq!(counter.display(), "10000+");
    }

    #[test]
    fn uptime_statistic_displays_decimal_suffix() {
        let mut counter = counter(99, ".9%");
        counter.on_intersect(true);
        run_to_end(&mut counter);
        assert_eq!(counter.display(), "99.9%");
    }

    #[test]
    fn prefix_wraps_number() {
        let mut counter = Counter::new(5, "$", "M", CounterConfig::default());
        counter.on_intersect(true);
        counter.advance(Duration::from_secs(3));
        assert_eq!(counter.display(), "$5M");
    }

    #[test]
    fn value_never_decreases() {
        let mut counter = counter(180, "+");
        counter.on_intersect(true);
        let samples = run_to_end(&mut counter);
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn curve_is_front_loaded() {
        assert!(count_up_value(100, 0.25) > 50.0);
        assert!((count_up_value(100, 1.0) - 100.0).abs() < f64::EPSILON);
        assert!(count_up_value(100, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn retrigger_does_not_restart() {
        let mut counter = counter(1000, "");
        counter.on_intersect(true);
        counter.advance(Duration::from_millis(1000));
        let mid = counter.value();

        assert!(!counter.on_intersect(false));
        assert!(!counter.on_intersect(true));
        assert!((counter.value() - mid).abs() < f64::EPSILON);

        run_to_end(&mut counter);
        assert!(!counter.on_intersect(true));
        assert_eq!(counter.display(), "1000");
    }

    #[test]
    fn zero_target_still_triggers() {
        let mut counter = counter(0, "%");
        assert!(counter.on_intersect(true));
        assert!(counter.has_triggered());
        run_to_end(&mut counter);
        assert_eq!(counter.display(), "0%");
    }

    #[test]
    fn zero_duration_finishes_on_trigger() {
        let config = CounterConfig {
            duration: Duration::ZERO,
        };
        let mut counter = Counter::new(42, "", "", config);
        counter.on_intersect(true);
        assert!(counter.is_finished());
        assert_eq!(counter.display(), "42");
    }

    #[test]
    fn advance_reports_only_changes() {
        let mut counter = counter(3, "");
        counter.on_intersect(true);
        let emitted: Vec<String> = (0..200)
            .filter_map(|_| counter.advance(Duration::from_millis(16)))
            .collect();
        assert_eq!(emitted.last().map(String::as_str), Some("3"));
        assert!(emitted.len() <= 4);
    }

    #[test]
    fn mounted_counter_follows_viewport() {
        let element = ElementId::new(1);
        let mut tracker = ViewportTracker::new();
        let stat = marquee_types::Statistic {
            value: 50,
            label: "Response Time".to_string(),
            prefix: String::new(),
            suffix: "ms".to_string(),
        };
        let mut counter = Counter::mount(&stat, CounterConfig::default(), &mut tracker, element);
        tracker.place(element, RowSpan::new(100, 4));

        tracker.set_viewport(RowSpan::new(0, 30));
        tracker.refresh();
        counter.tick(Duration::from_millis(16));
        assert!(!counter.has_triggered());

        tracker.set_viewport(RowSpan::new(90, 30));
        tracker.refresh();
        counter.tick(Duration::from_millis(16));
        assert!(counter.is_running());
    }

    #[test]
    fn unmount_releases_subscription_once() {
        let element = ElementId::new(2);
        let mut tracker = ViewportTracker::new();
        let mut counter = Counter::new(10, "", "", CounterConfig::default());
        counter.observe(&mut tracker, element);
        assert!(counter.is_observing());

        counter.unmount();
        counter.unmount();
        assert!(!counter.is_observing());
        assert_eq!(tracker.observer_count(), 0);
    }

    #[test]
    fn unmounted_counter_ignores_visibility() {
        let mut counter = Counter::new(10, "", "", CounterConfig::default());
        counter.unmount();

        assert!(!counter.on_intersect(true));
        assert!(counter.advance(Duration::from_secs(3)).is_none());
        assert!(!counter.has_triggered());
        assert_eq!(counter.display(), "0");

        let mut tracker = ViewportTracker::new();
        counter.observe(&mut tracker, ElementId::new(5));
        assert!(!counter.is_observing());
    }

    #[test]
    fn unmount_mid_run_freezes_value() {
        let mut counter = counter(1000, "");
        counter.on_intersect(true);
        counter.advance(Duration::from_millis(500));
        let frozen = counter.value();

        counter.unmount();
        assert!(counter.advance(Duration::from_secs(5)).is_none());
        assert!((counter.value() - frozen).abs() < f64::EPSILON);
        assert!(!counter.is_finished());
    }

    #[test]
    fn observe_again_replaces_subscription() {
        let mut tracker = ViewportTracker::new();
        let mut counter = Counter::new(10, "", "", CounterConfig::default());
        counter.observe(&mut tracker, ElementId::new(3));
        counter.observe(&mut tracker, ElementId::new(4));
        assert_eq!(tracker.observer_count(), 1);
    }
}
