//! Count-up counter properties, driven through a viewport tracker.

use std::time::Duration;

use marquee_engine::{
    Counter, CounterConfig, ElementId, RowSpan, Subscription, ViewportTracker, VisibilitySource,
};
use marquee_types::Statistic;

const FRAME: Duration = Duration::from_millis(16);

fn statistic(value: u64, suffix: &str) -> Statistic {
    Statistic {
        value,
        label: "Label".to_string(),
        prefix: String::new(),
        suffix: suffix.to_string(),
    }
}

/// A visibility source driven by hand, standing in for a real viewport.
#[derive(Default)]
struct ManualSource {
    senders: Vec<(ElementId, tokio::sync::mpsc::UnboundedSender<bool>)>,
}

impl ManualSource {
    fn push(&self, visible: bool) {
        for (_, sender) in &self.senders {
            let _ = sender.send(visible);
        }
    }

    fn open(&self) -> usize {
        self.senders.iter().filter(|(_, s)| !s.is_closed()).count()
    }
}

impl VisibilitySource for ManualSource {
    fn subscribe(&mut self, element: ElementId) -> Subscription {
        let (sender, subscription) = Subscription::channel(element);
        self.senders.push((element, sender));
        subscription
    }
}

#[test]
fn uptime_counter_ends_on_decimal_suffix() {
    let mut source = ManualSource::default();
    let mut counter = Counter::mount(
        &statistic(99, ".9%"),
        CounterConfig::default(),
        &mut source,
        ElementId::new(1),
    );

    source.push(true);
    let mut last = None;
    for _ in 0..200 {
        if let Some(text) = counter.tick(FRAME) {
            last = Some(text);
        }
    }
    assert_eq!(last.as_deref(), Some("99.9%"));
}

#[test]
fn triggers_at_most_once_across_visibility_flaps() {
    let mut source = ManualSource::default();
    let mut counter = Counter::mount(
        &statistic(10_000, "+"),
        CounterConfig::default(),
        &mut source,
        ElementId::new(1),
    );

    source.push(true);
    counter.tick(Duration::from_millis(1200));
    let mid = counter.value();
    assert!(mid > 0.0 && mid < 10_000.0);

    source.push(false);
    source.push(true);
    counter.tick(Duration::ZERO);
    assert!((counter.value() - mid).abs() < f64::EPSILON, "no restart");

    counter.tick(Duration::from_secs(2));
    assert_eq!(counter.display(), "10000+");
}

#[test]
fn values_are_monotonic_and_end_exactly() {
    for target in [0, 1, 7, 50, 180, 10_000] {
        let mut counter = Counter::new(target, "", "", CounterConfig::default());
        counter.on_intersect(true);
        let mut previous = counter.value();
        while counter.is_running() {
            counter.advance(Duration::from_millis(33));
            assert!(counter.value() >= previous, "target {target}");
            previous = counter.value();
        }
        assert_eq!(counter.display(), target.to_string());
    }
}

#[test]
fn configured_duration_is_respected() {
    let mut counter = Counter::new(
        100,
        "",
        "",
        CounterConfig {
            duration: Duration::from_secs(1),
        },
    );
    counter.on_intersect(true);
    counter.advance(Duration::from_millis(999));
    assert!(counter.is_running());
    counter.advance(Duration::from_millis(1));
    assert!(counter.is_finished());
}

#[test]
fn unmount_closes_the_subscription() {
    let mut source = ManualSource::default();
    let mut counter = Counter::mount(
        &statistic(5, ""),
        CounterConfig::default(),
        &mut source,
        ElementId::new(9),
    );
    assert_eq!(source.open(), 1);
    counter.unmount();
    counter.unmount();
    assert_eq!(source.open(), 0);

    assert!(!counter.on_intersect(true));
    assert!(counter.advance(Duration::from_secs(3)).is_none());
    assert_eq!(counter.display(), "0");
}

#[test]
fn tracker_only_fires_when_card_enters_viewport() {
    let element = ElementId::new(4);
    let mut tracker = ViewportTracker::new();
    let mut counter = Counter::mount(
        &statistic(180, "+"),
        CounterConfig::default(),
        &mut tracker,
        element,
    );
    tracker.place(element, RowSpan::new(50, 5));

    for top in 0..=20 {
        tracker.set_viewport(RowSpan::new(top, 30));
        tracker.refresh();
        counter.tick(FRAME);
    }
    assert!(!counter.has_triggered(), "rows 0..50 never reach the card");

    tracker.set_viewport(RowSpan::new(21, 30));
    tracker.refresh();
    counter.tick(FRAME);
    assert!(counter.has_triggered());
}
