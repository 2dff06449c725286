//! Carousel navigation properties exercised through the public engine API.

use std::time::Duration;

use marquee_engine::{
    Carousel, CarouselConfig, CarouselError, Direction, Step, TransitionStage, default_content,
};
use marquee_types::{Rating, Testimonial};

fn slides(n: usize) -> Vec<Testimonial> {
    (0..n)
        .map(|i| Testimonial {
            quote: format!("Quote {i}"),
            name: format!("Person {i}"),
            title: "Engineer".to_string(),
            rating: Rating::FIVE,
            avatar: None,
        })
        .collect()
}

fn carousel(n: usize) -> Carousel {
    Carousel::mount(slides(n), CarouselConfig::default()).expect("non-empty")
}

#[test]
fn k_forward_advances_land_on_k_mod_n() {
    for n in 1..=5 {
        for k in 0..12 {
            let mut carousel = carousel(n);
            for _ in 0..k {
                carousel.advance(Step::Forward).expect("mounted");
            }
            assert_eq!(carousel.current_index(), k % n, "n={n} k={k}");
        }
    }
}

#[test]
fn forward_then_backward_returns_home() {
    let mut carousel = carousel(4);
    for start in 0..4 {
        carousel.go_to(start).expect("in range");
        carousel.next().expect("mounted");
        carousel.previous().expect("mounted");
        assert_eq!(carousel.current_index(), start);
    }
}

#[test]
fn backward_from_first_wraps_to_last() {
    let mut carousel = carousel(4);
    let change = carousel.previous().expect("mounted");
    assert_eq!(change.index, 3);
    assert_eq!(change.direction, Direction::Backward);
}

#[test]
fn go_to_sets_index_and_direction() {
    let mut carousel = carousel(4);
    carousel.go_to(1).expect("in range");

    let change = carousel.go_to(3).expect("in range");
    assert_eq!((change.index, change.direction), (3, Direction::Forward));

    carousel.go_to(1).expect("in range");
    let change = carousel.go_to(0).expect("in range");
    assert_eq!((change.index, change.direction), (0, Direction::Backward));
}

#[test]
fn go_to_current_does_not_drift() {
    let mut carousel = carousel(4);
    carousel.go_to(2).expect("in range");
    for _ in 0..5 {
        let change = carousel.go_to(2).expect("in range");
        assert_eq!(change.index, 2);
        assert_eq!(change.direction, Direction::Backward);
    }
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn out_of_range_go_to_changes_nothing() {
    let mut carousel = carousel(4);
    carousel.next().expect("mounted");
    let err = carousel.go_to(4).unwrap_err();
    assert_eq!(err, CarouselError::IndexOutOfRange { index: 4, len: 4 });
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.direction(), Direction::Forward);
}

#[test]
fn mounting_without_slides_fails() {
    let err = Carousel::mount(Vec::new(), CarouselConfig::default()).unwrap_err();
    assert_eq!(err, CarouselError::Empty);
}

#[test]
fn autoplay_wraps_four_slides() {
    let mut carousel = Carousel::mount(
        default_content().testimonials,
        CarouselConfig {
            autoplay_interval: Duration::from_millis(6000),
            reduced_motion: false,
        },
    )
    .expect("default content has testimonials");

    let mut seen = vec![carousel.current_index()];
    for _ in 0..4 {
        let mut elapsed = Duration::ZERO;
        let change = loop {
            elapsed += Duration::from_millis(16);
            if let Some(change) = carousel.tick(Duration::from_millis(16)) {
                break change;
            }
            assert!(elapsed < Duration::from_secs(7), "autoplay stalled");
        };
        assert_eq!(change.direction, Direction::Forward);
        seen.push(change.index);
    }
    assert_eq!(seen, [0, 1, 2, 3, 0]);
}

#[test]
fn manual_navigation_keeps_autoplay_phase() {
    let mut carousel = carousel(4);
    carousel.tick(Duration::from_millis(4000));
    carousel.next().expect("mounted");
    let change = carousel
        .tick(Duration::from_millis(1000))
        .expect("fires on the original schedule");
    assert_eq!(change.index, 2);
}

#[test]
fn newest_navigation_replaces_transition() {
    let mut carousel = carousel(4);
    carousel.next().expect("mounted");
    carousel.tick(Duration::from_millis(100));
    let before = carousel.frame();
    carousel.next().expect("mounted");

    let transition = carousel.transition().expect("in flight");
    assert_eq!(transition.stage(), TransitionStage::Exiting);
    let after = carousel.frame();
    assert_eq!(after.index, 0, "keeps exiting the slide on screen");
    assert!(after.opacity <= before.opacity, "{before:?} -> {after:?}");
    assert_eq!(carousel.current_index(), 2);

    let mut drawn = Vec::new();
    while carousel.transition().is_some() {
        carousel.tick(Duration::from_millis(16));
        drawn.push(carousel.frame().index);
    }
    assert!(!drawn.contains(&1), "{drawn:?}");
    assert_eq!(carousel.frame().index, 2);
}

#[test]
fn forward_slide_enters_from_the_right() {
    let mut carousel = carousel(3);
    carousel.next().expect("mounted");
    for _ in 0..200 {
        if carousel
            .transition()
            .is_some_and(|t| t.stage() == TransitionStage::Entering)
        {
            break;
        }
        carousel.tick(Duration::from_millis(16));
    }
    let frame = carousel.frame();
    assert_eq!(frame.index, 1);
    assert!(frame.offset > 0.0);
}

#[test]
fn unmounted_carousel_is_inert() {
    let mut carousel = carousel(4);
    carousel.unmount();
    carousel.unmount();
    assert!(carousel.autoplay().is_released());
    assert!(carousel.tick(Duration::from_secs(60)).is_none());
    assert_eq!(carousel.next().unwrap_err(), CarouselError::Unmounted);
    assert_eq!(carousel.current_index(), 0);
}
