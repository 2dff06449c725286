//! Landing page scenarios: layout from the renderer, keyboard input, timers.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use marquee_engine::{
    CarouselConfig, CounterConfig, Direction, LandingPage, Section, UiOptions, default_content,
};
use marquee_tui::{Theme, apply_event, render_document};

const WIDTH: u16 = 100;
const VIEWPORT: u32 = 30;

fn mounted_page() -> LandingPage {
    let mut content = default_content();
    content.copyright_year = Some(2025);
    LandingPage::mount(
        content,
        CarouselConfig {
            autoplay_interval: Duration::from_millis(6000),
            reduced_motion: false,
        },
        CounterConfig::default(),
        UiOptions::default(),
    )
}

fn lay_out(page: &mut LandingPage) {
    let document = render_document(page, WIDTH, &Theme::new(page.ui_options()));
    page.apply_layout(document.layout, VIEWPORT);
}

fn press(page: &mut LandingPage, code: KeyCode) -> bool {
    apply_event(page, &Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[test]
fn statistics_link_scrolls_and_starts_counters() {
    let mut page = mounted_page();
    lay_out(&mut page);
    page.tick(Duration::from_millis(16));
    assert!(page.counters().iter().all(|c| !c.has_triggered()));

    press(&mut page, KeyCode::Tab);
    press(&mut page, KeyCode::Tab);
    press(&mut page, KeyCode::Enter);

    let stats = page.layout().section(Section::Statistics).expect("laid out");
    assert_eq!(page.scroll(), stats.top.min(page.max_scroll()));

    page.tick(Duration::from_millis(16));
    assert!(page.counters().iter().all(|c| c.has_triggered()));

    page.tick(Duration::from_millis(2500));
    let shown: Vec<String> = page.counters().iter().map(|c| c.display()).collect();
    assert_eq!(shown, ["10000+", "99.9%", "50ms", "180+"]);
}

#[test]
fn scrolling_past_statistics_and_back_does_not_restart() {
    let mut page = mounted_page();
    lay_out(&mut page);

    page.scroll_to_section(Section::Statistics);
    page.tick(Duration::from_millis(3000));
    press(&mut page, KeyCode::End);
    page.tick(Duration::from_millis(16));
    press(&mut page, KeyCode::Home);
    page.tick(Duration::from_millis(16));
    assert!(page.counters().iter().all(|c| c.is_finished()));
}

#[test]
fn keys_and_autoplay_share_one_carousel() {
    let mut page = mounted_page();
    press(&mut page, KeyCode::Char('4'));
    let carousel = page.carousel().expect("mounted");
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.direction(), Direction::Forward);

    let change = page.tick(Duration::from_millis(6000)).expect("autoplay");
    assert_eq!(change.index, 0, "wraps after the last slide");
    assert_eq!(change.direction, Direction::Forward);

    press(&mut page, KeyCode::Char('h'));
    assert_eq!(page.carousel().map(|c| c.current_index()), Some(3));
}

#[test]
fn resizing_clamps_scroll() {
    let mut page = mounted_page();
    lay_out(&mut page);
    press(&mut page, KeyCode::End);
    let bottom = page.scroll();
    assert!(bottom > 0);

    page.apply_layout(page.layout().clone(), VIEWPORT * 100);
    assert_eq!(page.scroll(), 0);
}

#[test]
fn quit_keys_stop_the_page() {
    let mut page = mounted_page();
    assert!(!press(&mut page, KeyCode::Char('x')));
    assert!(press(&mut page, KeyCode::Char('q')));
    assert!(page.should_quit());
}

#[test]
fn dropping_the_page_unmounts_it() {
    let mut page = mounted_page();
    page.unmount();
    assert!(!page.is_mounted());
    drop(page);
}
