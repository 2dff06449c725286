//! Keyboard input for the landing page.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use marquee_engine::LandingPage;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SCROLL_STEP: i32 = 1;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a reader blocked on capacity wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop; never block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into the page. Returns `true` when the page should quit.
pub fn handle_events(page: &mut LandingPage, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(page, &ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(page.should_quit())
}

/// Apply one terminal event to the page. Returns `true` when the page should quit.
pub fn apply_event(page: &mut LandingPage, event: &Event) -> bool {
    if let Event::Key(key) = event {
        if matches!(key.kind, KeyEventKind::Release) {
            return page.should_quit();
        }
        handle_key(page, *key);
    }
    page.should_quit()
}

fn handle_key(page: &mut LandingPage, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        page.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => page.request_quit(),
        KeyCode::Esc => {
            if page.menu_open() {
                page.close_menu();
            } else {
                page.request_quit();
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            page.previous_slide();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            page.next_slide();
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Err(err) = page.go_to_slide(index) {
                debug!("Slide key ignored: {err}");
            }
        }
        KeyCode::Char('k') | KeyCode::Up => page.scroll_by(-SCROLL_STEP),
        KeyCode::Char('j') | KeyCode::Down => page.scroll_by(SCROLL_STEP),
        KeyCode::PageUp => page.page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => page.page_down(),
        KeyCode::Home | KeyCode::Char('g') => page.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => page.scroll_to_bottom(),
        KeyCode::Tab => page.focus_next_link(),
        KeyCode::Enter => {
            page.follow_focused_link();
        }
        KeyCode::Char('m') => page.toggle_menu(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use marquee_engine::{
        CarouselConfig, CounterConfig, Direction, LandingPage, UiOptions, default_content,
    };

    use super::apply_event;

    fn page() -> LandingPage {
        LandingPage::mount(
            default_content(),
            CarouselConfig::default(),
            CounterConfig::default(),
            UiOptions::default(),
        )
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrow_keys_drive_carousel() {
        let mut page = page();
        apply_event(&mut page, &press(KeyCode::Right));
        apply_event(&mut page, &press(KeyCode::Right));
        apply_event(&mut page, &press(KeyCode::Left));
        let carousel = page.carousel().expect("mounted");
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn digit_keys_select_slides() {
        let mut page = page();
        apply_event(&mut page, &press(KeyCode::Char('3')));
        assert_eq!(page.carousel().map(|c| c.current_index()), Some(2));

        apply_event(&mut page, &press(KeyCode::Char('9')));
        assert_eq!(
            page.carousel().map(|c| c.current_index()),
            Some(2),
            "out-of-range selection leaves the slide alone"
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let mut page = page();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!apply_event(&mut page, &Event::Key(release)));
    }

    #[test]
    fn esc_closes_menu_before_quitting() {
        let mut page = page();
        page.set_compact_nav(true);
        apply_event(&mut page, &press(KeyCode::Char('m')));
        assert!(page.menu_open());
        assert!(!apply_event(&mut page, &press(KeyCode::Esc)));
        assert!(!page.menu_open());
        assert!(apply_event(&mut page, &press(KeyCode::Esc)));
    }

    #[test]
    fn menu_key_on_wide_nav_leaves_esc_quitting() {
        let mut page = page();
        page.set_compact_nav(false);
        apply_event(&mut page, &press(KeyCode::Char('m')));
        assert!(!page.menu_open());
        assert!(apply_event(&mut page, &press(KeyCode::Esc)));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut page = page();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(apply_event(&mut page, &event));
    }
}
