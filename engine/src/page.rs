//! Landing page composition.
//!
//! [`LandingPage`] mounts one carousel and one counter per statistic side by
//! side, owns the viewport tracker that feeds the counters, and keeps the
//! scroll and navigation state the renderer reads. The two controllers share
//! nothing; the page only forwards frame deltas to each.

use std::time::Duration;

use chrono::Datelike;
use tracing::{debug, info, warn};

use marquee_types::ui::UiOptions;
use marquee_types::{NavLink, PageContent};

use crate::carousel::{Carousel, CarouselConfig, CarouselError, SlideChange};
use crate::counter::{Counter, CounterConfig};
use crate::visibility::{ElementId, RowSpan, ViewportTracker};

/// Page sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Navigation,
    Hero,
    Features,
    Statistics,
    Testimonials,
    Cta,
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Navigation,
        Section::Hero,
        Section::Features,
        Section::Statistics,
        Section::Testimonials,
        Section::Cta,
        Section::Footer,
    ];

    /// Anchor name a navigation link uses to target this section.
    #[must_use]
    pub const fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Features => Some("features"),
            Section::Statistics => Some("stats"),
            Section::Testimonials => Some("testimonials"),
            Section::Cta => Some("cta"),
            Section::Navigation | Section::Hero | Section::Footer => None,
        }
    }

    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == Some(anchor))
    }
}

/// Element id of the `index`th statistic card.
#[must_use]
pub const fn statistic_element(index: usize) -> ElementId {
    ElementId::new(100 + index as u32)
}

/// Where the renderer put things on the last frame, in document rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub document_height: u32,
    pub sections: Vec<(Section, RowSpan)>,
    /// One span per statistic card, in content order.
    pub statistics: Vec<RowSpan>,
}

impl PageLayout {
    #[must_use]
    pub fn section(&self, section: Section) -> Option<RowSpan> {
        self.sections
            .iter()
            .find_map(|(candidate, span)| (*candidate == section).then_some(*span))
    }
}

#[derive(Debug)]
pub struct LandingPage {
    content: PageContent,
    carousel: Option<Carousel>,
    counters: Vec<Counter>,
    tracker: ViewportTracker,
    layout: PageLayout,
    scroll: u32,
    viewport_height: u32,
    menu_open: bool,
    compact_nav: bool,
    focused_link: Option<usize>,
    ui_options: UiOptions,
    copyright_year: i32,
    should_quit: bool,
    mounted: bool,
}

impl LandingPage {
    /// Mount every interactive component on the page.
    ///
    /// A page without testimonials renders no carousel.
    #[must_use]
    pub fn mount(
        content: PageContent,
        carousel_config: CarouselConfig,
        counter_config: CounterConfig,
        ui_options: UiOptions,
    ) -> Self {
        let carousel_config = CarouselConfig {
            reduced_motion: carousel_config.reduced_motion || ui_options.reduced_motion,
            ..carousel_config
        };
        let carousel = match Carousel::mount(content.testimonials.clone(), carousel_config) {
            Ok(carousel) => Some(carousel),
            Err(CarouselError::Empty) => {
                warn!("No testimonials in content; carousel section left empty");
                None
            }
            Err(err) => {
                warn!("Carousel failed to mount: {err}");
                None
            }
        };

        let mut tracker = ViewportTracker::new();
        let counters = content
            .statistics
            .iter()
            .enumerate()
            .map(|(index, stat)| {
                Counter::mount(stat, counter_config, &mut tracker, statistic_element(index))
            })
            .collect();

        let copyright_year = content
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year());

        info!(
            statistics = content.statistics.len(),
            testimonials = content.testimonials.len(),
            "Landing page mounted"
        );

        Self {
            content,
            carousel,
            counters,
            tracker,
            layout: PageLayout::default(),
            scroll: 0,
            viewport_height: 0,
            menu_open: false,
            compact_nav: false,
            focused_link: None,
            ui_options,
            copyright_year,
            should_quit: false,
            mounted: true,
        }
    }

    /// Advance every timer by one frame.
    ///
    /// Returns the slide change when autoplay moved the carousel.
    pub fn tick(&mut self, delta: Duration) -> Option<SlideChange> {
        if !self.mounted {
            return None;
        }
        for counter in &mut self.counters {
            counter.tick(delta);
        }
        self.carousel
            .as_mut()
            .and_then(|carousel| carousel.tick(delta))
    }

    /// Record the renderer's layout and the current viewport height, then
    /// push visibility changes to the counters.
    pub fn apply_layout(&mut self, layout: PageLayout, viewport_height: u32) {
        for (index, span) in layout.statistics.iter().enumerate() {
            self.tracker.place(statistic_element(index), *span);
        }
        self.layout = layout;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
        self.sync_viewport();
    }

    fn sync_viewport(&mut self) {
        self.tracker
            .set_viewport(RowSpan::new(self.scroll, self.viewport_height));
        self.tracker.refresh();
    }

    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        self.layout
            .document_height
            .saturating_sub(self.viewport_height)
    }

    pub fn scroll_by(&mut self, rows: i32) {
        let next = if rows.is_negative() {
            self.scroll.saturating_sub(rows.unsigned_abs())
        } else {
            self.scroll.saturating_add(rows.unsigned_abs())
        };
        self.scroll_to(next);
    }

    pub fn scroll_to(&mut self, row: u32) {
        self.scroll = row.min(self.max_scroll());
        self.sync_viewport();
    }

    pub fn page_down(&mut self) {
        let page = self.viewport_height.saturating_sub(1).max(1);
        self.scroll_to(self.scroll.saturating_add(page));
    }

    pub fn page_up(&mut self) {
        let page = self.viewport_height.saturating_sub(1).max(1);
        self.scroll_to(self.scroll.saturating_sub(page));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Scroll so `section` starts at the top of the viewport.
    ///
    /// Returns false when the section has not been laid out yet.
    pub fn scroll_to_section(&mut self, section: Section) -> bool {
        let Some(span) = self.layout.section(section) else {
            return false;
        };
        debug!(?section, row = span.top, "Scrolling to section");
        self.scroll_to(span.top);
        true
    }

    /// Follow the navigation link at `index`: scroll to its section and
    /// close the compact menu.
    pub fn follow_link(&mut self, index: usize) -> bool {
        let Some(section) = self
            .content
            .navigation
            .get(index)
            .and_then(NavLink::anchor)
            .and_then(Section::from_anchor)
        else {
            return false;
        };
        self.focused_link = Some(index);
        self.menu_open = false;
        self.scroll_to_section(section)
    }

    pub fn follow_focused_link(&mut self) -> bool {
        match self.focused_link {
            Some(index) => self.follow_link(index),
            None => false,
        }
    }

    /// Move link focus to the next navigation link, wrapping around.
    pub fn focus_next_link(&mut self) {
        let count = self.content.navigation.len();
        if count == 0 {
            self.focused_link = None;
            return;
        }
        self.focused_link = Some(match self.focused_link {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    /// Open or close the compact navigation menu. Only a compact nav bar
    /// has a menu, so this does nothing while the links fit on one row.
    pub fn toggle_menu(&mut self) {
        self.menu_open = self.compact_nav && !self.menu_open;
    }

    /// Told by the renderer whether the nav bar collapsed into a menu.
    /// Widening the terminal closes an open menu.
    pub fn set_compact_nav(&mut self, compact: bool) {
        self.compact_nav = compact;
        if !compact {
            self.menu_open = false;
        }
    }

    #[must_use]
    pub fn compact_nav(&self) -> bool {
        self.compact_nav
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn next_slide(&mut self) -> Option<SlideChange> {
        self.carousel.as_mut().and_then(|carousel| {
            carousel
                .next()
                .inspect_err(|err| debug!("Next slide ignored: {err}"))
                .ok()
        })
    }

    pub fn previous_slide(&mut self) -> Option<SlideChange> {
        self.carousel.as_mut().and_then(|carousel| {
            carousel
                .previous()
                .inspect_err(|err| debug!("Previous slide ignored: {err}"))
                .ok()
        })
    }

    pub fn go_to_slide(&mut self, index: usize) -> Result<SlideChange, CarouselError> {
        match self.carousel.as_mut() {
            Some(carousel) => carousel.go_to(index),
            None => Err(CarouselError::Empty),
        }
    }

    #[must_use]
    pub fn content(&self) -> &PageContent {
        &self.content
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    #[must_use]
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn focused_link(&self) -> Option<usize> {
        self.focused_link
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn copyright_year(&self) -> i32 {
        self.copyright_year
    }

    /// `© {year} {company}. All rights reserved.`
    #[must_use]
    pub fn copyright_line(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_year, self.content.company_name
        )
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Release the autoplay timer and every visibility subscription.
    /// Safe to repeat.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.unmount();
        }
        for counter in &mut self.counters {
            counter.unmount();
        }
        self.tracker.refresh();
        info!("Landing page unmounted");
    }
}

impl Drop for LandingPage {
    fn drop(&mut self) {
        self.unmount();
    }
}
