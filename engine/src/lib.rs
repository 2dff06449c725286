//! Core engine for Marquee: interactive controllers and page state.
//!
//! This crate has no terminal dependencies. The renderer reads state from
//! [`LandingPage`] and reports layout back to it.

mod autoplay;
mod carousel;
mod config;
mod content;
mod counter;
mod page;
mod transition;
mod visibility;

pub use autoplay::AutoPlayTimer;
pub use carousel::{
    Carousel, CarouselConfig, CarouselError, DEFAULT_AUTOPLAY_INTERVAL, SlideChange, Step,
};
pub use config::{
    AppConfig, CarouselSection, ConfigError, CounterSection, MarqueeConfig,
    PAGE_AUTOPLAY_INTERVAL, config_path,
};
pub use content::{ContentLoadError, default_content, load_content};
pub use counter::{Counter, CounterConfig, DEFAULT_COUNTER_DURATION, count_up_value};
pub use page::{LandingPage, PageLayout, Section, statistic_element};
pub use transition::{FADE_DURATION, SlideFrame, SlideTransition, TransitionStage};
pub use visibility::{ElementId, RowSpan, Subscription, ViewportTracker, VisibilitySource};

pub use marquee_types::ui::{Direction, UiOptions};
pub use marquee_types::{PageContent, Statistic, Testimonial};
