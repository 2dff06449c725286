//! Testimonial carousel controller.
//!
//! Owns the current slide index, the navigation direction and the
//! auto-advance timer. Every navigation returns a [`SlideChange`] for the
//! renderer and replaces any in-flight [`SlideTransition`].

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use marquee_types::Testimonial;
use marquee_types::ui::Direction;

use crate::autoplay::AutoPlayTimer;
use crate::transition::{SlideFrame, SlideTransition};

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one testimonial")]
    Empty,
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("carousel is unmounted")]
    Unmounted,
}

/// A single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Forward => Direction::Forward,
            Step::Backward => Direction::Backward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub autoplay_interval: Duration,
    /// Swap slides without motion.
    pub reduced_motion: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            reduced_motion: false,
        }
    }
}

/// Emitted on every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub index: usize,
    pub previous: usize,
    pub direction: Direction,
}

#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Testimonial>,
    current: usize,
    direction: Direction,
    autoplay: AutoPlayTimer,
    transition: Option<SlideTransition>,
    reduced_motion: bool,
    mounted: bool,
}

impl Carousel {
    /// Mount the carousel and start its auto-advance timer.
    pub fn mount(slides: Vec<Testimonial>, config: CarouselConfig) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::Empty);
        }

        info!(
            slides = slides.len(),
            interval_ms = config.autoplay_interval.as_millis() as u64,
            "Carousel mounted"
        );

        Ok(Self {
            slides,
            current: 0,
            direction: Direction::None,
            autoplay: AutoPlayTimer::new(config.autoplay_interval),
            transition: None,
            reduced_motion: config.reduced_motion,
            mounted: true,
        })
    }

    /// Step one slide forward or backward, wrapping at either end.
    pub fn advance(&mut self, step: Step) -> Result<SlideChange, CarouselError> {
        self.ensure_mounted()?;
        let len = self.slides.len();
        let next = match step {
            Step::Forward => (self.current + 1) % len,
            Step::Backward => (self.current + len - 1) % len,
        };
        Ok(self.navigate(next, step.into()))
    }

    pub fn next(&mut self) -> Result<SlideChange, CarouselError> {
        self.advance(Step::Forward)
    }

    pub fn previous(&mut self) -> Result<SlideChange, CarouselError> {
        self.advance(Step::Backward)
    }

    /// Jump to a specific slide.
    ///
    /// Direction is Forward only when `index` is past the current slide;
    /// selecting the current slide reports Backward and keeps the index.
    pub fn go_to(&mut self, index: usize) -> Result<SlideChange, CarouselError> {
        self.ensure_mounted()?;
        let len = self.slides.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }

        let direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(self.navigate(index, direction))
    }

    /// Advance timers by one frame.
    ///
    /// Returns the last change caused by the auto-advance timer, if any fired.
    pub fn tick(&mut self, delta: Duration) -> Option<SlideChange> {
        if !self.mounted {
            return None;
        }

        if let Some(transition) = self.transition.as_mut() {
            transition.advance(delta);
            if transition.is_finished() {
                self.transition = None;
            }
        }

        let fired = self.autoplay.tick(delta);
        if fired == 0 {
            return None;
        }
        // Several fires in one frame collapse into a single forward move.
        let len = self.slides.len();
        let steps = usize::try_from(fired).unwrap_or(usize::MAX) % len;
        Some(self.navigate((self.current + steps) % len, Direction::Forward))
    }

    fn navigate(&mut self, index: usize, direction: Direction) -> SlideChange {
        let previous = self.current;
        let shown = self.frame();
        self.direction = direction;
        self.current = index;

        // Same key, nothing to animate; any in-flight transition keeps running.
        if index != previous {
            self.transition = if self.reduced_motion {
                None
            } else {
                Some(SlideTransition::from_frame(direction, shown, index))
            };
        }

        debug!(
            from = previous,
            to = index,
            direction = direction.as_str(),
            "Carousel navigated"
        );

        SlideChange {
            index,
            previous,
            direction,
        }
    }

    fn ensure_mounted(&self) -> Result<(), CarouselError> {
        if self.mounted {
            Ok(())
        } else {
            Err(CarouselError::Unmounted)
        }
    }

    /// Release the timer and drop any in-flight transition. Safe to repeat.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.autoplay.release();
        self.transition = None;
        info!("Carousel unmounted");
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn current(&self) -> &Testimonial {
        &self.slides[self.current]
    }

    #[must_use]
    pub fn slides(&self) -> &[Testimonial] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn autoplay(&self) -> &AutoPlayTimer {
        &self.autoplay
    }

    #[must_use]
    pub fn transition(&self) -> Option<&SlideTransition> {
        self.transition.as_ref()
    }

    /// The slide to draw right now, with its animated offset and opacity.
    #[must_use]
    pub fn frame(&self) -> SlideFrame {
        self.transition
            .as_ref()
            .map_or(
                SlideFrame {
                    index: self.current,
                    offset: 0.0,
                    opacity: 1.0,
                },
                SlideTransition::frame,
            )
    }
}
