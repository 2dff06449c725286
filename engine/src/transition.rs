//! Slide transition between two testimonials.
//!
//! The outgoing slide leaves completely before the incoming one enters.
//! Each stage runs a spring for position and a fixed fade for opacity.

use std::time::Duration;

use marquee_types::ui::{Direction, EffectTimer, Spring, SpringConfig};

pub const FADE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStage {
    Exiting,
    Entering,
    Done,
}

/// What the renderer should draw for the carousel this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub index: usize,
    /// Horizontal offset in logical units (see [`marquee_types::ui::SLIDE_DISTANCE`]).
    pub offset: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct SlideTransition {
    direction: Direction,
    /// Where the outgoing slide was when the exit began.
    exit_start: SlideFrame,
    to: usize,
    stage: TransitionStage,
    spring: Spring,
    fade: EffectTimer,
    spring_config: SpringConfig,
}

impl SlideTransition {
    #[must_use]
    pub fn new(direction: Direction, from: usize, to: usize) -> Self {
        Self::with_spring(direction, from, to, SpringConfig::default())
    }

    #[must_use]
    pub fn with_spring(
        direction: Direction,
        from: usize,
        to: usize,
        spring_config: SpringConfig,
    ) -> Self {
        Self::exiting(
            direction,
            SlideFrame {
                index: from,
                offset: 0.0,
                opacity: 1.0,
            },
            to,
            spring_config,
        )
    }

    /// Replace a transition mid-flight: the exit picks up from `shown`, the
    /// frame currently on screen, so no other slide is ever drawn in between.
    #[must_use]
    pub fn from_frame(direction: Direction, shown: SlideFrame, to: usize) -> Self {
        Self::exiting(direction, shown, to, SpringConfig::default())
    }

    fn exiting(
        direction: Direction,
        shown: SlideFrame,
        to: usize,
        spring_config: SpringConfig,
    ) -> Self {
        let opacity = shown.opacity.clamp(0.0, 1.0);
        let exit_start = SlideFrame { opacity, ..shown };

        // Nothing visible left to fade out.
        if opacity <= f32::EPSILON {
            return Self {
                direction,
                exit_start,
                to,
                stage: TransitionStage::Entering,
                spring: Spring::new(spring_config),
                fade: EffectTimer::new(FADE_DURATION),
                spring_config,
            };
        }

        Self {
            direction,
            exit_start,
            to,
            stage: TransitionStage::Exiting,
            spring: Spring::new(spring_config),
            // A partly faded slide finishes fading at the same rate.
            fade: EffectTimer::new(FADE_DURATION.mul_f32(opacity)),
            spring_config,
        }
    }

    /// Leftover time after one stage completes carries into the next.
    pub fn advance(&mut self, delta: Duration) {
        let mut remaining = delta;
        while !remaining.is_zero() && self.stage != TransitionStage::Done {
            let before = self.fade.elapsed();
            self.spring.advance(remaining);
            self.fade.advance(remaining);

            if !(self.spring.is_settled() && self.fade.is_finished()) {
                return;
            }

            // The fade is the only clock with a known end; hand its overshoot on.
            let used = self.fade.duration().saturating_sub(before);
            remaining = remaining.saturating_sub(used);
            self.next_stage();
        }
    }

    fn next_stage(&mut self) {
        self.stage = match self.stage {
            TransitionStage::Exiting => TransitionStage::Entering,
            TransitionStage::Entering | TransitionStage::Done => TransitionStage::Done,
        };
        self.spring = Spring::new(self.spring_config);
        self.fade = EffectTimer::new(FADE_DURATION);
    }

    #[must_use]
    pub fn stage(&self) -> TransitionStage {
        self.stage
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stage == TransitionStage::Done
    }

    #[must_use]
    pub fn frame(&self) -> SlideFrame {
        match self.stage {
            TransitionStage::Exiting => {
                let start = self.exit_start;
                let travelled = 1.0 - self.spring.remaining();
                SlideFrame {
                    index: start.index,
                    offset: start.offset + (self.direction.exit_offset() - start.offset) * travelled,
                    opacity: start.opacity * (1.0 - self.fade.progress()),
                }
            }
            TransitionStage::Entering => SlideFrame {
                index: self.to,
                offset: self.direction.enter_offset() * self.spring.remaining(),
                opacity: self.fade.progress(),
            },
            TransitionStage::Done => SlideFrame {
                index: self.to,
                offset: 0.0,
                opacity: 1.0,
            },
        }
    }
}
