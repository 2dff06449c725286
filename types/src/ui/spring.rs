//! Damped spring used for slide motion.
//!
//! The spring tracks the fraction of travel still remaining: it starts at
//! `1.0` and settles at `0.0`. Callers scale that by the slide distance.

use std::time::Duration;

const MAX_STEP: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Displacement below which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.0005,
            rest_speed: 0.01,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    settled: bool,
}

impl Spring {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 1.0,
            velocity: 0.0,
            settled: false,
        }
    }

    /// A spring that is already at rest.
    #[must_use]
    pub fn settled(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            settled: true,
        }
    }

    /// Step the spring forward using fixed sub-steps of at most 1ms.
    pub fn advance(&mut self, delta: Duration) {
        if self.settled || delta.is_zero() {
            return;
        }

        let steps = delta.as_nanos().div_ceil(MAX_STEP.as_nanos()).max(1);
        let dt = delta.as_secs_f32() / steps as f32;
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;

        for _ in 0..steps {
            let force = -stiffness * self.position - damping * self.velocity;
            self.velocity += force / mass * dt;
            self.position += self.velocity * dt;

            if self.position.abs() < rest_delta && self.velocity.abs() < rest_speed {
                self.position = 0.0;
                self.velocity = 0.0;
                self.settled = true;
                return;
            }
        }
    }

    /// Fraction of travel remaining (may briefly overshoot below zero).
    #[must_use]
    pub fn remaining(&self) -> f32 {
        self.position
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}
