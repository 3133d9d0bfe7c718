//! Damped spring used for popout and lift scale transitions.
//!
//! Springs only ever follow a target set from logical state. Retargeting
//! keeps the current value and velocity, so rapid toggles never leave the
//! value parked at an intermediate point.

use serde::{Deserialize, Serialize};

/// Fixed integration step (~60fps).
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Distance and speed below which a spring snaps to its target.
const REST_EPSILON: f64 = 1e-3;

/// Upper bound on integration steps per `settle` call.
const MAX_SETTLE_STEPS: usize = 10_000;

/// A scalar mass-spring-damper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    /// Spring constant.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Mass.
    pub mass: f64,
}

impl Spring {
    pub const DEFAULT_STIFFNESS: f64 = 170.0;
    pub const DEFAULT_DAMPING: f64 = 26.0;
    pub const DEFAULT_MASS: f64 = 1.0;

    /// A spring resting at `value`.
    pub fn at(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness: Self::DEFAULT_STIFFNESS,
            damping: Self::DEFAULT_DAMPING,
            mass: Self::DEFAULT_MASS,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget the spring. Motion continues from the current state.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` and stop.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds in fixed-size substeps.
    pub fn step(&mut self, dt: f64) {
        let mut remaining = dt;
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(FRAME_DT);
            self.integrate(h);
            remaining -= h;
        }
    }

    /// Run until at rest.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_STEPS {
            if self.is_settled() {
                return;
            }
            self.integrate(FRAME_DT);
        }
        self.snap_to(self.target);
    }

    fn integrate(&mut self, h: f64) {
        // Force = spring + damping
        let displacement = self.target - self.value;
        let accel = (self.stiffness * displacement - self.damping * self.velocity) / self.mass;

        // Semi-implicit Euler
        self.velocity += accel * h;
        self.value += self.velocity * h;

        if (self.target - self.value).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::at(0.0)
    }
}
