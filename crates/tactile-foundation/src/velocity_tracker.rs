//! Velocity estimation for fling gestures.
//!
//! Keeps the last [`VELOCITY_WINDOW`] contact samples in a ring buffer and
//! derives a 2-D velocity from the oldest and newest of them on demand.

use crate::config::VelocityConfig;
use crate::gesture_constants::VELOCITY_WINDOW;
use crate::input::ContactSample;

/// Two-point velocity estimator over a bounded sample window.
///
/// The estimate is the displacement between the oldest and newest sample in
/// the window divided by their time span, scaled by a caller-supplied factor
/// and clamped per axis.
///
/// # Usage
/// ```ignore
/// let mut estimator = VelocityEstimator::new(VelocityConfig::default());
/// estimator.add_sample(ContactSample::new(0.0, 0.0, 0));
/// estimator.add_sample(ContactSample::new(40.0, 0.0, 40));
/// estimator.compute_velocity(10.0);
/// assert_eq!(estimator.velocity(), (10.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct VelocityEstimator {
    /// Ring buffer of samples.
    samples: [Option<ContactSample>; VELOCITY_WINDOW],
    /// Slot that receives the next sample.
    next: usize,
    len: usize,
    velocity: (f32, f32),
    config: VelocityConfig,
}

impl Default for VelocityEstimator {
    fn default() -> Self {
        Self::new(VelocityConfig::default())
    }
}

impl VelocityEstimator {
    pub fn new(config: VelocityConfig) -> Self {
        Self {
            samples: [None; VELOCITY_WINDOW],
            next: 0,
            len: 0,
            velocity: (0.0, 0.0),
            config,
        }
    }

    /// Appends a sample, evicting the oldest one once the window is full.
    pub fn add_sample(&mut self, sample: ContactSample) {
        self.samples[self.next] = Some(sample);
        self.next = (self.next + 1) % VELOCITY_WINDOW;
        self.len = (self.len + 1).min(VELOCITY_WINDOW);
    }

    /// Recomputes the stored velocity, in px/ms multiplied by `factor`.
    ///
    /// Leaves the previous velocity untouched when fewer than two samples
    /// are buffered or when the oldest and newest sample share a timestamp.
    pub fn compute_velocity(&mut self, factor: f32) {
        let (Some(first), Some(last)) = (self.oldest(), self.newest()) else {
            return;
        };
        if self.len < 2 || last.t <= first.t {
            log::trace!(
                "velocity unchanged: {} samples spanning {}ms",
                self.len,
                last.t.saturating_sub(first.t)
            );
            return;
        }

        let dt = (last.t - first.t) as f32;
        let vx = (last.x - first.x) / dt * factor;
        let vy = (last.y - first.y) / dt * factor;
        self.velocity = (self.clamp_axis(vx), self.clamp_axis(vy));
    }

    pub fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    /// Empties the window and zeroes the stored velocity.
    pub fn clear(&mut self) {
        self.samples = [None; VELOCITY_WINDOW];
        self.next = 0;
        self.len = 0;
        self.velocity = (0.0, 0.0);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn oldest(&self) -> Option<ContactSample> {
        if self.len == 0 {
            return None;
        }
        let index = (self.next + VELOCITY_WINDOW - self.len) % VELOCITY_WINDOW;
        self.samples[index]
    }

    pub fn newest(&self) -> Option<ContactSample> {
        if self.len == 0 {
            return None;
        }
        let index = (self.next + VELOCITY_WINDOW - 1) % VELOCITY_WINDOW;
        self.samples[index]
    }

    fn clamp_axis(&self, value: f32) -> f32 {
        let magnitude = value.abs();
        if magnitude < self.config.min_velocity {
            0.0
        } else if magnitude > self.config.max_velocity {
            self.config.max_velocity.copysign(value)
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(estimator: &mut VelocityEstimator, samples: &[(f32, f32, u64)]) {
        for &(x, y, t) in samples {
            estimator.add_sample(ContactSample::new(x, y, t));
        }
    }

    #[test]
    fn empty_estimator_reports_zero() {
        let mut estimator = VelocityEstimator::default();
        estimator.compute_velocity(10.0);
        assert_eq!(estimator.velocity(), (0.0, 0.0));
    }

    #[test]
    fn single_sample_leaves_previous_velocity() {
        let mut estimator = VelocityEstimator::default();
        feed(&mut estimator, &[(0.0, 0.0, 0), (50.0, 0.0, 10)]);
        estimator.compute_velocity(1.0);
        assert_eq!(estimator.velocity(), (5.0, 0.0));

        // Only the window is cleared here, not the velocity.
        estimator.samples = [None; VELOCITY_WINDOW];
        estimator.next = 0;
        estimator.len = 0;
        estimator.add_sample(ContactSample::new(500.0, 500.0, 20));
        estimator.compute_velocity(1.0);
        assert_eq!(estimator.velocity(), (5.0, 0.0));
    }

    #[test]
    fn zero_time_span_is_ignored() {
        let mut estimator = VelocityEstimator::default();
        feed(&mut estimator, &[(0.0, 0.0, 40), (30.0, 30.0, 40)]);
        estimator.compute_velocity(10.0);
        let (vx, vy) = estimator.velocity();
        assert_eq!((vx, vy), (0.0, 0.0));
        assert!(vx.is_finite() && vy.is_finite());
    }

    #[test]
    fn uses_oldest_and_newest_only() {
        let mut estimator = VelocityEstimator::default();
        // The middle samples wander, but only the endpoints matter.
        feed(
            &mut estimator,
            &[
                (0.0, 0.0, 0),
                (90.0, -40.0, 10),
                (-20.0, 70.0, 20),
                (3.0, 3.0, 30),
                (40.0, 20.0, 40),
            ],
        );
        estimator.compute_velocity(10.0);
        assert_eq!(estimator.velocity(), (10.0, 5.0));
    }

    #[test]
    fn window_evicts_oldest_first() {
        let mut estimator = VelocityEstimator::default();
        for i in 0..7u64 {
            estimator.add_sample(ContactSample::new(i as f32 * 10.0, 0.0, i * 10));
        }
        assert_eq!(estimator.len(), VELOCITY_WINDOW);
        assert_eq!(estimator.oldest(), Some(ContactSample::new(20.0, 0.0, 20)));
        assert_eq!(estimator.newest(), Some(ContactSample::new(60.0, 0.0, 60)));
    }

    #[test]
    fn clamps_each_axis_independently() {
        let mut estimator = VelocityEstimator::default();
        // dx/dt = 0.1 px/ms -> 1.0 after factor, below the noise floor.
        // dy/dt = -20 px/ms -> -200 after factor, clamped to -100.
        feed(&mut estimator, &[(0.0, 0.0, 0), (4.0, -800.0, 40)]);
        estimator.compute_velocity(10.0);
        assert_eq!(estimator.velocity(), (0.0, -100.0));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let mut estimator = VelocityEstimator::default();
        feed(&mut estimator, &[(0.0, 0.0, 0), (8.0, 400.0, 40)]);
        estimator.compute_velocity(10.0);
        assert_eq!(estimator.velocity(), (2.0, 100.0));
    }

    #[test]
    fn clear_resets_window_and_velocity() {
        let mut estimator = VelocityEstimator::default();
        feed(&mut estimator, &[(0.0, 0.0, 0), (100.0, 0.0, 20)]);
        estimator.compute_velocity(10.0);
        assert_ne!(estimator.velocity(), (0.0, 0.0));

        estimator.clear();
        assert!(estimator.is_empty());
        assert_eq!(estimator.velocity(), (0.0, 0.0));
        assert_eq!(estimator.oldest(), None);
    }

    #[test]
    fn custom_thresholds_apply() {
        let mut estimator = VelocityEstimator::new(VelocityConfig {
            min_velocity: 0.5,
            max_velocity: 3.0,
        });
        feed(&mut estimator, &[(0.0, 0.0, 0), (10.0, -100.0, 10)]);
        estimator.compute_velocity(1.0);
        assert_eq!(estimator.velocity(), (1.0, -3.0));
    }
}
