//! Fling annotation for released drags.

use crate::config::VelocityConfig;
use crate::events::GestureEvent;
use crate::input::ContactSample;
use crate::velocity_tracker::VelocityEstimator;

#[derive(Default, Debug, Clone)]
pub struct FlingGesture {
    estimator: VelocityEstimator,
}

impl FlingGesture {
    pub fn new(config: VelocityConfig) -> Self {
        Self {
            estimator: VelocityEstimator::new(config),
        }
    }

    pub fn add_sample(&mut self, sample: ContactSample) {
        self.estimator.add_sample(sample);
    }

    /// Builds the fling for a drag that started at `down` and ended at `up`.
    pub fn release(&mut self, down: ContactSample, up: ContactSample, factor: f32) -> GestureEvent {
        self.estimator.compute_velocity(factor);
        let (vx, vy) = self.estimator.velocity();
        GestureEvent::Fling { down, up, vx, vy }
    }

    pub fn estimator(&self) -> &VelocityEstimator {
        &self.estimator
    }

    /// Forgets the previous drag so its velocity cannot leak into the next.
    pub fn reset(&mut self) {
        self.estimator.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_reports_window_velocity() {
        let mut fling = FlingGesture::new(VelocityConfig::default());
        for (x, t) in [(0.0, 0), (20.0, 10), (40.0, 20), (60.0, 30), (80.0, 40)] {
            fling.add_sample(ContactSample::new(x, 0.0, t));
        }
        assert_eq!(fling.estimator().len(), 5);

        let down = ContactSample::new(0.0, 0.0, 0);
        let up = ContactSample::new(80.0, 0.0, 45);
        assert_eq!(
            fling.release(down, up, 10.0),
            GestureEvent::Fling {
                down,
                up,
                vx: 20.0,
                vy: 0.0
            }
        );
    }

    #[test]
    fn reset_clears_previous_velocity() {
        let mut fling = FlingGesture::new(VelocityConfig::default());
        fling.add_sample(ContactSample::new(0.0, 0.0, 0));
        fling.add_sample(ContactSample::new(50.0, 0.0, 10));
        let down = ContactSample::new(0.0, 0.0, 0);
        fling.release(down, down.at(10), 10.0);

        fling.reset();
        assert!(fling.estimator().is_empty());
        let event = fling.release(down, down.at(20), 10.0);
        assert_eq!(
            event,
            GestureEvent::Fling {
                down,
                up: down.at(20),
                vx: 0.0,
                vy: 0.0
            }
        );
    }
}
