//! Critically damped smoothing
//!
//! Elements ease toward their wave target instead of jumping there on every
//! scroll update. The follower is a spring with damping fixed at the critical
//! value, so it settles as fast as possible without overshooting.

/// Default time for a follower to close most of the gap to its target.
pub const DEFAULT_SMOOTH_TIME: f64 = 0.35;

// Within half a pixel and under 5px/s the remaining motion is invisible.
const EPSILON: f64 = 0.5;
const VELOCITY_EPSILON: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    value: f64,
    velocity: f64,
    target: f64,
    smooth_time: f64,
}

impl Follower {
    pub fn new(initial: f64) -> Self {
        Self::with_smooth_time(initial, DEFAULT_SMOOTH_TIME)
    }

    pub fn with_smooth_time(initial: f64, smooth_time: f64) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            smooth_time: smooth_time.max(1e-4),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` and stop.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if self.is_settled() {
            self.snap(self.target);
            return;
        }
        if dt <= 0.0 {
            return;
        }

        // Closed-form step of a critically damped spring with
        // omega = 2 / smooth_time; exp(-x) uses a Pade-style approximation.
        let omega = 2.0 / self.smooth_time;
        let x = omega * dt;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
        let change = self.value - self.target;
        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * decay;
        self.value = self.target + (change + temp) * decay;

        // The approximation can cross the target on large steps.
        if change != 0.0 && (change < 0.0) == (self.value > self.target) {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_to_target() {
        let mut follower = Follower::new(0.0);
        follower.set_target(300.0);

        // 3 seconds at 60fps
        for _ in 0..180 {
            follower.step(1.0 / 60.0);
        }

        assert!(follower.is_settled());
        assert!((follower.value() - 300.0).abs() < 0.5);
    }

    #[test]
    fn never_overshoots() {
        let mut follower = Follower::new(0.0);
        follower.set_target(100.0);
        for _ in 0..240 {
            follower.step(1.0 / 60.0);
            assert!(follower.value() <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn stable_with_large_steps() {
        let mut follower = Follower::new(0.0);
        follower.set_target(-1000.0);
        for _ in 0..50 {
            follower.step(0.5);
            assert!(follower.value().is_finite());
            assert!(follower.value() >= -1000.0 - 1e-6 && follower.value() <= 0.0);
        }
        assert!(follower.is_settled());
    }

    #[test]
    fn retarget_keeps_velocity() {
        let mut follower = Follower::new(0.0);
        follower.set_target(200.0);
        for _ in 0..5 {
            follower.step(1.0 / 60.0);
        }
        let velocity = follower.velocity();
        assert!(velocity > 0.0);

        follower.set_target(50.0);
        assert_eq!(follower.velocity(), velocity);
    }

    #[test]
    fn snap_stops_motion() {
        let mut follower = Follower::new(10.0);
        follower.set_target(90.0);
        follower.step(1.0 / 60.0);
        follower.snap(42.0);
        assert_eq!(follower.value(), 42.0);
        assert_eq!(follower.target(), 42.0);
        assert!(follower.is_settled());
    }
}
