/// Maps `value` from `input` onto `output`, clamped to the output range.
///
/// Reversed ranges work in both positions, so `[0.0, 0.3] -> [1.0, 0.8]`
/// fades something out as the page scrolls down.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_start == in_end {
        return if value < in_start { out_start } else { out_end };
    }
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

const MAX_STEP_SECS: f64 = 1.0 / 120.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

/// Damped spring that chases a moving target, one frame at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advances the simulation by `dt_secs`, split into small sub-steps so a
    /// long frame (tab switch) cannot make the spring explode.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if dt_secs <= 0.0 || self.is_settled() {
            return self.position;
        }
        let mut remaining = dt_secs.min(1.0);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SECS);
            let displacement = self.position - self.target;
            let force = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += force / self.mass * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(50.0, 20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_clamps_outside_the_input() {
        assert_eq!(map_range(-1.0, (0.0, 1.0), (0.0, 100.0)), 0.0);
        assert_eq!(map_range(0.5, (0.0, 1.0), (0.0, 100.0)), 50.0);
        assert_eq!(map_range(4.0, (0.0, 1.0), (0.0, 100.0)), 100.0);
    }

    #[test]
    fn map_range_handles_descending_outputs() {
        let opacity = map_range(0.15, (0.0, 0.3), (1.0, 0.8));
        assert!((opacity - 0.9).abs() < 1e-9);
        assert!((map_range(0.9, (0.6, 1.0), (0.0, -200.0)) + 150.0).abs() < 1e-9);
    }

    #[test]
    fn map_range_with_degenerate_input_steps() {
        assert_eq!(map_range(0.1, (0.5, 0.5), (0.0, 1.0)), 0.0);
        assert_eq!(map_range(0.5, (0.5, 0.5), (0.0, 1.0)), 1.0);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::default();
        spring.set_target(640.0);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.step(0.0), 640.0);
    }

    #[test]
    fn overdamped_spring_does_not_overshoot() {
        let mut spring = Spring::default();
        spring.set_target(100.0);
        for _ in 0..300 {
            let position = spring.step(1.0 / 60.0);
            assert!(position <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut spring = Spring::default();
        spring.set_target(10.0);
        assert_eq!(spring.step(0.0), 0.0);
    }
}
