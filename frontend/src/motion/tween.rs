use super::Easing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenConfig {
    pub duration_secs: f64,
    pub easing: Easing,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            easing: Easing::QuartOut,
        }
    }
}

/// What happens when the trigger gate closes and opens again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetriggerPolicy {
    /// The first opening starts the animation; later gate changes are ignored.
    #[default]
    Once,
    /// Closing pins the value back to the start; reopening plays it again.
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    /// Gate opened, waiting for the first frame to stamp the start time.
    Armed,
    Running { started_at: f64 },
    Finished,
    Cancelled,
}

/// Whether the caller should request another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Finished,
    /// Nothing to animate; the frame was ignored.
    Stopped,
}

/// Snapshot of a counter for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenState {
    pub current: f64,
    pub start: f64,
    pub end: f64,
    pub elapsed_fraction: f64,
}

/// Number that eases from `start` to `end` once its gate opens.
///
/// The counter is driven entirely by `on_frame(now)` with host timestamps in
/// milliseconds, so it can be stepped by `requestAnimationFrame` or by a test.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenedCounter {
    start: f64,
    end: f64,
    config: TweenConfig,
    policy: RetriggerPolicy,
    phase: Phase,
    gate: bool,
    current: f64,
    fraction: f64,
}

impl TweenedCounter {
    pub fn new(start: f64, end: f64, config: TweenConfig) -> Self {
        Self {
            start,
            end,
            config,
            policy: RetriggerPolicy::Once,
            phase: Phase::Idle,
            gate: false,
            current: start,
            fraction: 0.0,
        }
    }

    pub fn with_policy(mut self, policy: RetriggerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_gate(&mut self, open: bool) {
        let was_open = self.gate;
        self.gate = open;
        if self.phase == Phase::Cancelled || was_open == open {
            return;
        }

        match (self.policy, open, self.phase) {
            (_, true, Phase::Idle) => self.phase = Phase::Armed,
            (RetriggerPolicy::Restart, false, _) => self.reset(),
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.current = self.start;
        self.fraction = 0.0;
    }

    /// True while frames must keep coming.
    pub fn wants_frame(&self) -> bool {
        matches!(self.phase, Phase::Armed | Phase::Running { .. })
    }

    pub fn on_frame(&mut self, now: f64) -> FrameOutcome {
        let started_at = match self.phase {
            Phase::Armed => {
                self.phase = Phase::Running { started_at: now };
                now
            }
            Phase::Running { started_at } => started_at,
            Phase::Idle | Phase::Finished | Phase::Cancelled => return FrameOutcome::Stopped,
        };

        let duration_ms = self.config.duration_secs * 1000.0;
        self.fraction = if duration_ms > 0.0 {
            ((now - started_at) / duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if self.fraction >= 1.0 {
            self.current = self.end;
            self.phase = Phase::Finished;
            return FrameOutcome::Finished;
        }

        let progress = self.config.easing.ease(self.fraction);
        self.current = (self.start + (self.end - self.start) * progress).floor();
        FrameOutcome::Continue
    }

    /// Teardown. Frames delivered afterwards are ignored.
    pub fn cancel(&mut self) {
        self.phase = Phase::Cancelled;
    }

    pub fn state(&self) -> TweenState {
        TweenState {
            current: self.current,
            start: self.start,
            end: self.end,
            elapsed_fraction: self.fraction,
        }
    }
}

impl TweenState {
    /// Integer shown on screen; truncated, never rounded.
    pub fn displayed(&self) -> i64 {
        self.current.floor() as i64
    }
}

pub fn format_count(prefix: &str, value: i64, suffix: &str) -> String {
    format!("{}{}{}", prefix, value, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(start: f64, end: f64) -> TweenedCounter {
        TweenedCounter::new(start, end, TweenConfig::default())
    }

    #[test]
    fn closed_gate_pins_start_and_requests_nothing() {
        let mut counter = counter(5.0, 50.0);
        assert!(!counter.wants_frame());
        assert_eq!(counter.on_frame(1_000.0), FrameOutcome::Stopped);
        assert_eq!(counter.state().displayed(), 5);
    }

    #[test]
    fn converges_exactly_on_the_end_value() {
        let mut counter = counter(0.0, 2.0);
        counter.set_gate(true);
        assert_eq!(counter.on_frame(500.0), FrameOutcome::Continue);
        assert_eq!(counter.state().displayed(), 0);
        assert_eq!(counter.on_frame(2_500.0), FrameOutcome::Finished);
        assert_eq!(counter.state().displayed(), 2);
        assert_eq!(counter.state().current, 2.0);
    }

    #[test]
    fn late_frame_still_lands_on_end() {
        let mut counter = counter(0.0, 45.0);
        counter.set_gate(true);
        counter.on_frame(0.0);
        assert_eq!(counter.on_frame(9_000.0), FrameOutcome::Finished);
        assert_eq!(format_count("$", counter.state().displayed(), "K+"), "$45K+");
    }

    #[test]
    fn finished_counter_is_frozen() {
        let mut counter = counter(0.0, 500.0);
        counter.set_gate(true);
        counter.on_frame(0.0);
        counter.on_frame(2_000.0);
        assert!(!counter.wants_frame());
        let frozen = counter.state();
        assert_eq!(counter.on_frame(3_000.0), FrameOutcome::Stopped);
        assert_eq!(counter.state(), frozen);
        assert_eq!(frozen.elapsed_fraction, 1.0);
    }

    #[test]
    fn rises_monotonically() {
        let mut counter = counter(0.0, 500.0);
        counter.set_gate(true);
        let mut previous = f64::MIN;
        for frame in 0..=130 {
            counter.on_frame(frame as f64 * 16.0);
            assert!(counter.state().current >= previous);
            previous = counter.state().current;
        }
        assert_eq!(counter.state().current, 500.0);
    }

    #[test]
    fn falls_monotonically() {
        let mut counter = counter(100.0, -20.0);
        counter.set_gate(true);
        let mut previous = f64::MAX;
        for frame in 0..=130 {
            counter.on_frame(frame as f64 * 16.0);
            assert!(counter.state().current <= previous);
            previous = counter.state().current;
        }
        assert_eq!(counter.state().displayed(), -20);
    }

    #[test]
    fn equal_endpoints_finish_on_that_value() {
        let mut counter = counter(7.0, 7.0);
        counter.set_gate(true);
        counter.on_frame(0.0);
        counter.on_frame(2_000.0);
        assert_eq!(counter.state().displayed(), 7);
    }

    #[test]
    fn cancel_mid_animation_freezes_value() {
        let mut counter = counter(0.0, 1_000.0);
        counter.set_gate(true);
        counter.on_frame(0.0);
        counter.on_frame(800.0);
        assert!((counter.state().elapsed_fraction - 0.4).abs() < 1e-9);
        let before = counter.state().current;

        counter.cancel();
        assert!(!counter.wants_frame());
        assert_eq!(counter.on_frame(1_200.0), FrameOutcome::Stopped);
        assert_eq!(counter.on_frame(5_000.0), FrameOutcome::Stopped);
        assert_eq!(counter.state().current, before);
    }

    #[test]
    fn once_policy_ignores_gate_changes_after_trigger() {
        let mut counter = counter(0.0, 10.0);
        counter.set_gate(true);
        counter.on_frame(0.0);
        counter.on_frame(2_000.0);
        counter.set_gate(false);
        counter.set_gate(true);
        assert!(!counter.wants_frame());
        assert_eq!(counter.state().displayed(), 10);
    }

    #[test]
    fn restart_policy_replays_on_retrigger() {
        let mut counter = counter(0.0, 10.0).with_policy(RetriggerPolicy::Restart);
        counter.set_gate(true);
        counter.on_frame(0.0);
        counter.on_frame(2_000.0);
        counter.set_gate(false);
        assert_eq!(counter.state().displayed(), 0);
        counter.set_gate(true);
        assert!(counter.wants_frame());
        counter.on_frame(10_000.0);
        assert_eq!(counter.on_frame(12_000.0), FrameOutcome::Finished);
        assert_eq!(counter.state().displayed(), 10);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let config = TweenConfig {
            duration_secs: 0.0,
            ..TweenConfig::default()
        };
        let mut counter = TweenedCounter::new(1.0, 3.0, config);
        counter.set_gate(true);
        assert_eq!(counter.on_frame(42.0), FrameOutcome::Finished);
        assert_eq!(counter.state().displayed(), 3);
    }
}
