use super::Easing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Extra delay per token, in seconds.
    pub step_secs: f64,
    pub transition_secs: f64,
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            step_secs: 0.1,
            transition_secs: 0.8,
            easing: Easing::REVEAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// Once triggered, tokens never hide again.
    #[default]
    Once,
    /// Tokens follow the trigger and hide when it drops.
    Mirror,
}

/// Per-token view of a sequence at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    /// Transition finished; the token sits in its final pose.
    pub visible: bool,
    pub applied_delay: f64,
    /// Eased transition progress in `[0, 1]`.
    pub progress: f64,
}

/// Naive split on single spaces. Runs of spaces produce empty tokens;
/// an empty string produces none.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(' ').map(str::to_string).collect()
}

/// Staggers a word-by-word entrance behind a single trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSequencer {
    tokens: Vec<String>,
    base_delay: f64,
    config: RevealConfig,
    mode: RevealMode,
    triggered_at: Option<f64>,
}

impl RevealSequencer {
    pub fn new(text: &str, base_delay: f64, config: RevealConfig) -> Self {
        Self {
            tokens: tokenize(text),
            base_delay,
            config,
            mode: RevealMode::Once,
            triggered_at: None,
        }
    }

    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.base_delay + index as f64 * self.config.step_secs
    }

    /// Feeds the trigger; `now` is in seconds on the caller's clock.
    pub fn set_trigger(&mut self, on: bool, now: f64) {
        match (on, self.triggered_at, self.mode) {
            (true, None, _) => self.triggered_at = Some(now),
            (false, Some(_), RevealMode::Mirror) => self.triggered_at = None,
            _ => {}
        }
    }

    pub fn token_state(&self, index: usize, now: f64) -> RevealState {
        let applied_delay = self.delay_for(index);
        let progress = match self.triggered_at {
            None => 0.0,
            Some(at) => {
                let elapsed = now - at - applied_delay;
                if self.config.transition_secs <= 0.0 {
                    if elapsed >= 0.0 { 1.0 } else { 0.0 }
                } else {
                    self.config
                        .easing
                        .ease(elapsed / self.config.transition_secs)
                }
            }
        };
        RevealState {
            visible: progress >= 1.0,
            applied_delay,
            progress,
        }
    }

    /// Inline style for token `index` at `now` seconds. The browser runs the
    /// transition; the hidden pose is pushed down and transparent. Tokens that
    /// have settled drop their compositor hint.
    pub fn pose_style(&self, index: usize, now: f64) -> String {
        let state = self.token_state(index, now);
        let (offset, opacity) = if self.is_triggered() {
            ("0", 1)
        } else {
            ("100px", 0)
        };
        let timing = format!(
            "{}s {} {:.2}s",
            self.config.transition_secs,
            self.config.easing.css(),
            state.applied_delay
        );
        format!(
            "display: inline-block; transform: translateY({}); opacity: {}; transition: transform {}, opacity {};{}",
            offset,
            opacity,
            timing,
            timing,
            if state.visible { "" } else { " will-change: transform, opacity;" }
        )
    }
}
