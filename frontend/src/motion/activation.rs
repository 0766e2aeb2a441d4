use crate::error::ActivationError;

/// Tuning for the scroll-driven showcase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationConfig {
    /// Fraction of a region that must sit inside the shrunken viewport.
    pub threshold: f64,
    /// Share of the viewport height cut from the top before testing.
    pub margin_top: f64,
    pub margin_bottom: f64,
    /// Carousel period when no intersection signal is available.
    pub interval_ms: u32,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            margin_top: 0.2,
            margin_bottom: 0.2,
            interval_ms: 5000,
        }
    }
}

impl ActivationConfig {
    /// `rootMargin` string for an `IntersectionObserver`. Negative margins
    /// shrink the viewport, leaving a dead zone at both edges.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.margin_top),
            percent(self.margin_bottom)
        )
    }
}

fn percent(fraction: f64) -> f64 {
    (fraction.clamp(0.0, 1.0) * 100.0).round()
}

/// One intersection report for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionObservation {
    pub index: usize,
    pub ratio: f64,
    pub is_intersecting: bool,
    /// Host timestamp in milliseconds (same clock as `performance.now()`).
    pub time: f64,
}

/// Keeps exactly one of `len` ordered regions active.
///
/// Writes are ordered by host timestamp: a manual `select` at time `t`
/// shadows any observation stamped earlier than `t` that is still in flight.
/// Timer ticks carry no timestamp and always apply.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationController {
    len: usize,
    active: usize,
    threshold: f64,
    last_write: f64,
}

impl ActivationController {
    pub fn new(len: usize, threshold: f64) -> Result<Self, ActivationError> {
        if len == 0 {
            return Err(ActivationError::NoRegions);
        }
        Ok(Self {
            len,
            active: 0,
            threshold: threshold.clamp(0.0, 1.0),
            last_write: f64::NEG_INFINITY,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    fn check(&self, index: usize) -> Result<(), ActivationError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ActivationError::InvalidIndex {
                index,
                len: self.len,
            })
        }
    }

    /// Explicit activation, e.g. from an indicator dot.
    pub fn select(&mut self, index: usize, at: f64) -> Result<(), ActivationError> {
        self.check(index)?;
        self.active = index;
        self.last_write = self.last_write.max(at);
        Ok(())
    }

    fn qualifies(&self, observation: &RegionObservation) -> bool {
        observation.is_intersecting
            && observation.ratio >= self.threshold
            && observation.time >= self.last_write
    }

    /// Applies a single observation. Returns whether it changed the writer
    /// state (an observation below threshold or older than the last write is
    /// dropped).
    pub fn observe(&mut self, observation: RegionObservation) -> Result<bool, ActivationError> {
        self.check(observation.index)?;
        if !self.qualifies(&observation) {
            return Ok(false);
        }
        self.active = observation.index;
        self.last_write = observation.time;
        Ok(true)
    }

    /// Applies one observer delivery. Among the qualifying entries the most
    /// visible region wins; equal ratios go to the smaller index. A batch
    /// naming any unknown region is rejected as a whole.
    pub fn observe_batch(
        &mut self,
        batch: &[RegionObservation],
    ) -> Result<bool, ActivationError> {
        for observation in batch {
            self.check(observation.index)?;
        }

        let winner = batch
            .iter()
            .filter(|observation| self.qualifies(observation))
            .fold(None::<&RegionObservation>, |best, candidate| match best {
                Some(best)
                    if best.ratio > candidate.ratio
                        || (best.ratio == candidate.ratio && best.index <= candidate.index) =>
                {
                    Some(best)
                }
                _ => Some(candidate),
            });

        match winner.copied() {
            Some(winner) => self.observe(winner),
            None => Ok(false),
        }
    }

    /// Timer fallback: one step forward, wrapping past the last region.
    pub fn tick(&mut self) -> usize {
        self.active = (self.active + 1) % self.len;
        self.active
    }

    /// Region list changed size. The active index survives if it is still
    /// valid, otherwise the first region becomes active.
    pub fn resize(&mut self, len: usize) -> Result<(), ActivationError> {
        if len == 0 {
            return Err(ActivationError::NoRegions);
        }
        self.len = len;
        if self.active >= len {
            self.active = 0;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seen(index: usize, ratio: f64, time: f64) -> RegionObservation {
        RegionObservation {
            index,
            ratio,
            is_intersecting: true,
            time,
        }
    }

    #[test]
    fn empty_region_list_is_rejected() {
        assert_eq!(
            ActivationController::new(0, 0.5),
            Err(ActivationError::NoRegions)
        );
    }

    #[test]
    fn starts_on_the_first_region() {
        let controller = ActivationController::new(7, 0.5).unwrap();
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.len(), 7);
    }

    #[test]
    fn out_of_range_select_leaves_state_alone() {
        let mut controller = ActivationController::new(3, 0.5).unwrap();
        controller.select(2, 10.0).unwrap();
        assert_eq!(
            controller.select(3, 20.0),
            Err(ActivationError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn observations_below_threshold_are_ignored() {
        let mut controller = ActivationController::new(3, 0.5).unwrap();
        assert_eq!(controller.observe(seen(1, 0.49, 5.0)), Ok(false));
        let mut leaving = seen(2, 0.9, 6.0);
        leaving.is_intersecting = false;
        assert_eq!(controller.observe(leaving), Ok(false));
        assert_eq!(controller.active_index(), 0);

        assert_eq!(controller.observe(seen(1, 0.5, 7.0)), Ok(true));
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn last_observation_wins() {
        let mut controller = ActivationController::new(4, 0.5).unwrap();
        controller.observe(seen(3, 0.8, 1.0)).unwrap();
        controller.observe(seen(1, 0.6, 2.0)).unwrap();
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn stale_observation_cannot_undo_a_manual_select() {
        let mut controller = ActivationController::new(5, 0.5).unwrap();
        controller.select(4, 100.0).unwrap();
        // Observed at t=90 but delivered after the click.
        assert_eq!(controller.observe(seen(1, 0.9, 90.0)), Ok(false));
        assert_eq!(controller.active_index(), 4);
        // Fresh scrolling takes over again.
        assert_eq!(controller.observe(seen(2, 0.9, 120.0)), Ok(true));
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn batch_prefers_the_most_visible_region() {
        let mut controller = ActivationController::new(6, 0.5).unwrap();
        let batch = [seen(4, 0.55, 10.0), seen(2, 0.9, 10.0), seen(3, 0.7, 10.0)];
        assert_eq!(controller.observe_batch(&batch), Ok(true));
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn batch_ties_go_to_the_smaller_index() {
        let mut controller = ActivationController::new(6, 0.5).unwrap();
        let batch = [seen(5, 0.75, 10.0), seen(1, 0.75, 10.0), seen(3, 0.75, 10.0)];
        controller.observe_batch(&batch).unwrap();
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn batch_with_unknown_region_is_rejected() {
        let mut controller = ActivationController::new(2, 0.5).unwrap();
        let batch = [seen(1, 0.9, 1.0), seen(9, 0.9, 1.0)];
        assert_eq!(
            controller.observe_batch(&batch),
            Err(ActivationError::InvalidIndex { index: 9, len: 2 })
        );
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn batch_without_qualifying_entries_changes_nothing() {
        let mut controller = ActivationController::new(3, 0.5).unwrap();
        controller.select(2, 0.0).unwrap();
        assert_eq!(controller.observe_batch(&[seen(0, 0.1, 5.0)]), Ok(false));
        assert_eq!(controller.observe_batch(&[]), Ok(false));
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn ticks_wrap_around() {
        let mut controller = ActivationController::new(3, 0.5).unwrap();
        assert_eq!(controller.tick(), 1);
        assert_eq!(controller.tick(), 2);
        assert_eq!(controller.tick(), 0);
    }

    #[test]
    fn tick_continues_from_a_manual_select() {
        let mut controller = ActivationController::new(7, 0.5).unwrap();
        controller.select(6, 0.0).unwrap();
        assert_eq!(controller.tick(), 0);
    }

    #[test]
    fn shrinking_past_the_active_region_resets_to_first() {
        let mut controller = ActivationController::new(7, 0.5).unwrap();
        controller.select(5, 0.0).unwrap();
        controller.resize(6).unwrap();
        assert_eq!(controller.active_index(), 5);
        controller.resize(3).unwrap();
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.len(), 3);
        assert_eq!(controller.resize(0), Err(ActivationError::NoRegions));
        assert_eq!(controller.len(), 3);
    }

    #[test]
    fn root_margin_matches_dead_zone() {
        assert_eq!(ActivationConfig::default().root_margin(), "-20% 0px -20% 0px");
    }

    proptest! {
        #[test]
        fn select_always_lands(len in 1usize..64, picks in proptest::collection::vec(0usize..64, 1..20)) {
            let mut controller = ActivationController::new(len, 0.5).unwrap();
            for (step, pick) in picks.into_iter().enumerate() {
                let k = pick % len;
                controller.select(k, step as f64).unwrap();
                prop_assert_eq!(controller.active_index(), k);
            }
        }

        #[test]
        fn ticks_count_modulo_len(len in 1usize..32, ticks in 0usize..500) {
            let mut controller = ActivationController::new(len, 0.5).unwrap();
            for _ in 0..ticks {
                controller.tick();
            }
            prop_assert_eq!(controller.active_index(), ticks % len);
        }
    }
}
