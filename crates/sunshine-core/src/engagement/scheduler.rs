//! Conversion trigger scheduling heuristic.
//!
//! Decides when the widget's attention-getting affordance should appear.
//! First-time visitors on high-intent pages get the randomized conversion
//! delay; everyone else gets a fixed ambient delay. The decision itself is
//! pure; firing the timer and persisting the one-shot flag belong to the
//! orchestrator.

use super::model::EngagementState;
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Pages with high conversion intent, eligible for the promotional delay.
pub const HIGH_INTENT_PATHS: &[&str] = &[
    "/",
    "/post-job",
    "/sell-business",
    "/signup",
    "/pricing",
    "/artists",
    "/salons",
];

/// The scheduling decision for the current page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPlan {
    /// First-time visitor on a high-intent page: show the conversion
    /// popup after a randomized delay. Firing it sets the durable flag.
    Conversion {
        /// Delay before the affordance appears.
        delay: Duration,
    },
    /// Every other case: a fixed, shorter ambient delay.
    Ambient {
        /// Delay before the affordance appears.
        delay: Duration,
    },
}

impl TriggerPlan {
    /// The delay regardless of variant.
    pub fn delay(&self) -> Duration {
        match self {
            Self::Conversion { delay } | Self::Ambient { delay } => *delay,
        }
    }

    /// Whether this is the conversion path.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }
}

/// Page/time-based heuristic for proactively surfacing the widget.
#[derive(Debug, Clone)]
pub struct ConversionTrigger {
    /// Bounded window (seconds) for the randomized conversion delay.
    conversion_window_secs: RangeInclusive<u64>,
    /// Fixed delay for the ambient path.
    ambient_delay: Duration,
}

impl Default for ConversionTrigger {
    fn default() -> Self {
        Self {
            conversion_window_secs: 18..=35,
            ambient_delay: Duration::from_secs(8),
        }
    }
}

impl ConversionTrigger {
    /// Creates a trigger with the default timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a trigger with explicit timing (used by tests).
    pub fn with_timing(
        conversion_window_secs: RangeInclusive<u64>,
        ambient_delay: Duration,
    ) -> Self {
        Self {
            conversion_window_secs,
            ambient_delay,
        }
    }

    /// Plans the attention affordance for the current page load.
    ///
    /// The conversion path requires all three: a high-intent page, the
    /// durable popup flag unset, and no existing session identity. Once
    /// the flag is set it never re-arms, even for a brand-new session.
    pub fn plan<R: Rng>(
        &self,
        path: &str,
        state: &EngagementState,
        has_identity: bool,
        rng: &mut R,
    ) -> TriggerPlan {
        let qualifies = HIGH_INTENT_PATHS.contains(&path) && !state.popup_shown && !has_identity;

        if qualifies {
            let secs = rng.gen_range(self.conversion_window_secs.clone());
            TriggerPlan::Conversion {
                delay: Duration::from_secs(secs),
            }
        } else {
            TriggerPlan::Ambient {
                delay: self.ambient_delay,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fresh_state() -> EngagementState {
        EngagementState::default()
    }

    #[test]
    fn test_qualified_visit_gets_conversion_delay_in_window() {
        let trigger = ConversionTrigger::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = trigger.plan("/post-job", &fresh_state(), false, &mut rng);
            assert!(plan.is_conversion());
            let secs = plan.delay().as_secs();
            assert!((18..=35).contains(&secs), "delay out of window: {}", secs);
        }
    }

    #[test]
    fn test_popup_flag_never_rearms_conversion_path() {
        let trigger = ConversionTrigger::new();
        let shown = EngagementState { popup_shown: true };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            // Brand-new session (no identity) on a high-intent page.
            let plan = trigger.plan("/", &shown, false, &mut rng);
            assert!(!plan.is_conversion());
        }
    }

    #[test]
    fn test_existing_identity_gets_ambient_delay() {
        let trigger = ConversionTrigger::new();
        let mut rng = StdRng::seed_from_u64(3);
        let plan = trigger.plan("/", &fresh_state(), true, &mut rng);
        assert_eq!(
            plan,
            TriggerPlan::Ambient {
                delay: Duration::from_secs(8)
            }
        );
    }

    #[test]
    fn test_low_intent_page_gets_ambient_delay() {
        let trigger = ConversionTrigger::new();
        let mut rng = StdRng::seed_from_u64(4);
        let plan = trigger.plan("/terms", &fresh_state(), false, &mut rng);
        assert!(!plan.is_conversion());
    }
}
