// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Single-Shot Handoff Classifier
// ─────────────────────────────────────────────────────────────────────
//! Stream-independent takeover assessment.
//!
//! Where the hierarchical engine extrapolates the deadline from a CRI
//! trend, this surface derives the collision-remaining time from a
//! discrete risk level (base-time lookup, scaled down as the risk value
//! rises) and classifies the margin against a configurable interval
//! into four bands:
//!
//!   margin ≥ upper        → success with margin
//!   lower ≤ margin < upper → success, no slack
//!   0 ≤ margin < lower     → timeout, takeover attempted
//!   margin < 0             → failure, collision precedes takeover
//!
//! Both surfaces share the margin-comparison contract; only the source
//! of the remaining time differs.

use takeover_types::{
    clamp_value, round2, DecisionConfig, HandoffAssessment, HandoffOutcome, RiskLevel,
};

/// Four-band single-shot classifier.
pub struct HandoffClassifier {
    config: DecisionConfig,
}

impl HandoffClassifier {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    /// Physical collision-remaining time for a discrete risk level,
    /// modulated by the continuous risk value: at risk 1.0 the base
    /// time collapses to zero.
    pub fn collision_remaining(&self, level: RiskLevel, risk_value: f64) -> f64 {
        let base = match level {
            RiskLevel::Low => self.config.collision_base_low_s,
            RiskLevel::Medium => self.config.collision_base_medium_s,
            RiskLevel::High => self.config.collision_base_high_s,
        };
        round2(base * (1.0 - clamp_value(risk_value, 0.0, 1.0)))
    }

    /// Classify a takeover-time estimate against a known remaining
    /// time.
    pub fn classify(&self, collision_remaining_s: f64, takeover_time_s: f64) -> HandoffAssessment {
        let margin = round2(collision_remaining_s - takeover_time_s);
        let outcome = if margin >= self.config.handoff_upper_s {
            HandoffOutcome::SuccessWithMargin
        } else if margin >= self.config.handoff_lower_s {
            HandoffOutcome::SuccessCritical
        } else if margin >= 0.0 {
            HandoffOutcome::TimeoutAttempted
        } else {
            HandoffOutcome::Failure
        };
        HandoffAssessment {
            takeover_time_s,
            collision_remaining_s,
            margin_s: margin,
            outcome,
        }
    }

    /// Single-shot assessment from a discrete risk observation.
    pub fn assess(
        &self,
        level: RiskLevel,
        risk_value: f64,
        takeover_time_s: f64,
    ) -> HandoffAssessment {
        self.classify(self.collision_remaining(level, risk_value), takeover_time_s)
    }

    /// Streaming mode: assess every observation against one takeover
    /// estimate.
    pub fn assess_stream<I>(&self, samples: I, takeover_time_s: f64) -> Vec<HandoffAssessment>
    where
        I: IntoIterator<Item = (RiskLevel, f64)>,
    {
        samples
            .into_iter()
            .map(|(level, risk_value)| self.assess(level, risk_value, takeover_time_s))
            .collect()
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> HandoffClassifier {
        HandoffClassifier::new(DecisionConfig::default())
    }

    // ── Margin bands ──────────────────────────────────────────────

    #[test]
    fn test_success_with_margin() {
        let assessment = classifier().classify(60.0, 50.0);
        assert!((assessment.margin_s - 10.0).abs() < 1e-9);
        assert_eq!(assessment.outcome, HandoffOutcome::SuccessWithMargin);
    }

    #[test]
    fn test_upper_edge_inclusive() {
        let assessment = classifier().classify(55.0, 50.0);
        assert_eq!(assessment.outcome, HandoffOutcome::SuccessWithMargin);
    }

    #[test]
    fn test_inside_interval_is_critical_success() {
        let assessment = classifier().classify(54.0, 50.0);
        assert_eq!(assessment.outcome, HandoffOutcome::SuccessCritical);
    }

    #[test]
    fn test_zero_margin_with_zero_lower_is_critical_success() {
        // With lower = 0 the timeout band is empty.
        let assessment = classifier().classify(50.0, 50.0);
        assert_eq!(assessment.outcome, HandoffOutcome::SuccessCritical);
    }

    #[test]
    fn test_timeout_band_with_raised_lower_edge() {
        let mut config = DecisionConfig::default();
        config.handoff_lower_s = 2.0;
        let classifier = HandoffClassifier::new(config);
        assert_eq!(
            classifier.classify(51.0, 50.0).outcome,
            HandoffOutcome::TimeoutAttempted
        );
        assert_eq!(
            classifier.classify(52.0, 50.0).outcome,
            HandoffOutcome::SuccessCritical
        );
    }

    #[test]
    fn test_negative_margin_is_failure() {
        let assessment = classifier().classify(49.0, 50.0);
        assert_eq!(assessment.outcome, HandoffOutcome::Failure);
    }

    // ── Risk-level lookup ─────────────────────────────────────────

    #[test]
    fn test_collision_remaining_lookup() {
        let c = classifier();
        assert!((c.collision_remaining(RiskLevel::Low, 0.0) - 120.0).abs() < 1e-9);
        assert!((c.collision_remaining(RiskLevel::Medium, 0.5) - 30.0).abs() < 1e-9);
        assert!(c.collision_remaining(RiskLevel::High, 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_risk_value_clamped() {
        let c = classifier();
        assert!(c.collision_remaining(RiskLevel::Low, 1.5).abs() < 1e-9);
        assert!((c.collision_remaining(RiskLevel::Low, -2.0) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_assess_combines_lookup_and_bands() {
        let c = classifier();
        // medium at 0.5 → 30 s remaining; takeover 20 s → margin 10
        let assessment = c.assess(RiskLevel::Medium, 0.5, 20.0);
        assert_eq!(assessment.outcome, HandoffOutcome::SuccessWithMargin);
    }

    #[test]
    fn test_stream_mode() {
        let c = classifier();
        let outcomes: Vec<_> = c
            .assess_stream(
                [
                    (RiskLevel::Low, 0.1),
                    (RiskLevel::Medium, 0.5),
                    (RiskLevel::High, 0.9),
                ],
                25.0,
            )
            .into_iter()
            .map(|a| a.outcome)
            .collect();
        assert_eq!(
            outcomes,
            vec![
                HandoffOutcome::SuccessWithMargin,
                HandoffOutcome::SuccessWithMargin,
                HandoffOutcome::Failure,
            ]
        );
    }
}
