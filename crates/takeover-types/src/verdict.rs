// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Result Types
// ─────────────────────────────────────────────────────────────────────
//! Decision-path result types.
//!
//! Domain failure modes are explicit variants, not errors: a cold-start
//! window, a flat risk trend, and a ship not making way each get their
//! own variant so callers can tell "not enough data yet" apart from a
//! genuine zero margin.

use serde::{Deserialize, Serialize};

use crate::state::ControlMode;

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to the nearest
/// bound.
#[inline]
pub fn clamp_value(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_value: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_value: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// Round to two decimal places (reporting precision for all times).
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Time-To-Critical-Risk prediction result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Ttcr {
    /// CRI is already at or above the critical limit.
    Critical,
    /// Too few samples in the window to fit a trend.
    ColdStart,
    /// Fitted slope at or below the noise floor; risk is not rising.
    NotIncreasing,
    /// Predicted seconds until CRI reaches the critical limit.
    Finite(f64),
}

impl Ttcr {
    /// Resolve to seconds: 0 at the deadline, the sentinel horizon when
    /// no deadline can be predicted.
    pub fn seconds(&self, horizon_s: f64) -> f64 {
        match self {
            Ttcr::Critical => 0.0,
            Ttcr::ColdStart | Ttcr::NotIncreasing => horizon_s,
            Ttcr::Finite(s) => *s,
        }
    }

    /// Whether a concrete deadline exists.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Ttcr::Critical | Ttcr::Finite(_))
    }
}

/// Maneuver component of a time budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ManeuverTime {
    /// Ship is not making way; the maneuver cannot be evaluated.
    NotUnderway,
    /// Clamped operation execution time.
    Seconds(f64),
}

impl ManeuverTime {
    /// Resolve to seconds, substituting the sentinel when not underway.
    pub fn seconds(&self, sentinel_s: f64) -> f64 {
        match self {
            ManeuverTime::NotUnderway => sentinel_s,
            ManeuverTime::Seconds(s) => *s,
        }
    }
}

/// Takeover time budget breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBudget {
    /// Cognitive preparation time, seconds.
    pub cognitive_s: f64,
    /// Operation execution time.
    pub maneuver: ManeuverTime,
    /// Communication delay for the active mode, seconds.
    pub comm_delay_s: f64,
    /// Total budget with the maneuver sentinel resolved, seconds.
    pub total_s: f64,
}

impl TimeBudget {
    pub fn compose(
        cognitive_s: f64,
        maneuver: ManeuverTime,
        comm_delay_s: f64,
        sentinel_s: f64,
    ) -> Self {
        Self {
            cognitive_s,
            maneuver,
            comm_delay_s,
            total_s: round2(cognitive_s + maneuver.seconds(sentinel_s) + comm_delay_s),
        }
    }
}

/// Outcome category of a streaming evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Autonomous tier, deadline beyond the planning horizon.
    SafeCruise,
    /// Autonomous tier, avoidance planning underway.
    AvoidancePlanning,
    /// Takeover fits inside the remaining time with margin to spare.
    TakeoverRequested,
    /// Takeover cannot complete in time; minimum risk maneuver.
    EmergencyFallback,
}

/// Verdict produced for each evaluated sample. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Control tier selected by the authority bands.
    pub authority: ControlMode,
    /// TTCR prediction for this sample.
    pub remaining: Ttcr,
    /// `remaining` resolved to seconds for presentation.
    pub remaining_s: f64,
    /// Demand-side budget. `None` for autonomous verdicts, where no
    /// takeover evaluation is performed.
    pub budget: Option<TimeBudget>,
    /// Remaining minus budget-plus-allowance. `None` for autonomous
    /// verdicts.
    pub margin_s: Option<f64>,
    /// Outcome category.
    pub outcome: Outcome,
    /// Recommended action text.
    pub action: String,
}

/// Discrete risk level keying the single-shot collision-time lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Four-band outcome of the single-shot handoff classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandoffOutcome {
    /// Margin at or above the upper edge of the interval.
    SuccessWithMargin,
    /// Margin inside the interval: completed, but with no slack.
    SuccessCritical,
    /// Margin in [0, lower): attempted but out of time.
    TimeoutAttempted,
    /// Negative margin: collision precedes the takeover.
    Failure,
}

/// Single-shot handoff assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandoffAssessment {
    /// Total takeover time estimate, seconds.
    pub takeover_time_s: f64,
    /// Physical collision-remaining time, seconds.
    pub collision_remaining_s: f64,
    /// `collision_remaining_s - takeover_time_s`.
    pub margin_s: f64,
    /// Classified band.
    pub outcome: HandoffOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_nan() {
        assert_eq!(clamp_value(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_pos_inf() {
        assert_eq!(clamp_value(f64::INFINITY, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_neg_inf() {
        assert_eq!(clamp_value(f64::NEG_INFINITY, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_normal() {
        assert_eq!(clamp_value(0.75, 0.0, 1.0), 0.75);
        assert_eq!(clamp_value(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp_value(-0.3, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_round2() {
        assert!((round2(6.4999) - 6.5).abs() < 1e-9);
        assert!((round2(59.6667) - 59.67).abs() < 1e-9);
    }

    #[test]
    fn test_ttcr_seconds() {
        assert_eq!(Ttcr::Critical.seconds(999.0), 0.0);
        assert_eq!(Ttcr::ColdStart.seconds(999.0), 999.0);
        assert_eq!(Ttcr::NotIncreasing.seconds(999.0), 999.0);
        assert_eq!(Ttcr::Finite(6.5).seconds(999.0), 6.5);
    }

    #[test]
    fn test_ttcr_boundedness() {
        assert!(Ttcr::Critical.is_bounded());
        assert!(Ttcr::Finite(12.0).is_bounded());
        assert!(!Ttcr::ColdStart.is_bounded());
        assert!(!Ttcr::NotIncreasing.is_bounded());
    }

    #[test]
    fn test_maneuver_sentinel() {
        assert_eq!(ManeuverTime::NotUnderway.seconds(999.0), 999.0);
        assert_eq!(ManeuverTime::Seconds(8.0).seconds(999.0), 8.0);
    }

    #[test]
    fn test_budget_compose() {
        let budget = TimeBudget::compose(34.2, ManeuverTime::Seconds(30.0), 3.0, 999.0);
        assert!((budget.total_s - 67.2).abs() < 1e-9);
    }

    #[test]
    fn test_budget_compose_sentinel_dominates() {
        let budget = TimeBudget::compose(15.0, ManeuverTime::NotUnderway, 0.0, 999.0);
        assert!((budget.total_s - 1014.0).abs() < 1e-9);
    }
}
