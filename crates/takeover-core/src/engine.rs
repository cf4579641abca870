// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Hierarchical Decision Engine
// ─────────────────────────────────────────────────────────────────────
//! Risk-banded control-authority arbitration.
//!
//! Authority follows the current CRI against two ordered thresholds,
//! inclusive at both boundaries:
//!   - CRI ≤ low        → autonomous navigation, no takeover evaluation
//!   - low < CRI ≤ high → shore control, remote takeover evaluated
//!   - CRI > high       → onboard control, local takeover evaluated
//!
//! For the shore/onboard tiers the engine compares the predicted
//! remaining time against the mode budget plus a speed-dependent safety
//! allowance. A positive margin requests the takeover; otherwise the
//! only option left is the automatic minimum risk maneuver.

use takeover_models::BudgetComposer;
use takeover_types::{
    clamp_value, round2, ControlMode, OperatorState, Outcome, ShipState, TakeoverConfig, Verdict,
};

use crate::predictor::CriTrendPredictor;

/// Per-session decision engine. Owns the trend window; stateless
/// across samples otherwise.
pub struct HierarchicalEngine {
    config: TakeoverConfig,
    predictor: CriTrendPredictor,
    composer: BudgetComposer,
}

impl HierarchicalEngine {
    pub fn new(config: TakeoverConfig) -> Self {
        let composer = BudgetComposer::new(config.clone());
        Self::with_composer(config, composer)
    }

    /// Engine with an explicitly configured budget composer (alternate
    /// cognitive/maneuver strategies).
    pub fn with_composer(config: TakeoverConfig, composer: BudgetComposer) -> Self {
        Self {
            predictor: CriTrendPredictor::new(config.trend.clone()),
            config,
            composer,
        }
    }

    /// Evaluate one CRI sample to a verdict.
    pub fn evaluate(
        &self,
        current_cri: f64,
        operator: &OperatorState,
        ship: &ShipState,
    ) -> Verdict {
        let cri = clamp_value(current_cri, 0.0, 1.0);
        let remaining = self.predictor.update_and_predict(cri);
        let remaining_s = remaining.seconds(self.config.trend.horizon_s);

        let authority = if cri <= self.config.decision.threshold_low {
            ControlMode::Autonomous
        } else if cri <= self.config.decision.threshold_high {
            ControlMode::Shore
        } else {
            ControlMode::Onboard
        };

        if authority == ControlMode::Autonomous {
            let (outcome, action) = if remaining_s > self.config.decision.planning_horizon_s {
                (Outcome::SafeCruise, "maintain autonomous cruise")
            } else {
                (
                    Outcome::AvoidancePlanning,
                    "run autonomous collision-avoidance planning",
                )
            };
            return Verdict {
                authority,
                remaining,
                remaining_s,
                budget: None,
                margin_s: None,
                outcome,
                action: action.to_string(),
            };
        }

        let budget = self.composer.total_budget(authority, operator, ship);
        let allowance = self.config.decision.safety_margin_base_s
            + ship.speed_kn * self.config.decision.margin_per_knot_s;
        let margin = round2(remaining_s - (budget.total_s + allowance));

        let (outcome, action) = if margin > 0.0 {
            match authority {
                ControlMode::Shore => (
                    Outcome::TakeoverRequested,
                    "hand off to the shore operator for remote course adjustment",
                ),
                _ => (
                    Outcome::TakeoverRequested,
                    "onboard crew takes the conn immediately",
                ),
            }
        } else {
            log::error!(
                "TAKEOVER INFEASIBLE. margin: {margin:.2}s at CRI {cri:.2} ({})",
                authority.label()
            );
            (
                Outcome::EmergencyFallback,
                "engage automatic minimum risk maneuver",
            )
        };

        Verdict {
            authority,
            remaining,
            remaining_s,
            budget: Some(budget),
            margin_s: Some(margin),
            outcome,
            action: action.to_string(),
        }
    }

    pub fn config(&self) -> &TakeoverConfig {
        &self.config
    }

    /// Samples currently held in the trend window.
    pub fn history_len(&self) -> usize {
        self.predictor.history_len()
    }
}
