// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Time-Budget Composer
// ─────────────────────────────────────────────────────────────────────
//! Total takeover budget: cognitive + maneuver + communication delay.
//!
//! The composer routes the cognitive model by control mode and applies
//! the not-underway sentinel before the maneuver model is consulted: a
//! ship that is not making way cannot have its maneuver evaluated, and
//! the sentinel propagates into the total so it dominates the margin
//! test downstream.

use std::sync::Arc;

use takeover_types::{
    ControlMode, ManeuverTime, OperatorState, ShipState, TakeoverConfig, TimeBudget,
};

use crate::maneuver::{ManeuverModel, ScalingLawModel};
use crate::workload::{CognitiveModel, ModeBaselineModel, QuadraticPerformanceModel};

/// Mode-aware takeover budget composer.
pub struct BudgetComposer {
    config: TakeoverConfig,
    cognitive: Arc<dyn CognitiveModel>,
    maneuver: Arc<dyn ManeuverModel>,
}

impl BudgetComposer {
    /// Composer with the default deployment strategies: mode-baseline
    /// cognitive model and scaling-law maneuver model.
    pub fn new(config: TakeoverConfig) -> Self {
        let cognitive = Arc::new(ModeBaselineModel::new(config.human.clone()));
        let maneuver = Arc::new(ScalingLawModel::new(config.ship.clone()));
        Self::with_models(config, cognitive, maneuver)
    }

    /// Composer with explicit strategy choices.
    pub fn with_models(
        config: TakeoverConfig,
        cognitive: Arc<dyn CognitiveModel>,
        maneuver: Arc<dyn ManeuverModel>,
    ) -> Self {
        Self {
            config,
            cognitive,
            maneuver,
        }
    }

    /// Total budget for a takeover under `mode`.
    ///
    /// The autonomous tier never reaches this composer; passing
    /// `ControlMode::Autonomous` is treated as onboard (no link delay).
    pub fn total_budget(
        &self,
        mode: ControlMode,
        operator: &OperatorState,
        ship: &ShipState,
    ) -> TimeBudget {
        let cognitive_s = self.cognitive.cognitive_time(mode, operator);

        let maneuver = if ship.speed_kn < self.config.ship.min_underway_speed_kn {
            ManeuverTime::NotUnderway
        } else {
            ManeuverTime::Seconds(self.maneuver.operation_time(ship))
        };

        let comm_delay_s = match mode {
            ControlMode::Shore => self.config.decision.comm_delay_shore_s,
            _ => self.config.decision.comm_delay_onboard_s,
        };

        TimeBudget::compose(cognitive_s, maneuver, comm_delay_s, self.config.trend.horizon_s)
    }

    pub fn config(&self) -> &TakeoverConfig {
        &self.config
    }
}

/// Direct single-shot budget: quadratic cognitive model, scaling-law
/// maneuver model, and the fixed default communication delay. This is
/// the stream-independent path that feeds the single-shot handoff
/// classifier; it predates the mode split and assumes an onboard
/// operator.
pub fn single_shot_budget(
    config: &TakeoverConfig,
    operator: &OperatorState,
    ship: &ShipState,
) -> TimeBudget {
    let cognitive = QuadraticPerformanceModel::new(config.human.clone());
    let maneuver = ScalingLawModel::new(config.ship.clone());

    TimeBudget::compose(
        cognitive.cognitive_time(ControlMode::Onboard, operator),
        ManeuverTime::Seconds(maneuver.operation_time(ship)),
        config.decision.comm_delay_default_s,
        config.trend.horizon_s,
    )
}
