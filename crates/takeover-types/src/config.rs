// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Configuration
// ─────────────────────────────────────────────────────────────────────
//! Runtime configuration for the takeover kernel.
//!
//! All numeric constants the decision path consumes live here, grouped
//! by concern: CRI trend prediction, human-factor (demand-side) models,
//! ship dynamics, and decision/margin policy. Components receive an
//! immutable copy at construction, so different configurations (e.g.
//! different hull classes) can coexist in one process.

use serde::{Deserialize, Serialize};

use crate::error::{TakeoverError, TakeoverResult};

/// CRI trend prediction (supply-side) parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Physical collision criticality limit. CRI at or above this value
    /// means the deadline has been reached. Default: 0.95.
    pub cri_limit: f64,

    /// Number of CRI samples retained in the sliding window. Default: 10.
    pub history_len: usize,

    /// Seconds between consecutive CRI samples. Default: 1.0.
    pub sampling_interval_s: f64,

    /// Minimum samples required before a trend fit is attempted.
    /// Below this the predictor reports a cold start. Default: 3.
    pub min_samples: usize,

    /// Slope values at or below this are treated as "risk not
    /// increasing" (noise floor). Default: 0.001.
    pub slope_epsilon: f64,

    /// Sentinel horizon reported when no deadline can be predicted
    /// (cold start or flat trend). Default: 999.0 seconds.
    pub horizon_s: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            cri_limit: 0.95,
            history_len: 10,
            sampling_interval_s: 1.0,
            min_samples: 3,
            slope_epsilon: 0.001,
            horizon_s: 999.0,
        }
    }
}

/// Human-factor (cognitive preparation time) parameters.
///
/// Covers both cognitive-time formulations: the quadratic
/// performance-curve model and the mode-baseline model. A deployment
/// wires exactly one of them into the budget composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanFactorConfig {
    /// Lower bound of the task-load (NASA-TLX) scale. Default: 0.0.
    pub task_load_min: f64,

    /// Upper bound of the task-load scale. Default: 100.0.
    pub task_load_max: f64,

    /// Weight of the subjective task-load score in the composite
    /// workload blend. Default: 0.6.
    pub task_load_weight: f64,

    /// Weight of the normalized physiological score in the composite
    /// workload blend. Must sum to 1.0 with `task_load_weight`.
    /// Default: 0.4.
    pub physio_weight: f64,

    /// Quadratic performance curve: `a·c² + b·c + c0` over the
    /// composite workload score. `a` must be negative (concave).
    /// Defaults: a = -0.0184, b = 0.2154, c0 = 0.1374.
    pub perf_a: f64,
    pub perf_b: f64,
    pub perf_c0: f64,

    /// Experience adjustment for the quadratic formulation, seconds
    /// (negative: experienced operators recover faster). Default: -38.0.
    pub quad_experience_adjust_s: f64,

    /// Night penalty for the quadratic formulation, shore mode.
    /// Remote monitoring degrades harder at night (out-of-the-loop
    /// effect). Default: 19.89.
    pub quad_night_penalty_shore_s: f64,

    /// Night penalty for the quadratic formulation, onboard mode.
    /// Default: 8.0.
    pub quad_night_penalty_onboard_s: f64,

    /// Cognitive-time clamp for the quadratic formulation, seconds.
    /// Default: (1.0, 60.0).
    pub quad_bounds_s: (f64, f64),

    /// Base situation-awareness recovery time, shore mode. Default: 45.0.
    pub base_sa_shore_s: f64,

    /// Base situation-awareness recovery time, onboard mode.
    /// Default: 15.0.
    pub base_sa_onboard_s: f64,

    /// Weight of the workload term in the mode-baseline formulation.
    /// Default: 0.4.
    pub load_weight: f64,

    /// Experience bonus for the mode-baseline formulation, seconds.
    /// Default: -12.0.
    pub experience_bonus_s: f64,

    /// Night penalty for the mode-baseline formulation, shore mode.
    /// Default: 20.0.
    pub night_penalty_shore_s: f64,

    /// Night penalty for the mode-baseline formulation, onboard mode.
    /// Default: 8.0.
    pub night_penalty_onboard_s: f64,

    /// Cognitive-time clamp for the mode-baseline formulation, seconds.
    /// Default: (5.0, 90.0).
    pub baseline_bounds_s: (f64, f64),
}

impl Default for HumanFactorConfig {
    fn default() -> Self {
        Self {
            task_load_min: 0.0,
            task_load_max: 100.0,
            task_load_weight: 0.6,
            physio_weight: 0.4,
            perf_a: -0.0184,
            perf_b: 0.2154,
            perf_c0: 0.1374,
            quad_experience_adjust_s: -38.0,
            quad_night_penalty_shore_s: 19.89,
            quad_night_penalty_onboard_s: 8.0,
            quad_bounds_s: (1.0, 60.0),
            base_sa_shore_s: 45.0,
            base_sa_onboard_s: 15.0,
            load_weight: 0.4,
            experience_bonus_s: -12.0,
            night_penalty_shore_s: 20.0,
            night_penalty_onboard_s: 8.0,
            baseline_bounds_s: (5.0, 90.0),
        }
    }
}

/// Ship dynamics (operation execution time) parameters.
///
/// The reference hull is the CyberShip II scale model; real hulls are
/// derived from it via cubic (mass) and quadratic (thrust) length
/// scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipModelConfig {
    /// Reference model hull length, meters. Default: 1.255.
    pub reference_length_m: f64,

    /// Reference model mass, kilograms. Default: 23.8.
    pub reference_mass_kg: f64,

    /// Reference model maximum thrust, newtons. Default: 2.0.
    pub reference_thrust_n: f64,

    /// Maximum rudder angle, degrees. Commanded changes are clamped to
    /// [0, max]. Default: 45.0.
    pub max_rudder_deg: f64,

    /// Rudder response coefficient, seconds per degree. Default: 0.8.
    pub rudder_response_s_per_deg: f64,

    /// Speed-adjustment multiplier applied when thrust is saturated.
    /// Default: 1.5.
    pub thrust_saturated_coeff: f64,

    /// Operation-time clamp for the scaling-law model, seconds.
    /// Default: (5.0, 30.0).
    pub operation_bounds_s: (f64, f64),

    /// Below this speed the ship is not making way and the maneuver
    /// time cannot be evaluated meaningfully. Default: 1.0 knots.
    pub min_underway_speed_kn: f64,

    /// Nomoto inertia time constant, seconds. Default: 40.0.
    pub nomoto_t_s: f64,

    /// Steering-gear mechanical delay, seconds. Default: 3.0.
    pub rudder_delay_s: f64,

    /// Rudder slew rate, degrees per second. Default: 3.0.
    pub rudder_rate_deg_s: f64,

    /// Inertial-lag multiplier for the Nomoto model. Default: 1.5.
    pub inertia_coeff: f64,

    /// Operation-time clamp for the Nomoto model, seconds.
    /// Default: (5.0, 180.0).
    pub nomoto_bounds_s: (f64, f64),
}

impl Default for ShipModelConfig {
    fn default() -> Self {
        Self {
            reference_length_m: 1.255,
            reference_mass_kg: 23.8,
            reference_thrust_n: 2.0,
            max_rudder_deg: 45.0,
            rudder_response_s_per_deg: 0.8,
            thrust_saturated_coeff: 1.5,
            operation_bounds_s: (5.0, 30.0),
            min_underway_speed_kn: 1.0,
            nomoto_t_s: 40.0,
            rudder_delay_s: 3.0,
            rudder_rate_deg_s: 3.0,
            inertia_coeff: 1.5,
            nomoto_bounds_s: (5.0, 180.0),
        }
    }
}

/// Decision policy: authority bands, safety margins, communication
/// delays, and the single-shot handoff classification interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// CRI at or below this stays autonomous. Default: 0.3.
    pub threshold_low: f64,

    /// CRI at or below this (and above `threshold_low`) routes to
    /// shore control; above it, onboard control. Default: 0.6.
    pub threshold_high: f64,

    /// Fixed base of the dynamic safety allowance, seconds.
    /// Default: 10.0.
    pub safety_margin_base_s: f64,

    /// Per-knot contribution to the safety allowance: faster ships
    /// need larger margins. Default: 0.5 seconds per knot.
    pub margin_per_knot_s: f64,

    /// Remaining times above this are "safe cruise"; below it the
    /// autonomous tier starts avoidance planning. Default: 900.0.
    pub planning_horizon_s: f64,

    /// Satellite link propagation delay for shore control, seconds.
    /// Default: 3.0.
    pub comm_delay_shore_s: f64,

    /// Communication delay for onboard control. Default: 0.0.
    pub comm_delay_onboard_s: f64,

    /// Communication delay assumed by the single-shot budget path,
    /// which predates the mode split. Default: 2.0.
    pub comm_delay_default_s: f64,

    /// Lower edge of the single-shot classification interval, seconds.
    /// Margins in [0, lower) are a timeout. Default: 0.0.
    pub handoff_lower_s: f64,

    /// Upper edge of the single-shot classification interval, seconds.
    /// Margins at or above it are a success with slack. Default: 5.0.
    pub handoff_upper_s: f64,

    /// Base collision-remaining time per discrete risk level, seconds.
    /// Defaults: low 120.0, medium 60.0, high 30.0.
    pub collision_base_low_s: f64,
    pub collision_base_medium_s: f64,
    pub collision_base_high_s: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            threshold_low: 0.3,
            threshold_high: 0.6,
            safety_margin_base_s: 10.0,
            margin_per_knot_s: 0.5,
            planning_horizon_s: 900.0,
            comm_delay_shore_s: 3.0,
            comm_delay_onboard_s: 0.0,
            comm_delay_default_s: 2.0,
            handoff_lower_s: 0.0,
            handoff_upper_s: 5.0,
            collision_base_low_s: 120.0,
            collision_base_medium_s: 60.0,
            collision_base_high_s: 30.0,
        }
    }
}

/// Full kernel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TakeoverConfig {
    pub trend: TrendConfig,
    pub human: HumanFactorConfig,
    pub ship: ShipModelConfig,
    pub decision: DecisionConfig,
}

impl TakeoverConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> TakeoverResult<()> {
        if !(0.0..=1.0).contains(&self.trend.cri_limit) {
            return Err(TakeoverError::Config(format!(
                "cri_limit must be in [0, 1], got {}",
                self.trend.cri_limit
            )));
        }
        if self.trend.min_samples < 2 {
            return Err(TakeoverError::Config(format!(
                "min_samples must be >= 2, got {}",
                self.trend.min_samples
            )));
        }
        if self.trend.history_len < self.trend.min_samples {
            return Err(TakeoverError::Config(format!(
                "history_len must be >= min_samples, got {} < {}",
                self.trend.history_len, self.trend.min_samples
            )));
        }
        if self.trend.sampling_interval_s <= 0.0 {
            return Err(TakeoverError::Config(format!(
                "sampling_interval_s must be > 0, got {}",
                self.trend.sampling_interval_s
            )));
        }
        if self.trend.slope_epsilon <= 0.0 {
            return Err(TakeoverError::Config(format!(
                "slope_epsilon must be > 0, got {}",
                self.trend.slope_epsilon
            )));
        }
        if self.trend.horizon_s <= 0.0 {
            return Err(TakeoverError::Config(format!(
                "horizon_s must be > 0, got {}",
                self.trend.horizon_s
            )));
        }

        let weight_sum = self.human.task_load_weight + self.human.physio_weight;
        if (weight_sum - 1.0).abs() > 1e-9 {
            return Err(TakeoverError::Config(format!(
                "task_load_weight + physio_weight must equal 1.0, got {} + {} = {}",
                self.human.task_load_weight, self.human.physio_weight, weight_sum
            )));
        }
        if self.human.task_load_min >= self.human.task_load_max {
            return Err(TakeoverError::Config(format!(
                "task-load scale is empty: [{}, {}]",
                self.human.task_load_min, self.human.task_load_max
            )));
        }
        if self.human.perf_a >= 0.0 {
            return Err(TakeoverError::Config(format!(
                "perf_a must be negative (concave curve), got {}",
                self.human.perf_a
            )));
        }
        for (name, (lo, hi)) in [
            ("quad_bounds_s", self.human.quad_bounds_s),
            ("baseline_bounds_s", self.human.baseline_bounds_s),
            ("operation_bounds_s", self.ship.operation_bounds_s),
            ("nomoto_bounds_s", self.ship.nomoto_bounds_s),
        ] {
            if lo < 0.0 || lo >= hi {
                return Err(TakeoverError::Config(format!(
                    "{name} must satisfy 0 <= min < max, got ({lo}, {hi})"
                )));
            }
        }

        if self.ship.reference_length_m <= 0.0
            || self.ship.reference_mass_kg <= 0.0
            || self.ship.reference_thrust_n <= 0.0
        {
            return Err(TakeoverError::Config(
                "reference hull length, mass, and thrust must all be > 0".to_string(),
            ));
        }
        if self.ship.max_rudder_deg <= 0.0 {
            return Err(TakeoverError::Config(format!(
                "max_rudder_deg must be > 0, got {}",
                self.ship.max_rudder_deg
            )));
        }
        if self.ship.rudder_rate_deg_s <= 0.0 {
            return Err(TakeoverError::Config(format!(
                "rudder_rate_deg_s must be > 0, got {}",
                self.ship.rudder_rate_deg_s
            )));
        }
        if self.ship.thrust_saturated_coeff < 1.0 {
            return Err(TakeoverError::Config(format!(
                "thrust_saturated_coeff must be >= 1, got {}",
                self.ship.thrust_saturated_coeff
            )));
        }

        if !(0.0..=1.0).contains(&self.decision.threshold_low)
            || !(0.0..=1.0).contains(&self.decision.threshold_high)
            || self.decision.threshold_low >= self.decision.threshold_high
        {
            return Err(TakeoverError::Config(format!(
                "authority thresholds must satisfy 0 <= low < high <= 1, got ({}, {})",
                self.decision.threshold_low, self.decision.threshold_high
            )));
        }
        if self.decision.handoff_lower_s < 0.0
            || self.decision.handoff_lower_s > self.decision.handoff_upper_s
        {
            return Err(TakeoverError::Config(format!(
                "handoff interval must satisfy 0 <= lower <= upper, got ({}, {})",
                self.decision.handoff_lower_s, self.decision.handoff_upper_s
            )));
        }

        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> TakeoverResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TakeoverError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(TakeoverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_weight_sum_rejected() {
        let mut config = TakeoverConfig::default();
        config.human.task_load_weight = 0.7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_threshold_order_rejected() {
        let mut config = TakeoverConfig::default();
        config.decision.threshold_low = 0.6;
        config.decision.threshold_high = 0.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_window_shorter_than_min_samples_rejected() {
        let mut config = TakeoverConfig::default();
        config.trend.history_len = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_convex_curve_rejected() {
        let mut config = TakeoverConfig::default();
        config.human.perf_a = 0.01;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_bounds_rejected() {
        let mut config = TakeoverConfig::default();
        config.ship.operation_bounds_s = (30.0, 5.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_handoff_interval_rejected() {
        let mut config = TakeoverConfig::default();
        config.decision.handoff_lower_s = 7.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = TakeoverConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored = TakeoverConfig::from_json(&json).unwrap();
        assert!((restored.trend.cri_limit - 0.95).abs() < 1e-9);
        assert_eq!(restored.trend.history_len, 10);
    }

    #[test]
    fn test_json_parse_error() {
        assert!(TakeoverConfig::from_json("not json").is_err());
    }
}
