// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Maneuver Model (Operation Time)
// ─────────────────────────────────────────────────────────────────────
//! Operation execution time from ship state.
//!
//! Two estimators behind the same trait:
//! - `ScalingLawModel` (default): rudder response and thrust-limited
//!   speed adjustment on a hull scaled from the reference model
//!   (`mass ∝ L³`, `thrust ∝ L²`). The slower of the two dominates,
//!   since both must complete.
//! - `NomotoResponseModel` (alternate): steering-gear mechanical delay
//!   plus first-order inertial lag; faster ships answer the helm
//!   sooner.

use takeover_types::{clamp_value, round2, ShipModelConfig, ShipState};

/// Knots to meters per second.
const KNOTS_TO_MPS: f64 = 0.5144;

/// Speed at which the inertial lag reaches its nominal value, knots.
const NOMOTO_SPEED_REF_KN: f64 = 10.0;

/// Speeds below this are floored in the lag computation, knots.
const NOMOTO_SPEED_FLOOR_KN: f64 = 5.0;

/// Strategy interface for operation-time estimation.
pub trait ManeuverModel: Send + Sync {
    /// Operation execution time in seconds, clamped to the model's
    /// configured bounds.
    fn operation_time(&self, ship: &ShipState) -> f64;
}

/// A real hull derived from the reference model by length scaling.
#[derive(Debug, Clone, Copy)]
pub struct ScaledHull {
    pub mass_kg: f64,
    pub max_thrust_n: f64,
}

impl ScaledHull {
    /// Scale the reference hull to `hull_length_m`. Non-physical
    /// lengths fall back to the reference hull itself.
    pub fn from_length(config: &ShipModelConfig, hull_length_m: f64) -> Self {
        let length = if hull_length_m > 0.0 && hull_length_m.is_finite() {
            hull_length_m
        } else {
            config.reference_length_m
        };
        let ratio = length / config.reference_length_m;
        Self {
            mass_kg: config.reference_mass_kg * ratio.powi(3),
            max_thrust_n: config.reference_thrust_n * ratio.powi(2),
        }
    }
}

/// Length-scaling operation-time estimator.
pub struct ScalingLawModel {
    config: ShipModelConfig,
}

impl ScalingLawModel {
    pub fn new(config: ShipModelConfig) -> Self {
        Self { config }
    }

    /// Rudder response time: coefficient × commanded change, with the
    /// change clamped to [0, max rudder].
    pub fn rudder_response_time(&self, delta_rudder_deg: f64) -> f64 {
        let delta = clamp_value(delta_rudder_deg, 0.0, self.config.max_rudder_deg);
        self.config.rudder_response_s_per_deg * delta
    }

    /// Speed adjustment time: momentum change over available thrust,
    /// stretched when the propulsion is saturated.
    pub fn speed_adjust_time(
        &self,
        hull: &ScaledHull,
        delta_speed_kn: f64,
        thrust_saturated: bool,
    ) -> f64 {
        let delta_mps = delta_speed_kn * KNOTS_TO_MPS;
        let base = delta_mps.abs() * hull.mass_kg / hull.max_thrust_n;
        if thrust_saturated {
            base * self.config.thrust_saturated_coeff
        } else {
            base
        }
    }
}

impl ManeuverModel for ScalingLawModel {
    fn operation_time(&self, ship: &ShipState) -> f64 {
        let hull = ScaledHull::from_length(&self.config, ship.hull_length_m);
        let rudder = self.rudder_response_time(ship.delta_rudder_deg);
        let speed = self.speed_adjust_time(&hull, ship.delta_speed_kn, ship.thrust_saturated);
        let (lo, hi) = self.config.operation_bounds_s;
        clamp_value(rudder.max(speed), lo, hi)
    }
}

/// Nomoto-style dynamic response estimator.
pub struct NomotoResponseModel {
    config: ShipModelConfig,
}

impl NomotoResponseModel {
    pub fn new(config: ShipModelConfig) -> Self {
        Self { config }
    }
}

impl ManeuverModel for NomotoResponseModel {
    fn operation_time(&self, ship: &ShipState) -> f64 {
        let mech = self.config.rudder_delay_s
            + ship.delta_rudder_deg.abs() / self.config.rudder_rate_deg_s;

        let speed_factor = NOMOTO_SPEED_REF_KN / ship.speed_kn.max(NOMOTO_SPEED_FLOOR_KN);
        let inertia = self.config.nomoto_t_s * speed_factor * self.config.inertia_coeff;

        let (lo, hi) = self.config.nomoto_bounds_s;
        clamp_value(round2(mech + inertia), lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(hull_length_m: f64, delta_rudder_deg: f64, delta_speed_kn: f64) -> ShipState {
        ShipState {
            hull_length_m,
            speed_kn: 12.0,
            delta_rudder_deg,
            delta_speed_kn,
            thrust_saturated: false,
        }
    }

    // ── Hull scaling ──────────────────────────────────────────────

    #[test]
    fn test_hull_scaling_laws() {
        let config = ShipModelConfig::default();
        let hull = ScaledHull::from_length(&config, config.reference_length_m * 2.0);
        assert!((hull.mass_kg - 23.8 * 8.0).abs() < 1e-9);
        assert!((hull.max_thrust_n - 2.0 * 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_physical_length_falls_back_to_reference() {
        let config = ShipModelConfig::default();
        for bad in [0.0, -5.0, f64::NAN] {
            let hull = ScaledHull::from_length(&config, bad);
            assert!((hull.mass_kg - config.reference_mass_kg).abs() < 1e-9);
        }
    }

    // ── Scaling-law model ─────────────────────────────────────────

    #[test]
    fn test_rudder_response_clamps_to_max_rudder() {
        let model = ScalingLawModel::new(ShipModelConfig::default());
        assert!((model.rudder_response_time(60.0) - 0.8 * 45.0).abs() < 1e-9);
        assert!(model.rudder_response_time(-10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rudder_dominates_reference_hull() {
        let model = ScalingLawModel::new(ShipModelConfig::default());
        // rudder: 0.8·10 = 8.0; speed: 0.5144·23.8/2.0 = 6.12
        let t = model.operation_time(&ship(1.255, 10.0, 1.0));
        assert!((t - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_saturation_stretches_speed_time() {
        let model = ScalingLawModel::new(ShipModelConfig::default());
        let mut state = ship(1.255, 10.0, 1.0);
        state.thrust_saturated = true;
        // speed time 6.12136 × 1.5 = 9.18204 now dominates the 8.0 rudder time
        let t = model.operation_time(&state);
        assert!((t - 9.18204).abs() < 1e-6);
    }

    #[test]
    fn test_large_hull_clamps_to_max() {
        let model = ScalingLawModel::new(ShipModelConfig::default());
        // 20 m hull: speed-adjust time ≈ 293 s, far past the clamp
        let t = model.operation_time(&ship(20.0, 30.0, 3.0));
        assert!((t - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_idle_command_clamps_to_min() {
        let model = ScalingLawModel::new(ShipModelConfig::default());
        let t = model.operation_time(&ship(1.255, 0.0, 0.0));
        assert!((t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaling_always_in_bounds() {
        let config = ShipModelConfig::default();
        let (lo, hi) = config.operation_bounds_s;
        let model = ScalingLawModel::new(config);
        for hull_length in [0.5, 1.255, 5.0, 50.0, 300.0] {
            for delta_rudder in [-30.0, 0.0, 25.0, 90.0] {
                let t = model.operation_time(&ship(hull_length, delta_rudder, 4.0));
                assert!((lo..=hi).contains(&t));
            }
        }
    }

    // ── Nomoto model ──────────────────────────────────────────────

    #[test]
    fn test_nomoto_exact() {
        let model = NomotoResponseModel::new(ShipModelConfig::default());
        // mech = 3 + 20/3 = 9.67; lag = 40·(10/12)·1.5 = 50.0
        let t = model.operation_time(&ship(1.255, 20.0, 0.0));
        assert!((t - 59.67).abs() < 1e-9);
    }

    #[test]
    fn test_nomoto_speed_floor() {
        let model = NomotoResponseModel::new(ShipModelConfig::default());
        let mut slow = ship(1.255, 0.0, 0.0);
        slow.speed_kn = 2.0;
        // floored at 5 kn: lag = 40·2·1.5 = 120, mech = 3
        let t = model.operation_time(&slow);
        assert!((t - 123.0).abs() < 1e-9);
    }

    #[test]
    fn test_nomoto_faster_ship_responds_sooner() {
        let model = NomotoResponseModel::new(ShipModelConfig::default());
        let mut fast = ship(1.255, 15.0, 0.0);
        fast.speed_kn = 18.0;
        let mut slow = ship(1.255, 15.0, 0.0);
        slow.speed_kn = 6.0;
        assert!(model.operation_time(&fast) < model.operation_time(&slow));
    }

    #[test]
    fn test_nomoto_always_in_bounds() {
        let config = ShipModelConfig::default();
        let (lo, hi) = config.nomoto_bounds_s;
        let model = NomotoResponseModel::new(config);
        for speed in [0.0, 2.0, 6.0, 12.0, 30.0] {
            let mut state = ship(1.255, 45.0, 0.0);
            state.speed_kn = speed;
            let t = model.operation_time(&state);
            assert!((lo..=hi).contains(&t));
        }
    }
}
