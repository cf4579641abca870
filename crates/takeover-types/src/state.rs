// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Domain Input Types
// ─────────────────────────────────────────────────────────────────────
//! Evaluation inputs: control mode, operator state, and ship state.
//!
//! These are plain data carriers. Range enforcement happens inside the
//! models that consume them, which clamp rather than reject.

use serde::{Deserialize, Serialize};

/// Which tier holds control authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Ship plans and navigates on its own.
    Autonomous,
    /// Remote operator at a shore control centre.
    Shore,
    /// Crew on the bridge.
    Onboard,
}

impl ControlMode {
    pub fn label(&self) -> &'static str {
        match self {
            ControlMode::Autonomous => "AUTONOMOUS",
            ControlMode::Shore => "SHORE",
            ControlMode::Onboard => "ONBOARD",
        }
    }
}

/// Named physiological (HRV) features used to estimate operator stress.
///
/// Defaults are the population means the workload model was calibrated
/// against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysioFeatures {
    /// Root mean square of successive RR differences, ms.
    pub rmssd: f64,
    /// Low-frequency spectral power.
    pub lf: f64,
    /// High-frequency spectral power.
    pub hf: f64,
    /// LF/HF ratio.
    pub lf_hf: f64,
}

impl Default for PhysioFeatures {
    fn default() -> Self {
        Self {
            rmssd: 25.0,
            lf: 1.2,
            hf: 2.9,
            lf_hf: 0.42,
        }
    }
}

/// Operator state for one evaluation. Immutable per call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OperatorState {
    /// NASA-TLX task-load score, nominally 0-100.
    pub task_load: f64,
    /// Whether the operator is experienced.
    pub experienced: bool,
    /// Whether the evaluation happens during a night watch.
    pub night: bool,
    /// Physiological features, when a sensor feed is available.
    pub physio: Option<PhysioFeatures>,
}

/// Ship state for one evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipState {
    /// Hull length, meters. Must be physically positive; the maneuver
    /// model scales the reference hull by it.
    pub hull_length_m: f64,
    /// Current speed over ground, knots. Below the configured underway
    /// threshold the maneuver time cannot be evaluated.
    pub speed_kn: f64,
    /// Commanded rudder-angle change, degrees.
    pub delta_rudder_deg: f64,
    /// Commanded speed change, knots.
    pub delta_speed_kn: f64,
    /// Whether the propulsion is thrust-saturated.
    pub thrust_saturated: bool,
}
