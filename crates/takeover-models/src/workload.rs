// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Workload Model (Cognitive Time)
// ─────────────────────────────────────────────────────────────────────
//! Cognitive preparation time from operator state.
//!
//! Two formulations exist behind the same trait and are never mixed in
//! one call path:
//! - `QuadraticPerformanceModel`: concave workload-performance curve;
//!   `base = (1 - performance) × 100`.
//! - `ModeBaselineModel`: per-mode situation-awareness recovery
//!   baseline plus a weighted load term. This is what the hierarchical
//!   engine deploys; the quadratic model serves the single-shot path.
//!
//! Both share the composite workload score: the task-load rating,
//! optionally blended 60/40 with a normalized physiological stress
//! score.

use takeover_types::{clamp_value, round2, ControlMode, HumanFactorConfig, OperatorState, PhysioFeatures};

/// Per-signal linear normalization ranges mapping raw HRV features onto
/// a common 0-100 stress scale. LF/HF is inverted: lower ratios read as
/// higher stress.
const RMSSD_RANGE: (f64, f64) = (10.0, 40.0);
const LF_RANGE: (f64, f64) = (0.5, 2.0);
const HF_RANGE: (f64, f64) = (1.0, 4.0);
const LF_HF_RANGE: (f64, f64) = (0.4, 0.5);

/// Blend weights over (RMSSD, LF, HF, LF/HF). Sum to 1.
const PHYSIO_WEIGHTS: [f64; 4] = [0.3, 0.2, 0.3, 0.2];

/// Strategy interface for cognitive-time computation.
pub trait CognitiveModel: Send + Sync {
    /// Cognitive preparation time in seconds, clamped to the model's
    /// configured bounds.
    fn cognitive_time(&self, mode: ControlMode, operator: &OperatorState) -> f64;
}

/// Normalize HRV features onto a single 0-100 stress score.
pub fn normalize_physio(physio: &PhysioFeatures) -> f64 {
    let norm_rmssd = (physio.rmssd - RMSSD_RANGE.0) / (RMSSD_RANGE.1 - RMSSD_RANGE.0) * 100.0;
    let norm_lf = (physio.lf - LF_RANGE.0) / (LF_RANGE.1 - LF_RANGE.0) * 100.0;
    let norm_hf = (physio.hf - HF_RANGE.0) / (HF_RANGE.1 - HF_RANGE.0) * 100.0;
    let norm_lf_hf =
        (LF_HF_RANGE.1 - physio.lf_hf) / (LF_HF_RANGE.1 - LF_HF_RANGE.0) * 100.0;

    let blended = norm_rmssd * PHYSIO_WEIGHTS[0]
        + norm_lf * PHYSIO_WEIGHTS[1]
        + norm_hf * PHYSIO_WEIGHTS[2]
        + norm_lf_hf * PHYSIO_WEIGHTS[3];
    clamp_value(blended, 0.0, 100.0)
}

/// Composite workload score: clamped task load, blended with the
/// normalized physio score when one is available.
pub fn composite_workload(config: &HumanFactorConfig, operator: &OperatorState) -> f64 {
    let task_load = clamp_value(operator.task_load, config.task_load_min, config.task_load_max);
    match &operator.physio {
        Some(physio) => {
            task_load * config.task_load_weight + normalize_physio(physio) * config.physio_weight
        }
        None => task_load,
    }
}

/// Quadratic workload-performance formulation.
///
/// `performance = a·c² + b·c + c0` with a < 0: performance collapses at
/// workload extremes faster than in the mid-range.
pub struct QuadraticPerformanceModel {
    config: HumanFactorConfig,
}

impl QuadraticPerformanceModel {
    pub fn new(config: HumanFactorConfig) -> Self {
        Self { config }
    }
}

impl CognitiveModel for QuadraticPerformanceModel {
    fn cognitive_time(&self, mode: ControlMode, operator: &OperatorState) -> f64 {
        let c = composite_workload(&self.config, operator);
        let performance = self.config.perf_a * c * c + self.config.perf_b * c + self.config.perf_c0;
        let base = (1.0 - performance) * 100.0;

        let experience = if operator.experienced {
            self.config.quad_experience_adjust_s
        } else {
            0.0
        };
        let night = if operator.night {
            match mode {
                ControlMode::Shore => self.config.quad_night_penalty_shore_s,
                _ => self.config.quad_night_penalty_onboard_s,
            }
        } else {
            0.0
        };

        let (lo, hi) = self.config.quad_bounds_s;
        clamp_value(base + experience + night, lo, hi)
    }
}

/// Mode-baseline formulation.
///
/// Shore recovery starts from a much higher baseline than onboard: a
/// remote operator re-enters the loop from monitoring, the bridge crew
/// from direct physical cues.
pub struct ModeBaselineModel {
    config: HumanFactorConfig,
}

impl ModeBaselineModel {
    pub fn new(config: HumanFactorConfig) -> Self {
        Self { config }
    }
}

impl CognitiveModel for ModeBaselineModel {
    fn cognitive_time(&self, mode: ControlMode, operator: &OperatorState) -> f64 {
        let (base, night_penalty) = match mode {
            ControlMode::Shore => (
                self.config.base_sa_shore_s,
                self.config.night_penalty_shore_s,
            ),
            _ => (
                self.config.base_sa_onboard_s,
                self.config.night_penalty_onboard_s,
            ),
        };

        let load = composite_workload(&self.config, operator) / 10.0 * self.config.load_weight;

        let mut adjust = 0.0;
        if operator.experienced {
            adjust += self.config.experience_bonus_s;
        }
        if operator.night {
            adjust += night_penalty;
        }

        let (lo, hi) = self.config.baseline_bounds_s;
        clamp_value(round2(base + load + adjust), lo, hi)
    }
}
