// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! MASS Takeover Kernel, the control-authority arbitration core for
//! Maritime Autonomous Surface Ships.

pub mod config;
pub mod error;
pub mod state;
pub mod verdict;

pub use config::{DecisionConfig, HumanFactorConfig, ShipModelConfig, TakeoverConfig, TrendConfig};
pub use error::{TakeoverError, TakeoverResult};
pub use state::{ControlMode, OperatorState, PhysioFeatures, ShipState};
pub use verdict::{
    clamp_value, round2, HandoffAssessment, HandoffOutcome, ManeuverTime, Outcome, RiskLevel,
    TimeBudget, Ttcr, Verdict,
};
