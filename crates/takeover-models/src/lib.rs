// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Demand-Side Models
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Demand-side takeover models: how long a control transfer needs.
//!
//! Three layers, leaves first:
//! - workload: operator state → cognitive preparation time
//! - maneuver: ship state → operation execution time
//! - budget: cognitive + maneuver + communication delay, per mode
//!
//! All models clamp out-of-range inputs instead of rejecting them, and
//! every returned time lands inside its configured bounds.

pub mod budget;
pub mod maneuver;
pub mod workload;

pub use budget::{single_shot_budget, BudgetComposer};
pub use maneuver::{ManeuverModel, NomotoResponseModel, ScaledHull, ScalingLawModel};
pub use workload::{composite_workload, CognitiveModel, ModeBaselineModel, QuadraticPerformanceModel};
