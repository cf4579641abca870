// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Supply-side TTCR prediction and hierarchical takeover arbitration.
//!
//! # Safety Invariants
//!
//! 1. **The critical check precedes history mutation**: a CRI at or
//!    above the critical limit yields `Ttcr::Critical` without
//!    touching the trend window, so a post-deadline sample can never
//!    distort the fitted slope.
//!
//! 2. **Sentinels are variants, not magic numbers**: a cold-start
//!    window, a flat trend, and a ship not making way are explicit
//!    enum variants. Numeric sentinels appear only at the presentation
//!    boundary, via `Ttcr::seconds` / `ManeuverTime::seconds`.
//!
//! 3. **The decision path never errors and never blocks**: every
//!    sample is processed to completion (window update, trend fit,
//!    budget, verdict) with all inputs defensively clamped. The only
//!    lock is the predictor's history mutex, held for the duration of
//!    one window update.
//!
//! 4. **No hysteresis**: control authority is re-derived from the
//!    thresholds at every sample. A single sample can flip the tier;
//!    smoothing belongs to the caller's policy layer, not here.

pub mod engine;
pub mod handoff;
pub mod predictor;
pub mod session;

pub use engine::HierarchicalEngine;
pub use handoff::HandoffClassifier;
pub use predictor::CriTrendPredictor;
pub use session::{SessionTrace, TakeoverSession};
