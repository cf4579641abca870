// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Streaming Session Runner
// ─────────────────────────────────────────────────────────────────────
//! Fixed-scene evaluation over a CRI stream.
//!
//! The reference loop: a fixed-interval simulated CRI stream runs
//! against a constant operator/ship scene, one verdict per sample, and
//! the full trace comes back for presentation. Samples accumulate in
//! the session's trend window across calls; a new session starts a
//! fresh window.

use serde::{Deserialize, Serialize};

use takeover_types::{ControlMode, OperatorState, Outcome, ShipState, TakeoverConfig, Verdict};

use crate::engine::HierarchicalEngine;

/// One monitoring session around a hierarchical engine.
pub struct TakeoverSession {
    engine: HierarchicalEngine,
}

/// Trace of a streamed evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTrace {
    pub cri_history: Vec<f64>,
    pub verdicts: Vec<Verdict>,
    /// Number of emergency-fallback verdicts in the stream.
    pub fallback_count: usize,
    /// Index of the first fallback verdict, -1 when none occurred.
    pub first_fallback_index: i32,
}

impl TakeoverSession {
    pub fn new(config: TakeoverConfig) -> Self {
        Self {
            engine: HierarchicalEngine::new(config),
        }
    }

    /// Session around an explicitly configured engine.
    pub fn with_engine(engine: HierarchicalEngine) -> Self {
        Self { engine }
    }

    /// Evaluate a single sample.
    pub fn step(&self, cri: f64, operator: &OperatorState, ship: &ShipState) -> Verdict {
        self.engine.evaluate(cri, operator, ship)
    }

    /// Evaluate a whole stream against one scene.
    pub fn run(&self, cri_stream: &[f64], operator: &OperatorState, ship: &ShipState) -> SessionTrace {
        let mut trace = SessionTrace {
            cri_history: Vec::with_capacity(cri_stream.len()),
            verdicts: Vec::with_capacity(cri_stream.len()),
            fallback_count: 0,
            first_fallback_index: -1,
        };

        for (i, &cri) in cri_stream.iter().enumerate() {
            let verdict = self.engine.evaluate(cri, operator, ship);
            if verdict.outcome == Outcome::EmergencyFallback {
                trace.fallback_count += 1;
                if trace.first_fallback_index < 0 {
                    trace.first_fallback_index = i as i32;
                }
            }
            trace.cri_history.push(cri);
            trace.verdicts.push(verdict);
        }

        trace
    }
}

impl SessionTrace {
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Authority selected for the last sample.
    pub fn final_authority(&self) -> Option<ControlMode> {
        self.verdicts.last().map(|v| v.authority)
    }

    /// Smallest margin over the takeover-evaluated verdicts.
    pub fn min_margin(&self) -> Option<f64> {
        self.verdicts
            .iter()
            .filter_map(|v| v.margin_s)
            .fold(None, |acc, m| match acc {
                Some(best) if best <= m => Some(best),
                _ => Some(m),
            })
    }

    /// Number of verdicts that requested a takeover.
    pub fn requested_count(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|v| v.outcome == Outcome::TakeoverRequested)
            .count()
    }
}
