use serde::{Deserialize, Serialize};

use super::Diagnostic;

/// One species of an evolution chain. `trigger`, `min_level` and `item`
/// describe how the previous stage evolves into this one; the base form has
/// trigger `"base"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub name: String,
    pub id: u32,
    pub sprite: Option<String>,
    pub trigger: String,
    pub min_level: Option<u32>,
    pub item: Option<String>,
}

/// Stages in depth-first pre-order, plus the nodes that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionOutcome {
    pub stages: Vec<EvolutionStage>,
    pub diagnostics: Vec<Diagnostic>,
}
