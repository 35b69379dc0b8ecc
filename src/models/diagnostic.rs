use serde::{Deserialize, Serialize};

/// A failure that was absorbed while building a detail record. The record
/// is still returned; these say which parts are placeholders or missing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The chain could not be loaded at all; evolutions are empty.
    EvolutionChain { reason: String },
    /// One stage and everything below it were left out.
    EvolutionStage { species: String, reason: String },
    /// The move is a placeholder.
    Move { name: String, reason: String },
    /// The ability effect is a placeholder.
    Ability { name: String, reason: String },
}

impl Diagnostic {
    pub fn subject(&self) -> Option<&str> {
        match self {
            Diagnostic::EvolutionChain { .. } => None,
            Diagnostic::EvolutionStage { species, .. } => Some(species.as_str()),
            Diagnostic::Move { name, .. } | Diagnostic::Ability { name, .. } => {
                Some(name.as_str())
            }
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Diagnostic::EvolutionChain { reason }
            | Diagnostic::EvolutionStage { reason, .. }
            | Diagnostic::Move { reason, .. }
            | Diagnostic::Ability { reason, .. } => reason.as_str(),
        }
    }
}
