pub mod detailed;
pub mod diagnostic;
pub mod evolution;
pub mod pokemon;
pub mod pokemon_pictures;
pub mod remote_api;

pub use detailed::{AbilityRecord, DetailedPokemon, MoveRecord, SpeciesInfo, StatRecord};
pub use diagnostic::Diagnostic;
pub use evolution::{EvolutionOutcome, EvolutionStage};
pub use pokemon::BasicPokemon;
pub use pokemon_pictures::SpriteSet;
