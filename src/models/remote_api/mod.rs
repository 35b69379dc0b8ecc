mod ability;
mod evolution_chain;
mod move_detail;
mod pokemon;
mod pokemon_list;
mod pokemon_sprites;
mod species;

pub use ability::ApiAbility;
pub use evolution_chain::{ApiChainLink, ApiEvolutionChain, ApiEvolutionDetail};
pub use move_detail::ApiMove;
pub use pokemon::{
    ApiPokemon, ApiPokemonAbility, ApiPokemonMove, ApiPokemonStat, ApiPokemonSummary,
    ApiPokemonType, ApiVersionGroupDetail,
};
pub use pokemon_list::ApiPokemonList;
pub use pokemon_sprites::{ApiOfficialArtwork, ApiOtherSprites, ApiPokemonSprites};
pub use species::{ApiFlavorText, ApiGenus, ApiSpecies};

use serde::Deserialize;

pub const ENGLISH: &str = "en";

/// `{ name, url }` link to another upstream resource.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiNamedResource {
    pub name: String,
    pub url: String,
}

/// `{ url }` link without a name, as used for evolution chains.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiResourceLink {
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiEffectEntry {
    pub short_effect: String,
    pub language: ApiNamedResource,
}

/// Upstream entries that exist once per language.
pub trait Localized {
    fn language(&self) -> &str;
}

impl Localized for ApiEffectEntry {
    fn language(&self) -> &str {
        &self.language.name
    }
}

/// First entry written in English, if any.
pub fn english<T: Localized>(entries: &[T]) -> Option<&T> {
    entries.iter().find(|entry| entry.language() == ENGLISH)
}
