use serde::{Deserialize, Serialize};

use super::remote_api::{ApiPokemon, ApiPokemonSummary, ApiPokemonType};

/// What a list or grid entry needs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BasicPokemon {
    pub id: u32,
    pub name: String,
    pub sprite: Option<String>,
    pub types: Vec<String>,
}

impl From<&ApiPokemonSummary> for BasicPokemon {
    fn from(value: &ApiPokemonSummary) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            sprite: value.sprites.thumbnail().map(str::to_string),
            types: type_names(&value.types),
        }
    }
}

impl From<&ApiPokemon> for BasicPokemon {
    fn from(value: &ApiPokemon) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            sprite: value.sprites.thumbnail().map(str::to_string),
            types: type_names(&value.types),
        }
    }
}

fn type_names(types: &[ApiPokemonType]) -> Vec<String> {
    types.iter().map(|t| t.type_.name.clone()).collect()
}

impl BasicPokemon {
    pub fn has_type(&self, type_tag: &str) -> bool {
        self.types.iter().any(|t| t == type_tag)
    }
}
