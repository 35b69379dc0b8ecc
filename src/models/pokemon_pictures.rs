use serde::{Deserialize, Serialize};

use super::remote_api::ApiPokemonSprites;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSet {
    pub front: Option<String>,
    pub back: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    pub official_artwork: Option<String>,
    pub official_artwork_shiny: Option<String>,
}

impl From<&ApiPokemonSprites> for SpriteSet {
    fn from(value: &ApiPokemonSprites) -> Self {
        Self {
            front: value.front_default.clone(),
            back: value.back_default.clone(),
            front_shiny: value.front_shiny.clone(),
            back_shiny: value.back_shiny.clone(),
            official_artwork: value.other.official_artwork.front_default.clone(),
            official_artwork_shiny: value.other.official_artwork.front_shiny.clone(),
        }
    }
}
