use serde::Deserialize;

use super::{ApiNamedResource, ApiPokemonSprites};

/// The fields of a pokemon record needed for list entries and evolution
/// stage thumbnails.
#[derive(Deserialize, Debug)]
pub struct ApiPokemonSummary {
    pub id: u32,
    pub name: String,
    pub sprites: ApiPokemonSprites,
    #[serde(default)]
    pub types: Vec<ApiPokemonType>,
}

#[derive(Deserialize, Debug)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub sprites: ApiPokemonSprites,
    #[serde(default)]
    pub types: Vec<ApiPokemonType>,
    #[serde(default)]
    pub stats: Vec<ApiPokemonStat>,
    #[serde(default)]
    pub abilities: Vec<ApiPokemonAbility>,
    #[serde(default)]
    pub moves: Vec<ApiPokemonMove>,
    pub species: ApiNamedResource,
}

#[derive(Deserialize, Debug)]
pub struct ApiPokemonType {
    #[serde(rename = "type")]
    pub type_: ApiNamedResource,
}

#[derive(Deserialize, Debug)]
pub struct ApiPokemonStat {
    pub base_stat: u16,
    pub stat: ApiNamedResource,
}

#[derive(Deserialize, Debug)]
pub struct ApiPokemonAbility {
    pub ability: ApiNamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Deserialize, Debug)]
pub struct ApiPokemonMove {
    #[serde(rename = "move")]
    pub move_: ApiNamedResource,
    #[serde(default)]
    pub version_group_details: Vec<ApiVersionGroupDetail>,
}

#[derive(Deserialize, Debug)]
pub struct ApiVersionGroupDetail {
    #[serde(default)]
    pub level_learned_at: u32,
    pub move_learn_method: ApiNamedResource,
}

impl ApiPokemonMove {
    /// The first level-up entry, otherwise whichever entry comes first.
    pub fn preferred_detail(&self) -> Option<&ApiVersionGroupDetail> {
        self.version_group_details
            .iter()
            .find(|detail| detail.move_learn_method.name == "level-up")
            .or_else(|| self.version_group_details.first())
    }
}
