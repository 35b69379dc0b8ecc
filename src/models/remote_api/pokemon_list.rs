use serde::Deserialize;

use super::ApiNamedResource;

#[derive(Deserialize, Debug)]
pub struct ApiPokemonList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<ApiNamedResource>,
}
