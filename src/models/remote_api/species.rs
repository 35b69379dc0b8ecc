use serde::Deserialize;

use super::{ApiNamedResource, ApiResourceLink, Localized};

#[derive(Deserialize, Debug)]
pub struct ApiSpecies {
    #[serde(default)]
    pub flavor_text_entries: Vec<ApiFlavorText>,
    #[serde(default)]
    pub genera: Vec<ApiGenus>,
    pub habitat: Option<ApiNamedResource>,
    pub generation: Option<ApiNamedResource>,
    #[serde(default)]
    pub capture_rate: u32,
    pub base_happiness: Option<u32>,
    pub growth_rate: Option<ApiNamedResource>,
    #[serde(default)]
    pub egg_groups: Vec<ApiNamedResource>,
    #[serde(default = "genderless")]
    pub gender_rate: i8,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub evolution_chain: Option<ApiResourceLink>,
}

fn genderless() -> i8 {
    -1
}

#[derive(Deserialize, Debug)]
pub struct ApiFlavorText {
    pub flavor_text: String,
    pub language: ApiNamedResource,
}

#[derive(Deserialize, Debug)]
pub struct ApiGenus {
    pub genus: String,
    pub language: ApiNamedResource,
}

impl Localized for ApiFlavorText {
    fn language(&self) -> &str {
        &self.language.name
    }
}

impl Localized for ApiGenus {
    fn language(&self) -> &str {
        &self.language.name
    }
}
