use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiPokemonSprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: ApiOtherSprites,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ApiOfficialArtwork,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiOfficialArtwork {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

impl ApiPokemonSprites {
    /// Official artwork when available, the plain front sprite otherwise.
    pub fn thumbnail(&self) -> Option<&str> {
        self.other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.front_default.as_deref())
    }
}
