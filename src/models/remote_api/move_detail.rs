use serde::Deserialize;

use super::{ApiEffectEntry, ApiNamedResource};

#[derive(Deserialize, Debug)]
pub struct ApiMove {
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    #[serde(rename = "type")]
    pub type_: ApiNamedResource,
    pub damage_class: ApiNamedResource,
    #[serde(default)]
    pub effect_entries: Vec<ApiEffectEntry>,
}
