use serde::Deserialize;

use super::ApiEffectEntry;

#[derive(Deserialize, Debug)]
pub struct ApiAbility {
    #[serde(default)]
    pub effect_entries: Vec<ApiEffectEntry>,
}
