use serde::Deserialize;

use super::ApiNamedResource;

#[derive(Deserialize, Debug)]
pub struct ApiEvolutionChain {
    pub chain: ApiChainLink,
}

/// One node of the evolution tree. `evolution_details` describes the edge
/// leading into this node and is empty for the root.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiChainLink {
    pub species: ApiNamedResource,
    #[serde(default)]
    pub evolution_details: Vec<ApiEvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ApiChainLink>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiEvolutionDetail {
    pub trigger: Option<ApiNamedResource>,
    pub min_level: Option<u32>,
    pub item: Option<ApiNamedResource>,
}
