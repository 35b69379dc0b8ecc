use crate::{
    config::PokedexConfig,
    models::{
        remote_api::{ApiChainLink, ApiPokemonSummary},
        Diagnostic, EvolutionOutcome, EvolutionStage,
    },
    req_caching::Fetcher,
    Error, Result,
};

/// Numeric id at the end of a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon-species/133/`.
pub fn species_id_from_url(url: &str) -> Option<u32> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()?
        .parse()
        .ok()
}

/// Walks an evolution tree depth-first, pre-order, children in listed
/// order.
///
/// A node whose pokemon record cannot be loaded is dropped together with
/// its subtree and reported in the diagnostics; the rest of the tree is
/// still walked. This never fails.
pub async fn traverse_evolutions(
    fetcher: &Fetcher,
    config: &PokedexConfig,
    root: &ApiChainLink,
) -> EvolutionOutcome {
    let mut outcome = EvolutionOutcome::default();
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        match resolve_stage(fetcher, config, node).await {
            Ok(stage) => {
                outcome.stages.push(stage);
                // reversed so the first child pops next
                pending.extend(node.evolves_to.iter().rev());
            }
            Err(e) => {
                tracing::warn!(species = %node.species.name, error = %e, "skipping evolution stage");
                outcome.diagnostics.push(Diagnostic::EvolutionStage {
                    species: node.species.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    outcome
}

async fn resolve_stage(
    fetcher: &Fetcher,
    config: &PokedexConfig,
    node: &ApiChainLink,
) -> Result<EvolutionStage> {
    let id = species_id_from_url(&node.species.url).ok_or_else(|| Error::Decode {
        url: node.species.url.clone(),
        reason: "species url does not end in a numeric id".into(),
    })?;
    let pokemon = fetcher
        .get_json::<ApiPokemonSummary>(&config.pokemon_url(id))
        .await?;

    let details = node.evolution_details.first();
    Ok(EvolutionStage {
        name: node.species.name.clone(),
        id,
        sprite: pokemon.sprites.thumbnail().map(str::to_string),
        trigger: details
            .and_then(|d| d.trigger.as_ref())
            .map_or("base", |t| t.name.as_str())
            .to_string(),
        min_level: details.and_then(|d| d.min_level),
        item: details.and_then(|d| d.item.as_ref()).map(|i| i.name.clone()),
    })
}
