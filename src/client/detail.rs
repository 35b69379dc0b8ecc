use std::fmt::Display;

use futures::StreamExt;

use super::{traverse_evolutions, PokedexClient};
use crate::{
    models::{
        detailed::sort_moves,
        remote_api::{
            ApiAbility, ApiEvolutionChain, ApiMove, ApiPokemon, ApiPokemonAbility, ApiPokemonMove,
            ApiSpecies,
        },
        AbilityRecord, BasicPokemon, DetailedPokemon, Diagnostic, EvolutionOutcome, MoveRecord,
        SpeciesInfo, SpriteSet, StatRecord,
    },
    AggregationStep, Error, Result,
};

impl PokedexClient {
    /// Loads the full record for one pokemon, by national dex id or slug.
    ///
    /// Only the pokemon and species records are required. Evolutions, moves
    /// and abilities are best-effort: their failures turn into an empty
    /// chain or placeholder entries, each listed in `diagnostics`.
    #[tracing::instrument(skip_all, fields(pokemon = %id_or_name))]
    pub async fn pokemon_detail(&self, id_or_name: impl Display) -> Result<DetailedPokemon> {
        let pokemon = self
            .fetcher
            .get_json::<ApiPokemon>(&self.config.pokemon_url(id_or_name))
            .await
            .map_err(Error::aggregation(AggregationStep::Pokemon))?;
        let species = self
            .fetcher
            .get_json::<ApiSpecies>(&pokemon.species.url)
            .await
            .map_err(Error::aggregation(AggregationStep::Species))?;

        let (evolutions, (moves, move_diagnostics), (abilities, ability_diagnostics)) = futures::join!(
            self.load_evolutions(&species),
            self.load_moves(&pokemon.moves),
            self.load_abilities(&pokemon.abilities)
        );

        let mut diagnostics = evolutions.diagnostics;
        diagnostics.extend(move_diagnostics);
        diagnostics.extend(ability_diagnostics);

        let detail = DetailedPokemon {
            basic: BasicPokemon::from(&pokemon),
            height: pokemon.height,
            weight: pokemon.weight,
            base_experience: pokemon.base_experience,
            abilities,
            stats: pokemon
                .stats
                .iter()
                .map(|s| StatRecord {
                    name: s.stat.name.clone(),
                    base: s.base_stat,
                })
                .collect(),
            moves,
            sprites: SpriteSet::from(&pokemon.sprites),
            species: SpeciesInfo::from(&species),
            evolutions: evolutions.stages,
            diagnostics,
        };

        tracing::info!(
            id = detail.basic.id,
            moves = detail.moves.len(),
            evolutions = detail.evolutions.len(),
            skipped = detail.diagnostics.len(),
            "loaded pokemon detail"
        );
        Ok(detail)
    }

    async fn load_evolutions(&self, species: &ApiSpecies) -> EvolutionOutcome {
        let chain = match &species.evolution_chain {
            Some(link) => self
                .fetcher
                .get_json::<ApiEvolutionChain>(&link.url)
                .await
                .map_err(|e| e.to_string()),
            None => Err("species has no evolution chain".to_string()),
        };

        match chain {
            Ok(chain) => traverse_evolutions(&self.fetcher, &self.config, &chain.chain).await,
            Err(reason) => {
                tracing::warn!(%reason, "evolution chain unavailable");
                EvolutionOutcome {
                    stages: Vec::new(),
                    diagnostics: vec![Diagnostic::EvolutionChain { reason }],
                }
            }
        }
    }

    /// The first `move_limit` listed moves, sorted for display.
    async fn load_moves(&self, listed: &[ApiPokemonMove]) -> (Vec<MoveRecord>, Vec<Diagnostic>) {
        let listed = &listed[..self.config.moves_to_fetch(listed.len())];
        let width = self.config.fan_out_width(listed.len());

        let (mut moves, diagnostics): (Vec<_>, Vec<_>) = futures::stream::iter(listed)
            .map(|entry| async move {
                match self.fetcher.get_json::<ApiMove>(&entry.move_.url).await {
                    Ok(detail) => (MoveRecord::new(entry, &detail), None),
                    Err(e) => {
                        tracing::warn!(name = %entry.move_.name, error = %e, "using move placeholder");
                        let diagnostic = Diagnostic::Move {
                            name: entry.move_.name.clone(),
                            reason: e.to_string(),
                        };
                        (MoveRecord::placeholder(&entry.move_.name), Some(diagnostic))
                    }
                }
            })
            .buffered(width)
            .unzip()
            .await;

        sort_moves(&mut moves);
        (moves, diagnostics.into_iter().flatten().collect())
    }

    async fn load_abilities(
        &self,
        listed: &[ApiPokemonAbility],
    ) -> (Vec<AbilityRecord>, Vec<Diagnostic>) {
        let width = self.config.fan_out_width(listed.len());

        let (abilities, diagnostics): (Vec<_>, Vec<Option<Diagnostic>>) =
            futures::stream::iter(listed)
                .map(|entry| async move {
                    match self.fetcher.get_json::<ApiAbility>(&entry.ability.url).await {
                        Ok(detail) => (AbilityRecord::new(entry, &detail), None),
                        Err(e) => {
                            tracing::warn!(name = %entry.ability.name, error = %e, "using ability placeholder");
                            let diagnostic = Diagnostic::Ability {
                                name: entry.ability.name.clone(),
                                reason: e.to_string(),
                            };
                            (AbilityRecord::placeholder(entry), Some(diagnostic))
                        }
                    }
                })
                .buffered(width)
                .unzip()
                .await;

        (abilities, diagnostics.into_iter().flatten().collect())
    }
}
