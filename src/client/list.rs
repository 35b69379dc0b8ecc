use futures::{StreamExt, TryStreamExt};

use super::PokedexClient;
use crate::{
    catalog::Generation,
    models::{
        remote_api::{ApiPokemonList, ApiPokemonSummary},
        BasicPokemon,
    },
    Error, Result,
};

impl PokedexClient {
    /// Lists `count` pokemon starting after `offset`, in upstream order.
    ///
    /// Every listed entry is looked up concurrently. One failed lookup fails
    /// the whole call; no partial list is returned.
    #[tracing::instrument(skip(self))]
    pub async fn list_pokemon(&self, count: u32, offset: u32) -> Result<Vec<BasicPokemon>> {
        let list_url = self.config.pokemon_list_url(count, offset);
        let list = self.fetcher.get_json::<ApiPokemonList>(&list_url).await?;

        let width = self.config.fan_out_width(list.results.len());
        let pokemons = futures::stream::iter(list.results.iter())
            .map(|entry| async move {
                let summary = self
                    .fetcher
                    .get_json::<ApiPokemonSummary>(&entry.url)
                    .await?;
                Ok::<_, Error>(BasicPokemon::from(&summary))
            })
            .buffered(width)
            .try_collect::<Vec<_>>()
            .await?;

        tracing::debug!(listed = pokemons.len(), "listed pokemon");
        Ok(pokemons)
    }

    /// Lists every pokemon whose national dex id falls in `generation`.
    pub async fn list_generation(&self, generation: Generation) -> Result<Vec<BasicPokemon>> {
        let (first, last) = generation.range();
        self.list_pokemon(last - first + 1, first - 1).await
    }
}
