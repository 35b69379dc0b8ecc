//! Cached PokeAPI client for catalog front ends.
//!
//! [`PokedexClient`] lists pokemon in dex order and aggregates the detail
//! record shown when one is selected. Every request goes through a
//! [`ResponseCache`] keyed by URL, so revisiting a pokemon costs no network
//! traffic.

pub mod cache;
pub mod catalog;
pub mod client;
pub mod config;
mod error;
pub mod format;
pub mod models;
pub mod req_caching;
pub mod req_util;

pub use cache::ResponseCache;
pub use catalog::{CatalogFilter, CatalogView, Generation};
pub use client::{traverse_evolutions, PokedexClient};
pub use config::PokedexConfig;
pub use error::{AggregationStep, Error, Result};
pub use models::{
    AbilityRecord, BasicPokemon, DetailedPokemon, Diagnostic, EvolutionOutcome, EvolutionStage,
    MoveRecord, SpeciesInfo, SpriteSet, StatRecord,
};
pub use req_caching::Fetcher;
pub use req_util::{RawResponse, ReqwestTransport, Transport};
