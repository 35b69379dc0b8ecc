#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use pokedex::{Error, PokedexClient, PokedexConfig, RawResponse, ResponseCache, Transport};
use serde_json::{json, Value};

pub const BASE: &str = "http://pokeapi.test/api/v2";

enum Route {
    Respond(RawResponse),
    Unreachable,
}

/// In-memory upstream. Unknown URLs answer 404.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, Route>>,
    delays: Mutex<HashMap<String, Duration>>,
    hits: Mutex<HashMap<String, usize>>,
}

impl StubTransport {
    pub fn json(&self, url: impl Into<String>, value: Value) {
        self.raw(url, 200, value.to_string());
    }

    pub fn status(&self, url: impl Into<String>, status: u16) {
        self.raw(url, status, json!({ "detail": "stubbed" }).to_string());
    }

    pub fn raw(&self, url: impl Into<String>, status: u16, body: impl Into<String>) {
        let response = RawResponse {
            status,
            body: body.into().into_bytes(),
        };
        self.routes
            .lock()
            .unwrap()
            .insert(url.into(), Route::Respond(response));
    }

    pub fn unreachable(&self, url: impl Into<String>) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.into(), Route::Unreachable);
    }

    pub fn delay(&self, url: impl Into<String>, delay: Duration) {
        self.delays.lock().unwrap().insert(url.into(), delay);
    }

    pub fn hits(&self, url: &str) -> usize {
        self.hits.lock().unwrap().get(url).copied().unwrap_or_default()
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> pokedex::Result<RawResponse> {
        *self.hits.lock().unwrap().entry(url.to_string()).or_default() += 1;

        let delay = self.delays.lock().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.routes.lock().unwrap().get(url) {
            Some(Route::Respond(response)) => Ok(response.clone()),
            Some(Route::Unreachable) => Err(Error::Network {
                url: url.to_string(),
                reason: "connection refused".into(),
            }),
            None => Ok(RawResponse {
                status: 404,
                body: b"Not Found".to_vec(),
            }),
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn pokemon_url(id: u32) -> String {
    format!("{BASE}/pokemon/{id}")
}

pub fn species_url(id: u32) -> String {
    format!("{BASE}/pokemon-species/{id}/")
}

pub fn chain_url(id: u32) -> String {
    format!("{BASE}/evolution-chain/{id}/")
}

pub fn move_url(name: &str) -> String {
    format!("{BASE}/move/{name}/")
}

pub fn ability_url(name: &str) -> String {
    format!("{BASE}/ability/{name}/")
}

pub fn artwork_url(id: u32) -> String {
    format!("{BASE}/sprites/official-artwork/{id}.png")
}

pub fn front_url(id: u32) -> String {
    format!("{BASE}/sprites/{id}.png")
}

fn named(name: &str) -> Value {
    json!({ "name": name, "url": "" })
}

fn english_and_french(key: &str, en: &str, fr: &str) -> Vec<Value> {
    vec![
        json!({ key: fr, "language": named("fr") }),
        json!({ key: en, "language": named("en") }),
    ]
}

/// A pokemon record plus how it is learned, as listed upstream.
#[derive(Clone)]
pub struct PokemonFixture {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub artwork: bool,
    /// `(move, learn method, level)`
    pub moves: Vec<(String, String, u32)>,
    /// `(ability, hidden)`
    pub abilities: Vec<(String, bool)>,
}

impl PokemonFixture {
    pub fn new(id: u32, name: &str, types: &[&str]) -> Self {
        Self {
            id,
            name: name.into(),
            types: types.iter().map(|t| t.to_string()).collect(),
            artwork: true,
            moves: Vec::new(),
            abilities: Vec::new(),
        }
    }

    pub fn without_artwork(mut self) -> Self {
        self.artwork = false;
        self
    }

    pub fn learns(mut self, name: &str, method: &str, level: u32) -> Self {
        self.moves.push((name.into(), method.into(), level));
        self
    }

    pub fn ability(mut self, name: &str, hidden: bool) -> Self {
        self.abilities.push((name.into(), hidden));
        self
    }

    pub fn to_json(&self) -> Value {
        let id = self.id;
        let artwork = self.artwork.then(|| artwork_url(id));
        let stats = [
            ("hp", 45),
            ("attack", 49),
            ("defense", 49),
            ("special-attack", 65),
            ("special-defense", 65),
            ("speed", 45),
        ];

        json!({
            "id": id,
            "name": self.name,
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "sprites": {
                "front_default": front_url(id),
                "back_default": format!("{BASE}/sprites/back/{id}.png"),
                "front_shiny": format!("{BASE}/sprites/shiny/{id}.png"),
                "back_shiny": null,
                "other": {
                    "official-artwork": {
                        "front_default": artwork,
                        "front_shiny": null,
                    }
                }
            },
            "types": self.types.iter().enumerate().map(|(slot, t)| json!({
                "slot": slot + 1,
                "type": { "name": t, "url": format!("{BASE}/type/{t}/") },
            })).collect::<Vec<_>>(),
            "stats": stats.iter().map(|(name, base)| json!({
                "base_stat": base,
                "effort": 0,
                "stat": named(name),
            })).collect::<Vec<_>>(),
            "abilities": self.abilities.iter().enumerate().map(|(slot, (name, hidden))| json!({
                "ability": { "name": name, "url": ability_url(name) },
                "is_hidden": hidden,
                "slot": slot + 1,
            })).collect::<Vec<_>>(),
            "moves": self.moves.iter().map(|(name, method, level)| json!({
                "move": { "name": name, "url": move_url(name) },
                "version_group_details": [{
                    "level_learned_at": level,
                    "move_learn_method": named(method),
                    "version_group": named("scarlet-violet"),
                }],
            })).collect::<Vec<_>>(),
            "species": { "name": self.name, "url": species_url(id) },
        })
    }
}

pub fn species_json(id: u32, chain_id: Option<u32>) -> Value {
    json!({
        "id": id,
        "flavor_text_entries": [
            { "flavor_text": "Une graine.", "language": named("fr") },
            {
                "flavor_text": "A strange seed was\nplanted on its\u{c}back at birth.",
                "language": named("en"),
            },
        ],
        "genera": english_and_french("genus", "Seed Pokémon", "Pokémon Graine"),
        "habitat": named("grassland"),
        "generation": named("generation-i"),
        "capture_rate": 45,
        "base_happiness": 50,
        "growth_rate": named("medium-slow"),
        "egg_groups": [named("monster"), named("plant")],
        "gender_rate": 1,
        "is_legendary": false,
        "is_mythical": false,
        "evolution_chain": chain_id.map(|id| json!({ "url": chain_url(id) })),
    })
}

pub fn move_json(move_type: &str, power: Option<u32>, effect: Option<&str>) -> Value {
    let effect_entries = match effect {
        Some(effect) => english_and_french("short_effect", effect, "Effet."),
        None => vec![json!({ "short_effect": "Effet.", "language": named("fr") })],
    };
    json!({
        "power": power,
        "accuracy": power.map(|_| 100),
        "pp": 25,
        "type": named(move_type),
        "damage_class": named(if power.is_some() { "physical" } else { "status" }),
        "effect_entries": effect_entries,
    })
}

pub fn ability_json(effect: &str) -> Value {
    json!({ "effect_entries": english_and_french("short_effect", effect, "Effet.") })
}

/// Evolution tree node. `details` describes the edge into this node.
pub fn link(id: u32, name: &str, details: Option<Value>, evolves_to: Vec<Value>) -> Value {
    json!({
        "is_baby": false,
        "species": { "name": name, "url": species_url(id) },
        "evolution_details": details.into_iter().collect::<Vec<_>>(),
        "evolves_to": evolves_to,
    })
}

pub fn by_level(level: u32) -> Value {
    json!({ "trigger": named("level-up"), "min_level": level, "item": null })
}

pub fn by_item(item: &str) -> Value {
    json!({ "trigger": named("use-item"), "min_level": null, "item": named(item) })
}

/// A stubbed upstream plus helpers that register consistent records.
pub struct Dex {
    pub stub: Arc<StubTransport>,
    pub cache: ResponseCache,
}

impl Dex {
    pub fn new() -> Self {
        init_tracing();
        Self {
            stub: Arc::new(StubTransport::default()),
            cache: ResponseCache::new(),
        }
    }

    pub fn config(&self) -> PokedexConfig {
        PokedexConfig::default().with_base_url(BASE)
    }

    pub fn client(&self) -> PokedexClient {
        self.client_with(self.config())
    }

    pub fn client_with(&self, config: PokedexConfig) -> PokedexClient {
        PokedexClient::with_transport(config, self.stub.clone(), self.cache.clone())
    }

    /// Reachable by id, by name and by the trailing-slash link used in
    /// listings.
    pub fn add_pokemon(&self, pokemon: &PokemonFixture) {
        let body = pokemon.to_json();
        self.stub.json(pokemon_url(pokemon.id), body.clone());
        self.stub
            .json(format!("{}/", pokemon_url(pokemon.id)), body.clone());
        self.stub
            .json(format!("{BASE}/pokemon/{}", pokemon.name), body);
    }

    pub fn add_species(&self, id: u32, chain_id: Option<u32>) {
        self.stub.json(species_url(id), species_json(id, chain_id));
    }

    pub fn add_chain(&self, chain_id: u32, root: Value) {
        self.stub
            .json(chain_url(chain_id), json!({ "id": chain_id, "chain": root }));
    }

    pub fn add_move(&self, name: &str, move_type: &str, power: Option<u32>) {
        self.stub.json(
            move_url(name),
            move_json(move_type, power, Some(format!("Effect of {name}.").as_str())),
        );
    }

    pub fn add_ability(&self, name: &str) {
        self.stub
            .json(ability_url(name), ability_json(&format!("Effect of {name}.")));
    }

    /// Registers a listing page whose entries point at the given ids.
    pub fn add_listing(&self, limit: u32, offset: u32, ids: &[(u32, &str)]) {
        let results: Vec<Value> = ids
            .iter()
            .map(|(id, name)| json!({ "name": name, "url": format!("{}/", pokemon_url(*id)) }))
            .collect();
        self.stub.json(
            listing_url(limit, offset),
            json!({ "count": 1025, "next": null, "previous": null, "results": results }),
        );
    }
}

pub fn listing_url(limit: u32, offset: u32) -> String {
    format!("{BASE}/pokemon?limit={limit}&offset={offset}")
}
