use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_MOVE_LIMIT: usize = 50;

/// Client settings. Deserializable so a host application can embed it in
/// its own configuration file; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    /// Base path used for listing and lookups by id or name. Follow-up
    /// requests use the absolute URLs found in upstream responses.
    pub base_url: String,
    pub user_agent: String,
    /// Number of listed moves fetched for a detail record, in listing order.
    /// Values above [`DEFAULT_MOVE_LIMIT`] are treated as that limit.
    pub move_limit: usize,
    /// Upper bound on concurrent requests within one fan-out. `None` puts
    /// every request of the fan-out in flight at once.
    pub max_in_flight: Option<usize>,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            move_limit: DEFAULT_MOVE_LIMIT,
            max_in_flight: None,
        }
    }
}

impl PokedexConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Lowers the move limit. Capped at [`DEFAULT_MOVE_LIMIT`].
    pub fn with_move_limit(mut self, move_limit: usize) -> Self {
        self.move_limit = move_limit.min(DEFAULT_MOVE_LIMIT);
        self
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = Some(max_in_flight);
        self
    }

    /// Concurrency for a fan-out of `len` requests. Never zero.
    pub(crate) fn fan_out_width(&self, len: usize) -> usize {
        self.max_in_flight.unwrap_or(len).clamp(1, len.max(1))
    }

    /// Moves to fetch out of `listed`, capped at [`DEFAULT_MOVE_LIMIT`]
    /// whatever `move_limit` holds.
    pub(crate) fn moves_to_fetch(&self, listed: usize) -> usize {
        listed.min(self.move_limit.min(DEFAULT_MOVE_LIMIT))
    }

    fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub(crate) fn pokemon_url(&self, id_or_name: impl std::fmt::Display) -> String {
        format!("{}/pokemon/{}", self.api_root(), id_or_name)
    }

    pub(crate) fn pokemon_list_url(&self, limit: u32, offset: u32) -> String {
        format!("{}/pokemon?limit={limit}&offset={offset}", self.api_root())
    }
}
