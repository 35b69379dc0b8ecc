//! Client-side browsing state: generation ranges, search and type filters,
//! and batch-wise reveal of a loaded list.

use serde::{Deserialize, Serialize};

use crate::models::BasicPokemon;

pub const BATCH_SIZE: usize = 100;

pub const POKEMON_TYPES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Generation {
    #[default]
    All,
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
}

impl Generation {
    pub const ALL: [Generation; 10] = [
        Generation::All,
        Generation::I,
        Generation::II,
        Generation::III,
        Generation::IV,
        Generation::V,
        Generation::VI,
        Generation::VII,
        Generation::VIII,
        Generation::IX,
    ];

    /// Numeric selector used by the generation picker, `0` meaning all.
    /// Anything out of range selects all.
    pub fn from_id(id: u8) -> Self {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .unwrap_or(Generation::All)
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Inclusive national dex id range.
    pub fn range(self) -> (u32, u32) {
        match self {
            Generation::All => (1, 1025),
            Generation::I => (1, 151),
            Generation::II => (152, 251),
            Generation::III => (252, 386),
            Generation::IV => (387, 493),
            Generation::V => (494, 649),
            Generation::VI => (650, 721),
            Generation::VII => (722, 809),
            Generation::VIII => (810, 905),
            Generation::IX => (906, 1025),
        }
    }

    pub fn count(self) -> u32 {
        let (first, last) = self.range();
        last - first + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Generation::All => "All",
            Generation::I => "Gen I",
            Generation::II => "Gen II",
            Generation::III => "Gen III",
            Generation::IV => "Gen IV",
            Generation::V => "Gen V",
            Generation::VI => "Gen VI",
            Generation::VII => "Gen VII",
            Generation::VIII => "Gen VIII",
            Generation::IX => "Gen IX",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub type_tag: Option<String>,
}

impl CatalogFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = Some(type_tag.into());
        self
    }

    /// Search matches a case-insensitive substring of the name or a
    /// substring of the decimal id. Whitespace in the search is kept.
    pub fn matches(&self, pokemon: &BasicPokemon) -> bool {
        let search = self.search.to_lowercase();
        let search_hit = search.is_empty()
            || pokemon.name.to_lowercase().contains(&search)
            || pokemon.id.to_string().contains(&search);
        let type_hit = self
            .type_tag
            .as_deref()
            .is_none_or(|type_tag| pokemon.has_type(type_tag));
        search_hit && type_hit
    }
}

/// A loaded list with a filter and a growing window over the filtered
/// entries.
#[derive(Debug, Clone)]
pub struct CatalogView {
    entries: Vec<BasicPokemon>,
    filter: CatalogFilter,
    loaded: usize,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogView {
    pub fn new(entries: Vec<BasicPokemon>) -> Self {
        Self {
            entries,
            filter: CatalogFilter::default(),
            loaded: BATCH_SIZE,
        }
    }

    /// Swaps in a newly listed range, e.g. after a generation change, and
    /// shows the first batch again.
    pub fn replace_entries(&mut self, entries: Vec<BasicPokemon>) {
        self.entries = entries;
        self.loaded = BATCH_SIZE;
    }

    pub fn set_filter(&mut self, filter: CatalogFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn entries(&self) -> &[BasicPokemon] {
        &self.entries
    }

    pub fn filtered(&self) -> Vec<&BasicPokemon> {
        self.entries
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    pub fn displayed(&self) -> Vec<&BasicPokemon> {
        let mut filtered = self.filtered();
        filtered.truncate(self.loaded);
        filtered
    }

    pub fn has_more(&self) -> bool {
        self.displayed().len() < self.filtered().len()
    }

    pub fn load_more(&mut self) {
        let filtered = self.filtered().len();
        self.loaded = (self.loaded + BATCH_SIZE).min(filtered);
    }
}
