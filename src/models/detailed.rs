use serde::{Deserialize, Serialize};

use super::{
    remote_api::{
        english, ApiAbility, ApiEffectEntry, ApiMove, ApiPokemonAbility, ApiPokemonMove,
        ApiSpecies,
    },
    BasicPokemon, Diagnostic, EvolutionStage, SpriteSet,
};

pub const UNKNOWN: &str = "Unknown";
pub const NO_EFFECT: &str = "No effect description available.";
pub const NO_FLAVOR_TEXT: &str = "No Pokédex entry available.";
pub const MOVE_UNAVAILABLE: &str = "Unable to load move details.";
pub const ABILITY_UNAVAILABLE: &str = "Unable to load ability details.";
pub const LEVEL_UP: &str = "level-up";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DetailedPokemon {
    #[serde(flatten)]
    pub basic: BasicPokemon,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub abilities: Vec<AbilityRecord>,
    pub stats: Vec<StatRecord>,
    pub moves: Vec<MoveRecord>,
    pub sprites: SpriteSet,
    pub species: SpeciesInfo,
    pub evolutions: Vec<EvolutionStage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AbilityRecord {
    pub name: String,
    pub is_hidden: bool,
    pub effect: String,
}

impl AbilityRecord {
    pub fn new(listed: &ApiPokemonAbility, detail: &ApiAbility) -> Self {
        Self {
            name: listed.ability.name.clone(),
            is_hidden: listed.is_hidden,
            effect: effect_text(&detail.effect_entries),
        }
    }

    pub fn placeholder(listed: &ApiPokemonAbility) -> Self {
        Self {
            name: listed.ability.name.clone(),
            is_hidden: listed.is_hidden,
            effect: ABILITY_UNAVAILABLE.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    pub name: String,
    pub base: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub name: String,
    pub level: u32,
    pub learn_method: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: u32,
    pub damage_class: String,
    pub effect: String,
}

impl MoveRecord {
    pub fn new(listed: &ApiPokemonMove, detail: &ApiMove) -> Self {
        let learned = listed.preferred_detail();
        Self {
            name: listed.move_.name.clone(),
            level: learned.map_or(0, |d| d.level_learned_at),
            learn_method: learned
                .map_or("unknown", |d| d.move_learn_method.name.as_str())
                .to_string(),
            move_type: detail.type_.name.clone(),
            power: detail.power,
            accuracy: detail.accuracy,
            pp: detail.pp.unwrap_or_default(),
            damage_class: detail.damage_class.name.clone(),
            effect: effect_text(&detail.effect_entries),
        }
    }

    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 0,
            learn_method: "unknown".into(),
            move_type: "normal".into(),
            power: None,
            accuracy: None,
            pp: 0,
            damage_class: "status".into(),
            effect: MOVE_UNAVAILABLE.into(),
        }
    }

    pub fn is_level_up(&self) -> bool {
        self.learn_method == LEVEL_UP
    }
}

/// English short effect, or [`NO_EFFECT`] when it is missing or blank.
fn effect_text(entries: &[ApiEffectEntry]) -> String {
    english(entries)
        .map(|e| e.short_effect.as_str())
        .filter(|effect| !effect.is_empty())
        .unwrap_or(NO_EFFECT)
        .to_string()
}

/// Level-up moves first, ascending by level. Everything else keeps its
/// current relative order after them.
pub fn sort_moves(moves: &mut [MoveRecord]) {
    moves.sort_by_key(|m| if m.is_level_up() { (0, m.level) } else { (1, 0) });
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpeciesInfo {
    pub genus: String,
    pub flavor_text: String,
    pub habitat: Option<String>,
    pub generation: String,
    pub capture_rate: u32,
    pub base_happiness: Option<u32>,
    pub growth_rate: String,
    pub egg_groups: Vec<String>,
    /// Eighths female, `-1` for genderless.
    pub gender_rate: i8,
    pub is_legendary: bool,
    pub is_mythical: bool,
}

impl From<&ApiSpecies> for SpeciesInfo {
    fn from(value: &ApiSpecies) -> Self {
        Self {
            genus: english(&value.genera)
                .map(|g| g.genus.as_str())
                .filter(|genus| !genus.is_empty())
                .unwrap_or(UNKNOWN)
                .into(),
            flavor_text: english(&value.flavor_text_entries)
                .map(|f| clean_flavor_text(&f.flavor_text))
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| NO_FLAVOR_TEXT.into()),
            habitat: value.habitat.as_ref().map(|h| h.name.clone()),
            generation: value
                .generation
                .as_ref()
                .map_or_else(|| UNKNOWN.into(), |g| generation_label(&g.name)),
            capture_rate: value.capture_rate,
            base_happiness: value.base_happiness,
            growth_rate: value
                .growth_rate
                .as_ref()
                .map_or(UNKNOWN, |g| g.name.as_str())
                .into(),
            egg_groups: value.egg_groups.iter().map(|g| g.name.clone()).collect(),
            gender_rate: value.gender_rate,
            is_legendary: value.is_legendary,
            is_mythical: value.is_mythical,
        }
    }
}

/// `"generation-iv"` → `"GEN IV"`.
pub fn generation_label(name: &str) -> String {
    name.replacen("generation-", "Gen ", 1).to_uppercase()
}

/// Upstream flavor text is wrapped for the original game screens with form
/// feeds and newlines.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace(['\u{c}', '\n'], " ")
}
