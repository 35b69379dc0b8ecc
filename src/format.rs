//! Display helpers the rendering layer relies on.

use serde::{Deserialize, Serialize};

/// `7` → `"#0007"`.
pub fn format_pokemon_id(id: u32) -> String {
    format!("#{id:04}")
}

/// Slug to title case: `"mr-mime"` → `"Mr Mime"`.
pub fn format_pokemon_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_stat_name(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

/// Coarse rating of a base stat, used to color stat bars.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatSeverity {
    Low,
    Fair,
    Good,
    Great,
    Excellent,
}

impl StatSeverity {
    pub fn from_base(value: u16) -> Self {
        match value {
            0..50 => StatSeverity::Low,
            50..80 => StatSeverity::Fair,
            80..100 => StatSeverity::Good,
            100..120 => StatSeverity::Great,
            _ => StatSeverity::Excellent,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StatSeverity::Low => "bg-red-500",
            StatSeverity::Fair => "bg-orange-500",
            StatSeverity::Good => "bg-yellow-500",
            StatSeverity::Great => "bg-green-500",
            StatSeverity::Excellent => "bg-emerald-500",
        }
    }
}

pub fn stat_color(value: u16) -> &'static str {
    StatSeverity::from_base(value).css_class()
}

/// Female/male split derived from the upstream gender rate, which counts
/// eighths female and uses `-1` for genderless species.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum GenderRatio {
    Genderless,
    Split { female_percent: f32, male_percent: f32 },
}

impl GenderRatio {
    pub fn from_rate(rate: i8) -> Self {
        if rate < 0 {
            return GenderRatio::Genderless;
        }
        let female_percent = f32::from(rate) / 8.0 * 100.0;
        GenderRatio::Split {
            female_percent,
            male_percent: 100.0 - female_percent,
        }
    }
}

/// Decimetres to metres: `7` → `"0.7 m"`.
pub fn format_height(decimetres: u32) -> String {
    format!("{} m", f64::from(decimetres) / 10.0)
}

/// Hectograms to kilograms: `69` → `"6.9 kg"`.
pub fn format_weight(hectograms: u32) -> String {
    format!("{} kg", f64::from(hectograms) / 10.0)
}
