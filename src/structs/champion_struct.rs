use serde::{Deserialize, Deserializer, Serialize};

/// A JSON `null` leaves the field at its zero value instead of failing the decode.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AbilityStat {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub stat_type: String,
    #[serde(deserialize_with = "null_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ability {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub ability_type: String,
    #[serde(deserialize_with = "null_default")]
    pub mana_cost: i64,
    #[serde(deserialize_with = "null_default")]
    pub mana_start: i64,
    #[serde(rename = "stats", deserialize_with = "null_default")]
    pub ability_stats: Vec<AbilityStat>,
}

/// `dps` is stored as given, it is not checked against `damage * attack_speed`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Offense {
    #[serde(deserialize_with = "null_default")]
    pub damage: i64,
    #[serde(deserialize_with = "null_default")]
    pub attack_speed: f32,
    #[serde(deserialize_with = "null_default")]
    pub dps: i64,
    #[serde(deserialize_with = "null_default")]
    pub range: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defense {
    #[serde(deserialize_with = "null_default")]
    pub health: i64,
    #[serde(deserialize_with = "null_default")]
    pub armor: i64,
    #[serde(deserialize_with = "null_default")]
    pub magic_resist: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChampionStats {
    #[serde(deserialize_with = "null_default")]
    pub offense: Offense,
    #[serde(deserialize_with = "null_default")]
    pub defense: Defense,
}

/// A Teamfight Tactics unit. Every field falls back to its zero value when
/// absent from the input, and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Champion {
    #[serde(deserialize_with = "null_default")]
    pub key: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub origin: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub class: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub cost: i64,
    #[serde(deserialize_with = "null_default")]
    pub ability: Ability,
    #[serde(rename = "stats", deserialize_with = "null_default")]
    pub champion_stats: ChampionStats,
    #[serde(rename = "items", deserialize_with = "null_default")]
    pub recommended_items: Vec<String>,
}
