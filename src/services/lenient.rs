//! Field-by-field decoding for request bodies that may be partly invalid.
//!
//! A value whose JSON type does not fit its target is left at its zero value
//! while its siblings are still filled in. Keys match exactly first, then
//! case-insensitively.

use serde_json::{Map, Value};

use crate::structs::champion_struct::{
    Ability, AbilityStat, Champion, ChampionStats, Defense, Offense,
};

pub trait FromLenient: Default {
    fn from_lenient(value: &Value) -> Self;
}

fn lookup<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).or_else(|| {
        object
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn field<T: FromLenient>(object: &Map<String, Value>, key: &str) -> T {
    lookup(object, key).map(T::from_lenient).unwrap_or_default()
}

impl FromLenient for String {
    fn from_lenient(value: &Value) -> Self {
        value.as_str().map(str::to_string).unwrap_or_default()
    }
}

impl FromLenient for i64 {
    fn from_lenient(value: &Value) -> Self {
        value.as_i64().unwrap_or_default()
    }
}

impl FromLenient for f32 {
    fn from_lenient(value: &Value) -> Self {
        value
            .as_f64()
            .filter(|f| f.abs() <= f32::MAX as f64)
            .map(|f| f as f32)
            .unwrap_or_default()
    }
}

impl<T: FromLenient> FromLenient for Vec<T> {
    fn from_lenient(value: &Value) -> Self {
        match value {
            Value::Array(items) => items.iter().map(T::from_lenient).collect(),
            _ => Vec::new(),
        }
    }
}

impl FromLenient for AbilityStat {
    fn from_lenient(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            stat_type: field(object, "type"),
            value: field(object, "value"),
        }
    }
}

impl FromLenient for Ability {
    fn from_lenient(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            name: field(object, "name"),
            description: field(object, "description"),
            ability_type: field(object, "type"),
            mana_cost: field(object, "manaCost"),
            mana_start: field(object, "manaStart"),
            ability_stats: field(object, "stats"),
        }
    }
}

impl FromLenient for Offense {
    fn from_lenient(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            damage: field(object, "damage"),
            attack_speed: field(object, "attackSpeed"),
            dps: field(object, "dps"),
            range: field(object, "range"),
        }
    }
}

impl FromLenient for Defense {
    fn from_lenient(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            health: field(object, "health"),
            armor: field(object, "armor"),
            magic_resist: field(object, "magicResist"),
        }
    }
}

impl FromLenient for ChampionStats {
    fn from_lenient(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            offense: field(object, "offense"),
            defense: field(object, "defense"),
        }
    }
}

impl FromLenient for Champion {
    fn from_lenient(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            key: field(object, "key"),
            name: field(object, "name"),
            origin: field(object, "origin"),
            class: field(object, "class"),
            cost: field(object, "cost"),
            ability: field(object, "ability"),
            champion_stats: field(object, "stats"),
            recommended_items: field(object, "items"),
        }
    }
}
