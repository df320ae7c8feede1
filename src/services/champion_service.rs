use serde_json::Value;

use super::lenient::FromLenient;
use crate::error::ChampionError;
use crate::structs::champion_struct::{
    Ability, AbilityStat, Champion, ChampionStats, Defense, Offense,
};

pub fn encode(champion: &Champion) -> Result<String, ChampionError> {
    serde_json::to_string(champion).map_err(ChampionError::Serialize)
}

/// Missing or `null` fields take their zero value and unknown fields are skipped. Only
/// malformed JSON or a mismatched JSON type is rejected.
pub fn decode(body: &[u8]) -> Result<Champion, ChampionError> {
    serde_json::from_slice::<Champion>(body).map_err(ChampionError::MalformedInput)
}

/// Reads the first JSON value in `body` and keeps every field that fits its
/// target. Bodies that are not JSON at all yield `Champion::default()`.
pub fn decode_lenient(body: &[u8]) -> Champion {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
    {
        Some(Ok(value)) => Champion::from_lenient(&value),
        Some(Err(_)) | None => Champion::default(),
    }
}

pub fn creation_summary(champion: &Champion) -> String {
    format!(
        "Name: {}, Ability Description: {}",
        champion.name, champion.ability.description
    )
}

// Built fresh on every call, nothing here is cached between requests.
pub fn aatrox() -> Champion {
    Champion {
        key: "Aatrox".to_string(),
        name: "Aatrox".to_string(),
        origin: vec!["Demon".to_string(), "Pirate".to_string()],
        class: vec!["Blademaster".to_string(), "Gunslinger".to_string()],
        cost: 3,
        ability: Ability {
            name: "The Darkin Blade".to_string(),
            description:
                "Aatrox cleaves the area in front of him, dealing damage to enemies inside it."
                    .to_string(),
            ability_type: "Active".to_string(),
            mana_cost: 100,
            mana_start: 0,
            ability_stats: vec![
                AbilityStat {
                    stat_type: "Damage".to_string(),
                    value: "350 / 575 / 850".to_string(),
                },
                AbilityStat {
                    stat_type: "Storm Duration".to_string(),
                    value: "8s".to_string(),
                },
            ],
        },
        champion_stats: ChampionStats {
            offense: Offense {
                damage: 65,
                attack_speed: 0.65,
                dps: 42,
                range: 1,
            },
            defense: Defense {
                health: 750,
                armor: 25,
                magic_resist: 20,
            },
        },
        recommended_items: vec![
            "titanichydra".to_string(),
            "phantomdancer".to_string(),
            "dragonsclaw".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn ahri() -> Champion {
        Champion {
            key: "ahri".to_string(),
            name: "Ahri".to_string(),
            origin: vec!["Wild".to_string()],
            class: vec!["Sorcerer".to_string()],
            cost: 2,
            ability: Ability {
                name: "Orb of Deception".to_string(),
                description: "Ahri fires an orb in a line.".to_string(),
                ability_type: "Active".to_string(),
                mana_cost: 75,
                mana_start: 0,
                ability_stats: vec![AbilityStat {
                    stat_type: "Magic Damage".to_string(),
                    value: "200 / 300 / 400".to_string(),
                }],
            },
            champion_stats: ChampionStats {
                offense: Offense {
                    damage: 50,
                    attack_speed: 0.55,
                    dps: 28,
                    range: 3,
                },
                defense: Defense {
                    health: 450,
                    armor: -5,
                    magic_resist: 20,
                },
            },
            recommended_items: vec!["rabadonsdeathcap".to_string()],
        }
    }

    #[test]
    fn round_trip_preserves_structure() {
        for champion in [aatrox(), ahri(), Champion::default()] {
            let text = encode(&champion).unwrap();
            assert_eq!(decode(text.as_bytes()).unwrap(), champion);
        }
    }

    #[test]
    fn encode_is_deterministic() {
        let champion = aatrox();
        assert_eq!(encode(&champion).unwrap(), encode(&champion).unwrap());
        assert_eq!(encode(&aatrox()).unwrap(), encode(&aatrox()).unwrap());
    }

    #[test]
    fn encode_uses_camel_case_keys_and_nested_stats() {
        let value: Value = serde_json::from_str(&encode(&aatrox()).unwrap()).unwrap();

        assert_eq!(value["name"], "Aatrox");
        assert_eq!(value["cost"], 3);
        assert_eq!(value["class"][0], "Blademaster");
        assert_eq!(value["ability"]["manaCost"], 100);
        assert_eq!(value["ability"]["manaStart"], 0);
        assert_eq!(value["ability"]["type"], "Active");
        assert_eq!(value["ability"]["stats"][1]["type"], "Storm Duration");
        assert_eq!(value["ability"]["stats"][1]["value"], "8s");
        assert_eq!(value["stats"]["offense"]["attackSpeed"].as_f64(), Some(0.65));
        assert_eq!(value["stats"]["offense"]["dps"], 42);
        assert_eq!(value["stats"]["defense"]["magicResist"], 20);
        assert_eq!(
            value["items"],
            serde_json::json!(["titanichydra", "phantomdancer", "dragonsclaw"])
        );
    }

    #[test]
    fn empty_object_decodes_to_zero_values() {
        let champion = decode(b"{}").unwrap();
        assert_eq!(champion, Champion::default());
        assert!(champion.name.is_empty());
        assert!(champion.ability.ability_stats.is_empty());
        assert_eq!(champion.champion_stats.offense.attack_speed, 0.0);
    }

    #[test]
    fn partial_input_fills_the_rest_with_defaults() {
        let champion = decode(br#"{"name":"Ahri","ability":{"description":"Test"}}"#).unwrap();
        assert_eq!(champion.name, "Ahri");
        assert_eq!(champion.ability.description, "Test");
        assert_eq!(champion.ability.mana_cost, 0);
        assert!(champion.recommended_items.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let champion = decode(br#"{"name":"Zed","tier":"S","ability":{"cooldown":[1,2]}}"#).unwrap();
        assert_eq!(champion.name, "Zed");
    }

    #[test]
    fn out_of_range_values_are_not_rejected() {
        let champion = decode(
            br#"{"cost":-1,"stats":{"offense":{"damage":10,"attackSpeed":2.0,"dps":999}}}"#,
        )
        .unwrap();
        assert_eq!(champion.cost, -1);
        assert_eq!(champion.champion_stats.offense.dps, 999);
    }

    #[test]
    fn type_mismatch_is_malformed_input() {
        let err = decode(br#"{"cost": "three"}"#).unwrap_err();
        assert!(matches!(err, ChampionError::MalformedInput(_)));

        let err = decode(br#"{"name": ["Ahri"]}"#).unwrap_err();
        assert!(matches!(err, ChampionError::MalformedInput(_)));
    }

    #[test]
    fn invalid_json_is_malformed_input() {
        let bodies: [&[u8]; 3] = [b"{", b"not json", b""];
        for body in bodies {
            assert!(matches!(
                decode(body),
                Err(ChampionError::MalformedInput(_))
            ));
        }
    }

    #[test]
    fn null_fields_decode_to_zero_values() {
        let champion = decode(br#"{"name":"Ahri","items":null}"#).unwrap();
        assert_eq!(champion.name, "Ahri");
        assert!(champion.recommended_items.is_empty());

        let champion = decode(br#"{"ability":null,"stats":{"offense":null}}"#).unwrap();
        assert_eq!(champion, Champion::default());
    }

    #[test]
    fn non_finite_attack_speed_encodes_as_null() {
        let mut champion = aatrox();
        champion.champion_stats.offense.attack_speed = f32::NAN;

        let value: Value = serde_json::from_str(&encode(&champion).unwrap()).unwrap();
        assert!(value["stats"]["offense"]["attackSpeed"].is_null());
        assert_eq!(
            decode(encode(&champion).unwrap().as_bytes())
                .unwrap()
                .champion_stats
                .offense
                .attack_speed,
            0.0
        );
    }

    #[test]
    fn lenient_decode_keeps_fields_around_a_mismatch() {
        let champion =
            decode_lenient(br#"{"name":"Ahri","cost":"three","ability":{"description":"Test"}}"#);
        assert_eq!(creation_summary(&champion), "Name: Ahri, Ability Description: Test");
    }

    #[test]
    fn lenient_decode_reads_only_the_first_value() {
        let champion = decode_lenient(br#"{"name":"Ahri"} {"name":"Zed"} trailing"#);
        assert_eq!(champion.name, "Ahri");
    }

    #[test]
    fn lenient_decode_of_non_json_is_zero_champion() {
        let bodies: [&[u8]; 4] = [b"", b"   ", b"{\"name\": \"Ahri\"", b"nope"];
        for body in bodies {
            assert_eq!(decode_lenient(body), Champion::default());
        }
    }

    #[test]
    fn summary_formats_name_and_description() {
        assert_eq!(
            creation_summary(&Champion::default()),
            "Name: , Ability Description: "
        );
        assert_eq!(
            creation_summary(&aatrox()),
            "Name: Aatrox, Ability Description: Aatrox cleaves the area in front of him, dealing damage to enemies inside it."
        );
    }
}
