//! Hero data as received from the account loader.

use crate::models::stats::StatKind;
use serde::{Deserialize, Serialize};

/// A hero on the account, with base stats and currently equipped artifacts.
///
/// Base stats are the values before any artifact contribution; the optimizer
/// translates user targets into deltas relative to them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hero {
    pub id: u32,
    pub name: String,

    /// Equipment grade as a star count (gates the Ring slot at 4 stars).
    /// Accepts both a plain number and the `"4Stars"` wire form on input.
    #[serde(deserialize_with = "deserialize_grade")]
    pub grade: u8,

    /// Awakening level (gates Cloak at 5 and Banner at 6).
    pub awaken_level: u8,

    pub health: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub critical_chance: f64,
    pub critical_damage: f64,
    pub resistance: f64,
    pub accuracy: f64,

    /// Ids of artifacts currently equipped on this hero, possibly empty.
    /// The artifact objects themselves stay owned by the account.
    #[serde(default)]
    pub artifacts: Vec<u32>,
}

impl Hero {
    /// Base value for the given stat.
    pub fn stat(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::CriticalChance => self.critical_chance,
            StatKind::CriticalDamage => self.critical_damage,
            StatKind::Resistance => self.resistance,
            StatKind::Accuracy => self.accuracy,
        }
    }

    pub fn has_equipped(&self, artifact_id: u32) -> bool {
        self.artifacts.contains(&artifact_id)
    }
}

/// Decode a star count from the wire format used by the account source,
/// e.g. `"4Stars"` -> 4. Unknown shapes decode to `None`.
pub fn grade_from_stars_str(grade: &str) -> Option<u8> {
    grade.strip_suffix("Stars").and_then(|stars| stars.parse().ok())
}

fn deserialize_grade<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum GradeRepr {
        Stars(u8),
        Wire(String),
    }

    match GradeRepr::deserialize(deserializer)? {
        GradeRepr::Stars(stars) => Ok(stars),
        GradeRepr::Wire(text) => grade_from_stars_str(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid grade: {}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hero() -> Hero {
        Hero {
            id: 1,
            name: "Test Hero".to_string(),
            grade: 5,
            awaken_level: 6,
            health: 15000.0,
            attack: 1200.0,
            defense: 900.0,
            speed: 98.0,
            critical_chance: 0.5,
            critical_damage: 0.8,
            resistance: 30.0,
            accuracy: 45.0,
            artifacts: vec![10, 11],
        }
    }

    #[test]
    fn stat_accessor_covers_all_kinds() {
        let hero = sample_hero();
        assert_eq!(hero.stat(StatKind::Health), 15000.0);
        assert_eq!(hero.stat(StatKind::Speed), 98.0);
        assert_eq!(hero.stat(StatKind::Accuracy), 45.0);
    }

    #[test]
    fn equipped_lookup() {
        let hero = sample_hero();
        assert!(hero.has_equipped(10));
        assert!(!hero.has_equipped(12));
    }

    #[test]
    fn grade_decodes_from_stars_string() {
        assert_eq!(grade_from_stars_str("3Stars"), Some(3));
        assert_eq!(grade_from_stars_str("6Stars"), Some(6));
        assert_eq!(grade_from_stars_str("Stars"), None);
        assert_eq!(grade_from_stars_str("legendary"), None);
    }

    #[test]
    fn hero_grade_accepts_both_wire_forms() {
        let json = serde_json::to_string(&sample_hero()).unwrap();
        let hero: Hero = serde_json::from_str(&json).unwrap();
        assert_eq!(hero.grade, 5);

        let wire = json.replace("\"grade\":5", "\"grade\":\"5Stars\"");
        let hero: Hero = serde_json::from_str(&wire).unwrap();
        assert_eq!(hero.grade, 5);
    }
}
