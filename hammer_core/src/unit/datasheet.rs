//! Unit - A datasheet's statline, weapons and abilities

use super::WeaponProfile;
use crate::dataset::null_as_default;
use crate::probability::IMPOSSIBLE_ROLL;
use crate::types::WeaponKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The part of a unit that matters when it is the target of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveProfile {
    /// Toughness compared against weapon strength
    pub toughness: u32,
    /// Armour save threshold, 7 = no save
    pub save: u32,
    /// Invulnerable save threshold, unaffected by AP
    pub invulnerable_save: Option<u32>,
}

impl DefensiveProfile {
    pub fn new(toughness: u32, save: u32, invulnerable_save: Option<u32>) -> Self {
        DefensiveProfile {
            toughness,
            save,
            invulnerable_save,
        }
    }
}

/// A unit built from one datasheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub movement: u32,
    pub wounds: u32,
    pub objective_control: u32,
    pub toughness: u32,
    pub leadership: u32,
    pub save: u32,
    pub invulnerable_save: Option<u32>,
    /// Weapon profiles in datasheet order, ranged first
    pub weapons: Vec<WeaponProfile>,
    pub abilities: Abilities,
    pub points: Vec<PointsCost>,
}

impl Unit {
    /// Create a unit with the given defenses and no other stats
    pub fn new(name: impl Into<String>, defense: DefensiveProfile) -> Self {
        Unit {
            name: name.into(),
            movement: 0,
            wounds: 0,
            objective_control: 0,
            toughness: defense.toughness,
            leadership: 0,
            save: defense.save,
            invulnerable_save: defense.invulnerable_save,
            weapons: Vec::new(),
            abilities: Abilities::default(),
            points: Vec::new(),
        }
    }

    /// Stats used when this unit is being attacked
    pub fn defensive_profile(&self) -> DefensiveProfile {
        DefensiveProfile::new(self.toughness, self.save, self.invulnerable_save)
    }

    /// Whether the unit has any armour save at all
    pub fn has_armour_save(&self) -> bool {
        self.save < IMPOSSIBLE_ROLL
    }

    /// Weapons of one kind, in stored order
    pub fn weapons_of(&self, kind: WeaponKind) -> impl Iterator<Item = &WeaponProfile> + '_ {
        self.weapons.iter().filter(move |w| w.kind == kind)
    }

    pub fn melee_weapons(&self) -> impl Iterator<Item = &WeaponProfile> + '_ {
        self.weapons_of(WeaponKind::Melee)
    }

    pub fn ranged_weapons(&self) -> impl Iterator<Item = &WeaponProfile> + '_ {
        self.weapons_of(WeaponKind::Ranged)
    }

    /// Cheapest listed points cost
    pub fn min_points(&self) -> Option<u32> {
        self.points.iter().map(|p| p.cost).min()
    }
}

/// Abilities section of a datasheet
///
/// Only the invulnerable save is read by the combat math; every other list is
/// kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Abilities {
    #[serde(default, deserialize_with = "null_as_default")]
    pub wargear: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub core: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faction: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primarch: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub invul: InvulnerableAbility,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub special: Vec<Value>,
    #[serde(default)]
    pub damaged: Value,
}

/// The `invul` entry of a datasheet's abilities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvulnerableAbility {
    /// Raw save text, e.g. "4+", "" or "N/A"
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    /// Remaining fields, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One points option of a datasheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsCost {
    pub models: u32,
    pub cost: u32,
}
