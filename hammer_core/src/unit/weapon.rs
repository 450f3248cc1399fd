//! WeaponProfile - One firing/fighting profile of a weapon

use crate::dice::CompoundDice;
use crate::types::WeaponKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single weapon profile as printed on a datasheet
///
/// Keywords are carried for display only; no keyword changes the math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Display name
    pub name: String,
    /// Weapon keywords (e.g. "lethal hits"), not interpreted
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Range text from the dataset ("Melee", "24\"", ...)
    #[serde(default)]
    pub range: String,
    /// Melee or ranged
    pub kind: WeaponKind,
    /// Number of attacks
    pub attacks: CompoundDice,
    /// Ballistic/weapon skill: minimum roll to hit, 0 = hits automatically
    pub skill: u32,
    /// Strength compared against target toughness
    pub strength: u32,
    /// Armour penetration, added to the target's save
    pub ap: u32,
    /// Damage per unsaved wound
    pub damage: CompoundDice,
}

impl WeaponProfile {
    /// Create a profile with no skill, strength or AP set
    pub fn new(
        name: impl Into<String>,
        kind: WeaponKind,
        attacks: CompoundDice,
        damage: CompoundDice,
    ) -> Self {
        WeaponProfile {
            name: name.into(),
            keywords: Vec::new(),
            range: match kind {
                WeaponKind::Melee => "Melee".to_string(),
                WeaponKind::Ranged => String::new(),
            },
            kind,
            attacks,
            skill: 0,
            strength: 0,
            ap: 0,
            damage,
        }
    }

    pub fn with_skill(mut self, skill: u32) -> Self {
        self.skill = skill;
        self
    }

    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_ap(mut self, ap: u32) -> Self {
        self.ap = ap;
        self
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn is_melee(&self) -> bool {
        self.kind == WeaponKind::Melee
    }
}

impl fmt::Display for WeaponProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let skill = if self.skill == 0 {
            "N/A".to_string()
        } else {
            format!("{}+", self.skill)
        };
        write!(
            f,
            "{} [A{} {} S{} AP-{} D{}]",
            self.name, self.attacks, skill, self.strength, self.ap, self.damage
        )
    }
}
