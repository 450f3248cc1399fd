//! AttackResult and FightReport - Outcome of resolving a unit's weapons

use super::resolution::AttackBreakdown;
use crate::types::{Phase, WeaponKind};
use crate::unit::WeaponProfile;
use serde::{Deserialize, Serialize};

/// Expected damage of one weapon profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    /// Weapon profile name
    pub weapon: String,
    pub kind: WeaponKind,
    /// Average damage per use of the weapon
    pub expected_damage: f64,
    /// How the expected damage was reached
    pub breakdown: AttackBreakdown,
}

impl AttackResult {
    pub fn new(weapon: &WeaponProfile, breakdown: AttackBreakdown) -> Self {
        AttackResult {
            weapon: weapon.name.clone(),
            kind: weapon.kind,
            expected_damage: breakdown.expected_damage,
            breakdown,
        }
    }
}

/// All attacks one unit makes against another in a phase
///
/// Weapons are listed separately; nothing here assumes they all fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightReport {
    pub attacker: String,
    pub target: String,
    pub phase: Phase,
    pub attacks: Vec<AttackResult>,
}

impl FightReport {
    /// Sum of every weapon's expected damage
    pub fn total_expected_damage(&self) -> f64 {
        self.attacks.iter().map(|a| a.expected_damage).sum()
    }

    /// The weapon with the highest expected damage
    pub fn best_attack(&self) -> Option<&AttackResult> {
        self.attacks
            .iter()
            .max_by(|a, b| a.expected_damage.total_cmp(&b.expected_damage))
    }

    /// Get expected damage for a weapon by name
    pub fn attack(&self, weapon: &str) -> Option<&AttackResult> {
        self.attacks.iter().find(|a| a.weapon == weapon)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.attacks.is_empty() {
            return format!(
                "{} has no {} weapons to use against {}",
                self.attacker, self.phase, self.target
            );
        }

        let mut parts = vec![format!(
            "{} attacking {} ({}): {} weapon{}, {:.2} expected damage in total",
            self.attacker,
            self.target,
            self.phase,
            self.attacks.len(),
            if self.attacks.len() == 1 { "" } else { "s" },
            self.total_expected_damage()
        )];

        if let Some(best) = self.best_attack() {
            parts.push(format!("best: {} ({:.2})", best.weapon, best.expected_damage));
        }

        parts.join(", ")
    }
}
