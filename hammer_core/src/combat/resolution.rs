//! Expected damage through the hit -> wound -> save chain

use super::result::{AttackResult, FightReport};
use crate::dice::ExpectedRoll;
use crate::probability::{success_probability, wound_threshold};
use crate::types::{Phase, WeaponKind};
use crate::unit::{DefensiveProfile, Unit, WeaponProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The save roll a target makes against a wound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "threshold", rename_all = "snake_case")]
pub enum SaveUsed {
    /// Armour save after AP, may be 7+ or worse (no save)
    Armour(u32),
    /// Invulnerable save, ignoring AP
    Invulnerable(u32),
}

impl SaveUsed {
    /// Roll needed to save
    pub fn threshold(&self) -> u32 {
        match *self {
            SaveUsed::Armour(t) | SaveUsed::Invulnerable(t) => t,
        }
    }
}

/// Pick the save a target uses against a weapon with `ap`
///
/// The invulnerable save replaces the armour save only when it is strictly
/// lower than `save + ap`.
pub fn choose_save(target: &DefensiveProfile, ap: u32) -> SaveUsed {
    let armour = target.save.saturating_add(ap);
    match target.invulnerable_save {
        Some(invulnerable) if invulnerable < armour => SaveUsed::Invulnerable(invulnerable),
        _ => SaveUsed::Armour(armour),
    }
}

/// Every term of one weapon's expected damage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackBreakdown {
    /// Expected number of attacks
    pub attacks: f64,
    pub hit_probability: f64,
    pub wound_threshold: u32,
    pub wound_probability: f64,
    pub save: SaveUsed,
    /// Chance a wound is not saved: `1 - P(save)`
    pub unsaved_probability: f64,
    /// Expected damage per unsaved wound
    pub damage_per_wound: f64,
    pub expected_hits: f64,
    pub expected_wounds: f64,
    pub expected_unsaved_wounds: f64,
    /// `attacks * hit * wound * damage * (1 - save)`
    pub expected_damage: f64,
}

/// Resolve one weapon profile against a target's defenses
///
/// Steps:
/// 1. Hit on the weapon's skill (0 hits automatically)
/// 2. Wound from the strength vs toughness table
/// 3. Save with armour + AP, or the invulnerable save when strictly better
/// 4. Multiply by expected attacks and damage
pub fn resolve_attack(weapon: &WeaponProfile, target: &DefensiveProfile) -> AttackBreakdown {
    let attacks = weapon.attacks.expected_value();
    let damage_per_wound = weapon.damage.expected_value();

    let hit_probability = success_probability(weapon.skill);
    let wound_threshold = wound_threshold(weapon.strength, target.toughness);
    let wound_probability = success_probability(wound_threshold);

    let save = choose_save(target, weapon.ap);
    if let SaveUsed::Invulnerable(threshold) = save {
        debug!(weapon = %weapon.name, threshold, "using invulnerable save");
    }
    let unsaved_probability = 1.0 - success_probability(save.threshold());

    let expected_damage =
        attacks * hit_probability * wound_probability * damage_per_wound * unsaved_probability;

    // The same chain as dice pools, for per-step counts
    let expected_hits = ExpectedRoll::new(attacks).successes(weapon.skill);
    let expected_wounds = ExpectedRoll::new(expected_hits).successes(wound_threshold);
    let expected_unsaved_wounds = ExpectedRoll::new(expected_wounds).failures(save.threshold());

    AttackBreakdown {
        attacks,
        hit_probability,
        wound_threshold,
        wound_probability,
        save,
        unsaved_probability,
        damage_per_wound,
        expected_hits,
        expected_wounds,
        expected_unsaved_wounds,
        expected_damage,
    }
}

/// An attacker/target pairing
///
/// Borrows both units; nothing is mutated.
#[derive(Debug, Clone, Copy)]
pub struct CombatResolver<'a> {
    attacker: &'a Unit,
    target: &'a Unit,
}

impl<'a> CombatResolver<'a> {
    pub fn new(attacker: &'a Unit, target: &'a Unit) -> Self {
        CombatResolver { attacker, target }
    }

    pub fn attacker(&self) -> &'a Unit {
        self.attacker
    }

    pub fn target(&self) -> &'a Unit {
        self.target
    }

    /// All terms of one weapon's expected damage against the target
    pub fn breakdown(&self, weapon: &WeaponProfile) -> AttackBreakdown {
        resolve_attack(weapon, &self.target.defensive_profile())
    }

    /// Expected damage per use of `weapon` against the target
    pub fn expected_damage(&self, weapon: &WeaponProfile) -> f64 {
        self.breakdown(weapon).expected_damage
    }

    /// One result per melee weapon, in datasheet order
    pub fn resolve_all_melee_attacks(&self) -> Vec<AttackResult> {
        self.resolve(WeaponKind::Melee)
    }

    /// One result per ranged weapon, in datasheet order
    pub fn resolve_all_ranged_attacks(&self) -> Vec<AttackResult> {
        self.resolve(WeaponKind::Ranged)
    }

    /// One result per weapon of `kind`, in datasheet order
    pub fn resolve(&self, kind: WeaponKind) -> Vec<AttackResult> {
        debug!(
            attacker = %self.attacker.name,
            target = %self.target.name,
            %kind,
            "resolving attacks"
        );
        self.attacker
            .weapons_of(kind)
            .map(|weapon| self.resolve_weapon(weapon))
            .collect()
    }

    /// Resolve every weapon the phase allows and collect a report
    pub fn resolve_phase(&self, phase: Phase) -> FightReport {
        let attacks = self
            .attacker
            .weapons
            .iter()
            .filter(|w| phase.includes(w.kind))
            .map(|weapon| self.resolve_weapon(weapon))
            .collect();

        FightReport {
            attacker: self.attacker.name.clone(),
            target: self.target.name.clone(),
            phase,
            attacks,
        }
    }

    fn resolve_weapon(&self, weapon: &WeaponProfile) -> AttackResult {
        let breakdown = self.breakdown(weapon);
        debug!(
            weapon = %weapon.name,
            expected_damage = breakdown.expected_damage,
            "attacking with {} deals {:.3} on average",
            weapon.name,
            breakdown.expected_damage
        );
        AttackResult::new(weapon, breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(
        kind: WeaponKind,
        attacks: &str,
        skill: u32,
        strength: u32,
        ap: u32,
        damage: &str,
    ) -> WeaponProfile {
        WeaponProfile::new(
            "Test weapon",
            kind,
            attacks.parse().unwrap(),
            damage.parse().unwrap(),
        )
        .with_skill(skill)
        .with_strength(strength)
        .with_ap(ap)
    }

    fn named(name: &str, kind: WeaponKind) -> WeaponProfile {
        let mut w = weapon(kind, "2", 3, 4, 0, "1");
        w.name = name.to_string();
        w
    }

    #[test]
    fn test_basic_chain() {
        // 1 attack, 4+ to hit, S4 vs T4, D1, AP0 vs 5+ save
        let target = DefensiveProfile::new(4, 5, None);
        let w = weapon(WeaponKind::Melee, "1", 4, 4, 0, "1");

        let result = resolve_attack(&w, &target);
        let expected = 1.0 * 0.5 * 0.5 * 1.0 * (1.0 - 1.0 / 3.0);
        assert!((result.expected_damage - expected).abs() < 1e-9);
        assert!((result.hit_probability - 0.5).abs() < f64::EPSILON);
        assert_eq!(result.wound_threshold, 4);
        assert_eq!(result.save, SaveUsed::Armour(5));
    }

    #[test]
    fn test_unsaved_term_is_grouped() {
        // damage * (1 - p), never damage * 1 - p
        let target = DefensiveProfile::new(4, 5, None);
        let w = weapon(WeaponKind::Melee, "1", 4, 4, 0, "1");

        let result = resolve_attack(&w, &target);
        let before_save = 0.25;
        let save_chance = 1.0 / 3.0;
        let grouped = before_save * (1.0 - save_chance);
        let ungrouped = before_save * 1.0 - save_chance;

        assert!((result.expected_damage - grouped).abs() < 1e-9);
        assert!((result.expected_damage - ungrouped).abs() > 0.1);
        assert!(result.expected_damage > 0.0);
    }

    #[test]
    fn test_invulnerable_beats_unsaveable_armour() {
        // Sv6+ with AP1 would need a 7+
        let target = DefensiveProfile::new(4, 6, Some(4));
        let w = weapon(WeaponKind::Melee, "1", 4, 4, 1, "1");

        let result = resolve_attack(&w, &target);
        assert_eq!(result.save, SaveUsed::Invulnerable(4));
        assert!((result.unsaved_probability - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invulnerable_must_be_strictly_better() {
        let target = DefensiveProfile::new(4, 3, Some(4));
        assert_eq!(choose_save(&target, 1), SaveUsed::Armour(4));
        assert_eq!(choose_save(&target, 2), SaveUsed::Invulnerable(4));
        assert_eq!(choose_save(&target, 0), SaveUsed::Armour(3));
    }

    #[test]
    fn test_no_save_at_all() {
        let target = DefensiveProfile::new(3, 7, None);
        let w = weapon(WeaponKind::Melee, "2", 3, 3, 0, "1");

        let result = resolve_attack(&w, &target);
        assert_eq!(result.save, SaveUsed::Armour(7));
        assert!((result.unsaved_probability - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ap_past_seven_stays_unsaveable() {
        let target = DefensiveProfile::new(4, 6, None);
        let w = weapon(WeaponKind::Melee, "1", 1, 4, 3, "1");

        let result = resolve_attack(&w, &target);
        assert_eq!(result.save, SaveUsed::Armour(9));
        assert!((result.unsaved_probability - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_automatic_hits() {
        let target = DefensiveProfile::new(4, 7, None);
        let torrent = weapon(WeaponKind::Ranged, "d6", 0, 4, 0, "1");

        let result = resolve_attack(&torrent, &target);
        assert!((result.hit_probability - 1.0).abs() < f64::EPSILON);
        // 3.5 attacks * 1 * 0.5 * 1 * 1
        assert!((result.expected_damage - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_dice_damage_and_attacks() {
        // D6+1 attacks (4.5), 3+ to hit, S8 vs T4 (2+), D3 damage (2), AP2 vs 3+ (5+)
        let target = DefensiveProfile::new(4, 3, None);
        let w = weapon(WeaponKind::Melee, "D6+1", 3, 8, 2, "D3");

        let result = resolve_attack(&w, &target);
        let expected = 4.5 * (4.0 / 6.0) * (5.0 / 6.0) * 2.0 * (1.0 - 2.0 / 6.0);
        assert!((result.expected_damage - expected).abs() < 1e-9);
    }

    #[test]
    fn test_step_counts_match_expected_damage() {
        let target = DefensiveProfile::new(5, 2, Some(4));
        let w = weapon(WeaponKind::Melee, "4", 3, 5, 2, "2");

        let result = resolve_attack(&w, &target);
        assert!((result.expected_hits - 4.0 * (4.0 / 6.0)).abs() < 1e-9);
        assert!((result.expected_wounds - result.expected_hits * 0.5).abs() < 1e-9);
        let via_counts = result.expected_unsaved_wounds * result.damage_per_wound;
        assert!((via_counts - result.expected_damage).abs() < 1e-9);
    }

    #[test]
    fn test_resolver_uses_target_defenses() {
        let attacker = Unit::new("Attacker", DefensiveProfile::new(4, 3, None));
        let target = Unit::new("Target", DefensiveProfile::new(4, 5, None));
        let resolver = CombatResolver::new(&attacker, &target);

        let w = weapon(WeaponKind::Melee, "1", 4, 4, 0, "1");
        let expected = 0.25 * (2.0 / 3.0);
        assert!((resolver.expected_damage(&w) - expected).abs() < 1e-9);
        assert_eq!(resolver.attacker().name, "Attacker");
        assert_eq!(resolver.target().name, "Target");
    }

    #[test]
    fn test_resolve_all_melee_attacks_in_order() {
        let mut attacker = Unit::new("Attacker", DefensiveProfile::new(4, 3, None));
        attacker.weapons = vec![
            named("Bolt pistol", WeaponKind::Ranged),
            named("Chainsword", WeaponKind::Melee),
            named("Boltgun", WeaponKind::Ranged),
            named("Power fist", WeaponKind::Melee),
        ];
        let target = Unit::new("Target", DefensiveProfile::new(4, 3, None));
        let resolver = CombatResolver::new(&attacker, &target);

        let melee = resolver.resolve_all_melee_attacks();
        let names: Vec<&str> = melee.iter().map(|r| r.weapon.as_str()).collect();
        assert_eq!(names, vec!["Chainsword", "Power fist"]);
        assert!(melee.iter().all(|r| r.kind == WeaponKind::Melee));

        let ranged = resolver.resolve_all_ranged_attacks();
        let names: Vec<&str> = ranged.iter().map(|r| r.weapon.as_str()).collect();
        assert_eq!(names, vec!["Bolt pistol", "Boltgun"]);
    }

    #[test]
    fn test_resolve_phase_all_keeps_datasheet_order() {
        let mut attacker = Unit::new("Attacker", DefensiveProfile::new(4, 3, None));
        attacker.weapons = vec![
            named("Boltgun", WeaponKind::Ranged),
            named("Chainsword", WeaponKind::Melee),
        ];
        let resolver = CombatResolver::new(&attacker, &attacker);

        let report = resolver.resolve_phase(Phase::All);
        assert_eq!(report.attacks.len(), 2);
        assert_eq!(report.attacks[0].weapon, "Boltgun");
        assert_eq!(report.phase, Phase::All);

        let melee_only = resolver.resolve_phase(Phase::Melee);
        assert_eq!(melee_only.attacks.len(), 1);
    }

    #[test]
    fn test_no_weapons_gives_no_results() {
        let attacker = Unit::new("Unarmed", DefensiveProfile::new(4, 3, None));
        let resolver = CombatResolver::new(&attacker, &attacker);
        assert!(resolver.resolve_all_melee_attacks().is_empty());
    }
}
