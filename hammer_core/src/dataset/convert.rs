//! Datasheet records to units

use super::clean::{clean, StatError};
use super::records::{DatasheetRecord, PointsRecord, ProfileRecord, StatsRecord};
use super::DatasetError;
use crate::dice::CompoundDice;
use crate::types::WeaponKind;
use crate::unit::{Abilities, PointsCost, Unit, WeaponProfile};
use tracing::debug;

/// Range text marking a melee profile
pub const MELEE_RANGE: &str = "Melee";

/// Lowest and highest invulnerable save a datasheet can grant
const INVULNERABLE_SAVES: std::ops::RangeInclusive<u32> = 2..=6;

/// Kind of a profile listed under `rangedWeapons`
///
/// A `"Melee"` range always means melee; any other range falls back to
/// `ranged_profile_kind`.
pub fn classify_ranged_profile(range: &str, ranged_profile_kind: WeaponKind) -> WeaponKind {
    if range == MELEE_RANGE {
        WeaponKind::Melee
    } else {
        ranged_profile_kind
    }
}

/// Build a unit from a datasheet, or `None` when it has no statline
pub(crate) fn build_unit(
    sheet: DatasheetRecord,
    ranged_profile_kind: WeaponKind,
) -> Result<Option<Unit>, DatasetError> {
    let Some(stats) = sheet.stats.first() else {
        debug!("skipping datasheet without stats");
        return Ok(None);
    };
    let unit_name = stats.name.clone();

    let mut weapons = Vec::new();
    for profile in sheet.ranged_weapons.iter().flat_map(|w| &w.profiles) {
        let kind = classify_ranged_profile(&profile.range, ranged_profile_kind);
        weapons.push(build_weapon(&unit_name, profile, kind)?);
    }
    for profile in sheet.melee_weapons.iter().flat_map(|w| &w.profiles) {
        weapons.push(build_weapon(&unit_name, profile, WeaponKind::Melee)?);
    }

    let invulnerable_save = parse_invulnerable_save(&unit_name, &sheet.abilities.invul.value);

    let points = sheet
        .points
        .iter()
        .map(|p| build_points(&unit_name, p))
        .collect::<Result<Vec<_>, _>>()?;

    let unit = build_statline(stats, weapons, sheet.abilities, invulnerable_save, points)?;
    debug!(unit = %unit.name, weapons = unit.weapons.len(), "built unit");
    Ok(Some(unit))
}

/// Invulnerable save threshold, or `None` when the text is not a usable save
fn parse_invulnerable_save(unit: &str, token: &str) -> Option<u32> {
    match clean(token) {
        Ok(value) if INVULNERABLE_SAVES.contains(&value) => Some(value),
        Ok(_) => None,
        Err(err) => {
            debug!(unit, %err, "ignoring unreadable invulnerable save");
            None
        }
    }
}

fn build_statline(
    stats: &StatsRecord,
    weapons: Vec<WeaponProfile>,
    abilities: Abilities,
    invulnerable_save: Option<u32>,
    points: Vec<PointsCost>,
) -> Result<Unit, DatasetError> {
    let name = &stats.name;
    Ok(Unit {
        name: name.clone(),
        movement: stat(name, "m", &stats.m)?,
        wounds: stat(name, "w", &stats.w)?,
        objective_control: stat(name, "oc", &stats.oc)?,
        toughness: stat(name, "t", &stats.t)?,
        leadership: stat(name, "ld", &stats.ld)?,
        save: stat(name, "sv", &stats.sv)?,
        invulnerable_save,
        weapons,
        abilities,
        points,
    })
}

fn build_weapon(
    unit: &str,
    profile: &ProfileRecord,
    kind: WeaponKind,
) -> Result<WeaponProfile, DatasetError> {
    Ok(WeaponProfile {
        name: profile.name.clone(),
        keywords: profile.keywords.clone(),
        range: profile.range.clone(),
        kind,
        attacks: dice(unit, &profile.name, &profile.attacks)?,
        skill: stat(unit, "skill", &profile.skill)?,
        strength: stat(unit, "strength", &profile.strength)?,
        ap: stat(unit, "ap", &profile.ap)?,
        damage: dice(unit, &profile.name, &profile.damage)?,
    })
}

fn build_points(unit: &str, points: &PointsRecord) -> Result<PointsCost, DatasetError> {
    Ok(PointsCost {
        models: stat(unit, "models", &points.models)?,
        cost: stat(unit, "cost", &points.cost)?,
    })
}

fn stat(unit: &str, field: &'static str, token: &str) -> Result<u32, DatasetError> {
    clean(token).map_err(|source: StatError| DatasetError::Stat {
        unit: unit.to_string(),
        field,
        source,
    })
}

fn dice(unit: &str, weapon: &str, token: &str) -> Result<CompoundDice, DatasetError> {
    token.parse().map_err(|source| DatasetError::Dice {
        unit: unit.to_string(),
        weapon: weapon.to_string(),
        source,
    })
}
