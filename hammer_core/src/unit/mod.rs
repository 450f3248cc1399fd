//! Unit entities - weapons, datasheets and factions

mod datasheet;
mod faction;
mod weapon;

pub use datasheet::{Abilities, DefensiveProfile, InvulnerableAbility, PointsCost, Unit};
pub use faction::Faction;
pub use weapon::WeaponProfile;

use thiserror::Error;

/// Unit lookup error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Could not find unit '{0}'")]
    UnitNotFound(String),
}
