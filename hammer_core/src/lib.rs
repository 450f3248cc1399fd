//! hammer_core - Expected-damage math for tabletop wargame units
//!
//! This library provides:
//! - CompoundDice / DiceExpression: Datasheet dice values and their averages
//! - probability: d6 success chances and the wound table
//! - CombatResolver: Expected damage of a unit's weapons against a target
//! - dataset: Faction loading from the exported datasheet JSON

pub mod combat;
pub mod config;
pub mod dataset;
pub mod dice;
pub mod prelude;
pub mod probability;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use combat::{AttackBreakdown, AttackResult, CombatResolver, FightReport, SaveUsed};
pub use config::{default_config, HammerConfig};
pub use dataset::{clean, load_faction, parse_faction, DatasetError};
pub use dice::{CompoundDice, DiceError, DiceExpression, ExpectedRoll};
pub use probability::{success_probability, wound_threshold};
pub use types::{Phase, WeaponKind};
pub use unit::{DefensiveProfile, Faction, LookupError, Unit, WeaponProfile};
