//! Prelude module for convenient imports
//!
//! ```rust
//! use hammer_core::prelude::*;
//! ```

// Dice
pub use crate::dice::{CompoundDice, DiceExpression, ExpectedRoll};

// Math
pub use crate::probability::{success_probability, wound_threshold};

// Combat
pub use crate::combat::{AttackResult, CombatResolver, FightReport};

// Entities
pub use crate::types::{Phase, WeaponKind};
pub use crate::unit::{DefensiveProfile, Faction, Unit, WeaponProfile};

// Loading
pub use crate::config::{default_config, HammerConfig};
pub use crate::dataset::load_faction;
