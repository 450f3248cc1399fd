//! Combat resolution - Expected damage of weapons against a target

mod resolution;
mod result;

pub use resolution::{choose_save, resolve_attack, AttackBreakdown, CombatResolver, SaveUsed};
pub use result::{AttackResult, FightReport};
