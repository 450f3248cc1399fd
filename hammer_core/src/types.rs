//! Core enums shared across the crate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a weapon fights in melee or shoots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Melee,
    Ranged,
}

impl WeaponKind {
    /// Get all weapon kinds
    pub fn all() -> &'static [WeaponKind] {
        &[WeaponKind::Melee, WeaponKind::Ranged]
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaponKind::Melee => write!(f, "melee"),
            WeaponKind::Ranged => write!(f, "ranged"),
        }
    }
}

/// Which weapons take part in a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Melee,
    Ranged,
    All,
}

impl Phase {
    /// Whether a weapon of `kind` attacks in this phase
    pub fn includes(&self, kind: WeaponKind) -> bool {
        match self {
            Phase::Melee => kind == WeaponKind::Melee,
            Phase::Ranged => kind == WeaponKind::Ranged,
            Phase::All => true,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Melee => write!(f, "melee"),
            Phase::Ranged => write!(f, "ranged"),
            Phase::All => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_includes() {
        assert!(Phase::Melee.includes(WeaponKind::Melee));
        assert!(!Phase::Melee.includes(WeaponKind::Ranged));
        assert!(Phase::Ranged.includes(WeaponKind::Ranged));
        assert!(!Phase::Ranged.includes(WeaponKind::Melee));
        for kind in WeaponKind::all() {
            assert!(Phase::All.includes(*kind));
        }
    }

    #[test]
    fn test_serde_names() {
        let kind: WeaponKind = serde_json::from_str("\"ranged\"").unwrap();
        assert_eq!(kind, WeaponKind::Ranged);
        assert_eq!(serde_json::to_string(&Phase::All).unwrap(), "\"all\"");
    }
}
