//! Faction - An ordered roster of units, unique by name

use super::{LookupError, Unit};
use std::collections::HashSet;
use tracing::debug;

/// All units of one faction in dataset order
#[derive(Debug, Clone, Default)]
pub struct Faction {
    id: String,
    units: Vec<Unit>,
}

impl Faction {
    /// Build a faction. Later units sharing a name with an earlier one are dropped.
    pub fn new(id: impl Into<String>, units: impl IntoIterator<Item = Unit>) -> Self {
        let id = id.into();
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for unit in units {
            if seen.insert(unit.name.clone()) {
                kept.push(unit);
            } else {
                debug!(faction = %id, unit = %unit.name, "skipping duplicate unit");
            }
        }

        Faction { id, units: kept }
    }

    /// Dataset id of the faction (e.g. "CSM")
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Find a unit by exact, case-sensitive name
    pub fn find_unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    /// Like `find_unit`, but a miss is an error
    pub fn unit(&self, name: &str) -> Result<&Unit, LookupError> {
        self.find_unit(name)
            .ok_or_else(|| LookupError::UnitNotFound(name.to_string()))
    }

    pub fn unit_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.units.iter().map(|u| u.name.as_str())
    }
}
