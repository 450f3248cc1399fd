//! Command-line arguments and how they override the config file

use clap::{Parser, ValueEnum};
use hammer_core::config::{default_config, load_config, ConfigError, HammerConfig};
use hammer_core::{Phase, WeaponKind};
use std::path::PathBuf;

/// Expected damage between two datasheets
#[derive(Parser, Debug)]
#[command(name = "hammer", version, about)]
pub struct Args {
    /// TOML config file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exported datasheet JSON
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Faction id in the dataset, e.g. CSM
    #[arg(short, long)]
    pub faction: Option<String>,

    /// Attacking unit name (exact match)
    #[arg(short, long)]
    pub attacker: Option<String>,

    /// Target unit name (exact match)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Which weapons attack
    #[arg(short, long, value_enum)]
    pub phase: Option<PhaseArg>,

    /// Kind given to non-melee profiles listed under rangedWeapons
    #[arg(long, value_enum)]
    pub ranged_profile_kind: Option<KindArg>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseArg {
    Melee,
    Ranged,
    All,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Melee => Phase::Melee,
            PhaseArg::Ranged => Phase::Ranged,
            PhaseArg::All => Phase::All,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Melee,
    Ranged,
}

impl From<KindArg> for WeaponKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Melee => WeaponKind::Melee,
            KindArg::Ranged => WeaponKind::Ranged,
        }
    }
}

impl Args {
    /// Config file (or defaults) with command-line values applied on top
    pub fn resolve_config(&self) -> Result<HammerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => default_config(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut HammerConfig) {
        if let Some(path) = &self.dataset {
            config.dataset.path = path.clone();
        }
        if let Some(kind) = self.ranged_profile_kind {
            config.dataset.ranged_profile_kind = kind.into();
        }
        if let Some(faction) = &self.faction {
            config.scenario.faction = faction.clone();
        }
        if let Some(attacker) = &self.attacker {
            config.scenario.attacker = attacker.clone();
        }
        if let Some(target) = &self.target {
            config.scenario.target = target.clone();
        }
        if let Some(phase) = self.phase {
            config.scenario.phase = phase.into();
        }
    }
}
