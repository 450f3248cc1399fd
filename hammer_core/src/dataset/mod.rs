//! Dataset ingestion - Build a faction from the exported datasheet JSON

mod clean;
mod convert;
mod records;

pub use clean::{clean, StatError, NOT_APPLICABLE};
pub use convert::{classify_ranged_profile, MELEE_RANGE};
pub(crate) use records::null_as_default;

use crate::dice::DiceError;
use crate::types::WeaponKind;
use crate::unit::Faction;
use records::{has_statline, DatasheetRecord, ExportFile};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Dataset loading error
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Faction '{0}' not found in dataset")]
    FactionNotFound(String),
    #[error("Bad dice value on '{weapon}' of unit '{unit}': {source}")]
    Dice {
        unit: String,
        weapon: String,
        source: DiceError,
    },
    #[error("Bad '{field}' value on unit '{unit}': {source}")]
    Stat {
        unit: String,
        field: &'static str,
        source: StatError,
    },
}

/// Load one faction from a dataset file
pub fn load_faction(
    path: &Path,
    faction_id: &str,
    ranged_profile_kind: WeaponKind,
) -> Result<Faction, DatasetError> {
    let content = fs::read_to_string(path)?;
    parse_faction(&content, faction_id, ranged_profile_kind)
}

/// Load one faction from dataset JSON
///
/// The first faction whose id matches is used. Datasheets without a statline
/// produce no unit.
pub fn parse_faction(
    content: &str,
    faction_id: &str,
    ranged_profile_kind: WeaponKind,
) -> Result<Faction, DatasetError> {
    let export: ExportFile = serde_json::from_str(content)?;

    let record = export
        .keyvaluepairs
        .into_iter()
        .flat_map(|entry| entry.data)
        .find(|faction| faction.id == faction_id)
        .ok_or_else(|| DatasetError::FactionNotFound(faction_id.to_string()))?;

    let sheets: Vec<Value> = if record.datasheets.is_null() {
        Vec::new()
    } else {
        serde_json::from_value(record.datasheets)?
    };
    let sheet_count = sheets.len();

    let mut units = Vec::new();
    for raw in sheets {
        if !has_statline(&raw) {
            debug!("skipping datasheet without stats");
            continue;
        }
        let sheet: DatasheetRecord = serde_json::from_value(raw)?;
        if let Some(unit) = convert::build_unit(sheet, ranged_profile_kind)? {
            units.push(unit);
        }
    }

    let faction = Faction::new(faction_id, units);
    info!(
        faction = faction_id,
        datasheets = sheet_count,
        units = faction.len(),
        "loaded faction"
    );
    Ok(faction)
}
