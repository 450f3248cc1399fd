//! Raw dataset records, as laid out in the exported JSON

use crate::unit::Abilities;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top level of the export: `{"keyvaluepairs": [{"data": [...]}]}`
#[derive(Debug, Deserialize)]
pub(crate) struct ExportFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub keyvaluepairs: Vec<ExportEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExportEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<FactionRecord>,
}

/// A faction entry. Datasheets stay raw until the faction is selected.
#[derive(Debug, Deserialize)]
pub(crate) struct FactionRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub datasheets: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DatasheetRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ranged_weapons: Vec<WeaponRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub melee_weapons: Vec<WeaponRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<StatsRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub abilities: Abilities,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: Vec<PointsRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeaponRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: Vec<ProfileRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileRecord {
    #[serde(deserialize_with = "token")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "token")]
    pub range: String,
    #[serde(deserialize_with = "token")]
    pub attacks: String,
    #[serde(default, deserialize_with = "token")]
    pub skill: String,
    #[serde(default, deserialize_with = "token")]
    pub strength: String,
    #[serde(default, deserialize_with = "token")]
    pub ap: String,
    #[serde(deserialize_with = "token")]
    pub damage: String,
}

/// One statline; only the first line of a datasheet is used
#[derive(Debug, Deserialize)]
pub(crate) struct StatsRecord {
    #[serde(deserialize_with = "token")]
    pub name: String,
    #[serde(default, deserialize_with = "token")]
    pub m: String,
    #[serde(default, deserialize_with = "token")]
    pub t: String,
    #[serde(default, deserialize_with = "token")]
    pub sv: String,
    #[serde(default, deserialize_with = "token")]
    pub w: String,
    #[serde(default, deserialize_with = "token")]
    pub ld: String,
    #[serde(default, deserialize_with = "token")]
    pub oc: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PointsRecord {
    #[serde(default, deserialize_with = "token")]
    pub models: String,
    #[serde(default, deserialize_with = "token")]
    pub cost: String,
}

/// Whether a raw datasheet carries at least one statline
///
/// Checked before the rest of the sheet is read, so sheets without stats are
/// never parsed.
pub(crate) fn has_statline(sheet: &Value) -> bool {
    match sheet.get("stats") {
        None | Some(Value::Null) => false,
        Some(Value::Array(lines)) => !lines.is_empty(),
        Some(_) => true,
    }
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a stat token that may be stored as a string, a number or null
fn token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}
